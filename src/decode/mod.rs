// src/decode/mod.rs

use tracing::{info, warn};

/// Glyphs recognized as drawable symbols when telling the symbol fragment
/// apart from the coordinate fragments.
pub const INK_ALPHABET: [char; 3] = ['█', '░', '▀'];

/// The subset the renderer writes through literally; anything else in a
/// printed row becomes a space.
pub const VISIBLE_INK: [char; 2] = ['█', '░'];

/// One decoded table row: a symbol and where it lands on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    pub x: usize,
    pub y: usize,
    pub symbol: char,
}

fn as_ink(fragment: &str) -> Option<char> {
    let mut chars = fragment.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if INK_ALPHABET.contains(&c) => Some(c),
        _ => None,
    }
}

/// Decode one row's fragments.
///
/// A row must carry exactly three fragments laid out `[x, symbol, y]` or
/// `[x, y, symbol]`; the symbol is whichever fragment is a single ink
/// glyph. Anything else is a skip, never an error: documents are allowed
/// to contain header rows and stray text. Coordinates parse as `usize`,
/// so negative text skips the row too.
pub fn parse_row(fragments: &[String]) -> Option<Triple> {
    let [a, b, c] = fragments else {
        // header/label rows and partially filled rows land here
        return None;
    };

    let parsed = if let Some(symbol) = as_ink(b) {
        a.parse()
            .and_then(|x| c.parse().map(|y| Triple { x, y, symbol }))
    } else if let Some(symbol) = as_ink(c) {
        a.parse()
            .and_then(|x| b.parse().map(|y| Triple { x, y, symbol }))
    } else {
        warn!(?fragments, "no ink glyph in row, skipping");
        return None;
    };

    match parsed {
        Ok(triple) => Some(triple),
        Err(_) => {
            warn!(?fragments, "skipping invalid row");
            None
        }
    }
}

/// Decode every row, keeping input order. Duplicate coordinates are kept
/// as-is; the grid applies last-write-wins.
pub fn parse_rows(rows: &[Vec<String>]) -> Vec<Triple> {
    let triples: Vec<Triple> = rows.iter().filter_map(|row| parse_row(row)).collect();
    info!(count = triples.len(), "extracted triples");
    triples
}
