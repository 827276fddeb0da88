// src/grid/mod.rs

use crate::decode::{Triple, VISIBLE_INK};

/// Cells no triple wrote to.
pub const BLANK: char = ' ';

/// The 2D canvas triples are projected onto. Dimensions come from the
/// observed coordinates alone; there is no fixed canvas size.
#[derive(Debug)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid sized to the triples' bounding box, one past the
    /// maximum x and y. Returns `None` for an empty input; callers take
    /// the no-data path instead.
    pub fn from_triples(triples: &[Triple]) -> Option<Self> {
        if triples.is_empty() {
            return None;
        }
        let width = triples.iter().map(|t| t.x).max().unwrap_or(0) + 1;
        let height = triples.iter().map(|t| t.y).max().unwrap_or(0) + 1;

        let mut cells = vec![vec![BLANK; width]; height];
        for triple in triples {
            // last write wins on duplicate coordinates
            cells[triple.y][triple.x] = triple.symbol;
        }
        Some(Self { cells })
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Render to printable lines, row 0 first.
    ///
    /// Fully blank rows are dropped outright, compacting the message
    /// vertically. Within a kept row only visible ink is written through;
    /// every other cell becomes a single space.
    pub fn render_lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .filter(|row| !row.iter().all(|&cell| cell == BLANK))
            .map(|row| {
                row.iter()
                    .map(|&cell| if VISIBLE_INK.contains(&cell) { cell } else { ' ' })
                    .collect()
            })
            .collect()
    }
}
