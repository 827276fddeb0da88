// src/doc/tables.rs

use tracing::debug;

use super::types::{Document, StructuralElement, TableRow};

/// Every table row in the document, in body order, reduced to text
/// fragments. Non-table structural elements contribute nothing; multiple
/// tables feed one flat row sequence.
pub fn extract_row_fragments(document: &Document) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let Some(body) = &document.body else {
        return rows;
    };
    for element in &body.content {
        if let Some(table) = &element.table {
            debug!(rows = table.table_rows.len(), "walking table");
            rows.extend(table.table_rows.iter().map(row_fragments));
        }
    }
    rows
}

/// Flatten one row to its trimmed, non-empty text fragments, in cell and
/// run order.
fn row_fragments(row: &TableRow) -> Vec<String> {
    let mut fragments = Vec::new();
    for cell in &row.table_cells {
        collect_fragments(&cell.content, &mut fragments);
    }
    fragments
}

fn collect_fragments(content: &[StructuralElement], out: &mut Vec<String>) {
    for element in content {
        if let Some(paragraph) = &element.paragraph {
            for paragraph_element in &paragraph.elements {
                if let Some(run) = &paragraph_element.text_run {
                    let text = run.content.trim();
                    if !text.is_empty() {
                        out.push(text.to_string());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_from_json(raw: &str) -> Document {
        serde_json::from_str(raw).expect("fixture should deserialize")
    }

    #[test]
    fn flattens_table_rows_to_fragments() {
        let document = doc_from_json(
            r#"{
              "title": "secret",
              "body": { "content": [
                { "paragraph": { "elements": [ { "textRun": { "content": "intro text\n" } } ] } },
                { "table": { "tableRows": [
                  { "tableCells": [
                    { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "0\n" } } ] } } ] },
                    { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "█\n" } } ] } } ] },
                    { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "4\n" } } ] } } ] }
                  ] },
                  { "tableCells": [
                    { "content": [ { "paragraph": { "elements": [
                        { "textRun": { "content": "  " } },
                        { "textRun": { "content": "12\n" } }
                    ] } } ] },
                    { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "7\n" } } ] } } ] },
                    { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "░\n" } } ] } } ] }
                  ] }
                ] } }
              ] }
            }"#,
        );

        let rows = extract_row_fragments(&document);
        assert_eq!(rows, vec![vec!["0", "█", "4"], vec!["12", "7", "░"]]);
    }

    #[test]
    fn two_tables_feed_one_row_sequence() {
        let document = doc_from_json(
            r#"{ "body": { "content": [
                { "table": { "tableRows": [
                  { "tableCells": [ { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "a" } } ] } } ] } ] }
                ] } },
                { "table": { "tableRows": [
                  { "tableCells": [ { "content": [ { "paragraph": { "elements": [ { "textRun": { "content": "b" } } ] } } ] } ] }
                ] } }
            ] } }"#,
        );

        let rows = extract_row_fragments(&document);
        assert_eq!(rows, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn document_without_body_has_no_rows() {
        let document = doc_from_json(r#"{ "title": "empty" }"#);
        assert!(extract_row_fragments(&document).is_empty());
    }

    #[test]
    fn unknown_structural_kinds_are_ignored() {
        let document = doc_from_json(
            r#"{ "body": { "content": [
                { "sectionBreak": { "sectionStyle": {} } },
                { "table": { "tableRows": [ { "tableCells": [] } ] } }
            ] } }"#,
        );

        let rows = extract_row_fragments(&document);
        assert_eq!(rows, vec![Vec::<String>::new()]);
    }
}
