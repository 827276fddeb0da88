pub mod fetch;
pub mod tables;
pub mod types;

pub use fetch::fetch_document;
pub use tables::extract_row_fragments;
pub use types::Document;
