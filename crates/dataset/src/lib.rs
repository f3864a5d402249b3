//! Dataset loaders: convert external sources (a directory of markdown
//! files, a JSON file, a tabular query session) into a uniform row schema.

mod json;
mod markdown;
mod pdf;
mod table;

pub use json::load_dataset_from_json;
pub use markdown::load_dataset_from_markdown;
pub use pdf::extract_raw_text_from_pdf;
pub use table::{load_dataset_from_table, QueryResult, QuerySession};

use std::collections::HashMap;
use std::path::PathBuf;

use docprep_core::{Document, MetaValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("no markdown files found in directory: {0}")]
    EmptyDataset(PathBuf),

    #[error("failed to parse dataset JSON: {0}")]
    Parse(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("PDF text extraction is not implemented: {0}")]
    PdfUnimplemented(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single dataset row: one source file or table row.
///
/// Every loader produces this schema regardless of source format. Missing
/// fields in a JSON source default to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetRecord {
    #[serde(default)]
    pub filename: String,
    /// Text content, one entry per page. Single-page sources wrap their
    /// content in a one-element list.
    #[serde(default)]
    pub text_by_page: Vec<String>,
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub url: String,
}

impl DatasetRecord {
    /// All pages concatenated with blank lines.
    pub fn full_text(&self) -> String {
        self.text_by_page.join("\n\n")
    }

    /// Convert into a [`Document`], carrying the source fields as metadata.
    pub fn to_document(&self) -> Document {
        let mut meta = HashMap::new();
        meta.insert(
            "filename".to_string(),
            MetaValue::Text(self.filename.clone()),
        );
        meta.insert(
            "filepath".to_string(),
            MetaValue::Text(self.filepath.clone()),
        );
        meta.insert("url".to_string(), MetaValue::Text(self.url.clone()));
        Document::with_meta(self.full_text(), meta)
    }
}
