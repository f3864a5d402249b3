use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::markdown::load_dataset_from_markdown;
use crate::{DatasetError, DatasetRecord};

/// Load dataset rows from a JSON file, or from a directory of markdown
/// files when `path` is a directory.
///
/// A directory path dispatches straight to the markdown loader and no JSON
/// parse is attempted. A file path is parsed as a JSON array of records;
/// on parse failure the same path is retried as a markdown directory, and
/// if that also fails the retry's error propagates.
pub fn load_dataset_from_json(path: impl AsRef<Path>) -> Result<Vec<DatasetRecord>, DatasetError> {
    let path = path.as_ref();

    if path.is_dir() {
        return load_dataset_from_markdown(path);
    }

    let raw = fs::read_to_string(path)?;
    match parse_records(&raw) {
        Ok(records) => {
            info!(rows = records.len(), path = %path.display(), "loaded JSON dataset");
            Ok(records)
        }
        Err(e) => {
            warn!(
                error = %e,
                path = %path.display(),
                "failed to parse dataset JSON, retrying as markdown directory"
            );
            load_dataset_from_markdown(path)
        }
    }
}

fn parse_records(raw: &str) -> Result<Vec<DatasetRecord>, DatasetError> {
    serde_json::from_str(raw).map_err(|e| DatasetError::Parse(e.to_string()))
}
