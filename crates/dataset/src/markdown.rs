use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{DatasetError, DatasetRecord};

/// Load every `*.md` file in `directory` (non-recursive) into dataset rows.
///
/// Each file's content becomes a single-page record; files are visited in
/// sorted filename order. Fails with [`DatasetError::DirectoryNotFound`] if
/// the directory is absent and [`DatasetError::EmptyDataset`] if no
/// markdown files match.
pub fn load_dataset_from_markdown(
    directory: impl AsRef<Path>,
) -> Result<Vec<DatasetRecord>, DatasetError> {
    let directory = directory.as_ref();
    if !directory.exists() {
        return Err(DatasetError::DirectoryNotFound(directory.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(directory)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().map(|ext| ext == "md").unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let content = fs::read_to_string(&path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path_str = path.display().to_string();
        records.push(DatasetRecord {
            filename,
            text_by_page: vec![content],
            filepath: path_str.clone(),
            url: path_str,
        });
    }

    if records.is_empty() {
        return Err(DatasetError::EmptyDataset(directory.to_path_buf()));
    }

    info!(
        rows = records.len(),
        directory = %directory.display(),
        "loaded markdown dataset"
    );
    Ok(records)
}
