use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use docprep_core::Document;

use crate::{ensure_parent_dir, resolve_write_path, PersistError};

/// Keyed chunk collection as persisted: chunk key → document.
///
/// Keys are unique within one file; no ordering survives a reload.
pub type ChunkMap = HashMap<String, Document>;

/// Serialize `chunks` to `path` as a single msgpack blob.
///
/// Parent directories are created as needed. Returns the path actually
/// written, which is a renamed sibling when the target existed and
/// `overwrite` was false.
pub fn save_chunks(
    chunks: &ChunkMap,
    path: impl AsRef<Path>,
    overwrite: bool,
) -> Result<PathBuf, PersistError> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let target = resolve_write_path(path, overwrite);

    let encoded =
        rmp_serde::to_vec(chunks).map_err(|e| PersistError::Serialize(e.to_string()))?;
    fs::write(&target, encoded)?;

    tracing::debug!(
        chunks = chunks.len(),
        path = %target.display(),
        "chunk map saved"
    );
    Ok(target)
}

/// Load a chunk map written by [`save_chunks`].
///
/// No validation beyond the format's own: corrupt or incompatible input
/// fails with [`PersistError::Deserialize`] here, not earlier.
pub fn load_chunks(path: impl AsRef<Path>) -> Result<ChunkMap, PersistError> {
    let data = fs::read(path)?;
    rmp_serde::from_slice(&data).map_err(|e| PersistError::Deserialize(e.to_string()))
}
