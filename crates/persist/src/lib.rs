//! Persistence for preprocessed chunk maps and candidate tables.
//!
//! Both forms share the same write discipline: parent directories are
//! created as needed, and an existing file is never silently overwritten.
//! Unless overwriting is requested, the new output is renamed to a
//! `<stem>_<random-suffix><extension>` sibling and a warning is emitted.

mod candidates;
mod chunks;

pub use candidates::{load_candidates_csv, save_candidates_csv, CandidateTable};
pub use chunks::{load_chunks, save_chunks, ChunkMap};

use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("deserialization error: {0}")]
    Deserialize(String),
}

const SUFFIX_LEN: usize = 8;
const SUFFIX_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase-alphanumeric id for collision-avoidance renames.
fn random_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARS[rng.gen_range(0..SUFFIX_CHARS.len())] as char)
        .collect()
}

/// Resolve the path a save actually writes to.
///
/// When the target exists and `overwrite` is false, the output is renamed
/// to `<stem>_<8-char-random-suffix><extension>` and a warning names both
/// paths. The existence check and the write are not atomic; single
/// writer at a time assumed.
fn resolve_write_path(path: &Path, overwrite: bool) -> PathBuf {
    if overwrite || !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let renamed = match path.extension() {
        Some(ext) => {
            path.with_file_name(format!("{stem}_{}.{}", random_id(), ext.to_string_lossy()))
        }
        None => path.with_file_name(format!("{stem}_{}", random_id())),
    };

    warn!(
        requested = %path.display(),
        writing = %renamed.display(),
        "file already exists, writing to adjusted path instead"
    );
    renamed
}

fn ensure_parent_dir(path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
