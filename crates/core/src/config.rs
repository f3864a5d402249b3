use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => v == "true" || v == "1",
        Err(_) => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub preprocess: PreprocessConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            preprocess: PreprocessConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  storage:    data_dir={}", self.storage.data_dir.display());
        tracing::info!(
            "  preprocess: split_by={}, split_length={}, split_overlap={}, progress={}",
            self.preprocess.split_by,
            self.preprocess.split_length,
            self.preprocess.split_overlap,
            self.preprocess.progress,
        );
    }
}

// ── Storage ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where chunk blobs and candidate CSVs are written.
    pub data_dir: PathBuf,
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(env_or("DOCPREP_DATA_DIR", "data")),
        }
    }
}

// ── Preprocessing ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Split mode name: "passage", "sentence" or "word".
    pub split_by: String,
    /// Units per chunk.
    pub split_length: usize,
    /// Units shared between adjacent chunks.
    pub split_overlap: usize,
    /// Emit per-document progress events during batch preprocessing.
    pub progress: bool,
}

impl PreprocessConfig {
    fn from_env() -> Self {
        Self {
            split_by: env_or("DOCPREP_SPLIT_BY", "word"),
            split_length: env_usize("DOCPREP_SPLIT_LENGTH", 200),
            split_overlap: env_usize("DOCPREP_SPLIT_OVERLAP", 0),
            progress: env_bool("DOCPREP_PROGRESS", true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        // Guard against a stray test environment.
        env::remove_var("DOCPREP_SPLIT_BY");
        env::remove_var("DOCPREP_SPLIT_LENGTH");
        let config = PreprocessConfig::from_env();
        assert_eq!(config.split_by, "word");
        assert_eq!(config.split_length, 200);
        assert_eq!(config.split_overlap, 0);
        assert!(config.progress);
    }
}
