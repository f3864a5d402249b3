//! Document preprocessing: unit splitting, unit cleaning, and chunk assembly.
//!
//! Text is split into ordered units (passages, sentences, or words), the
//! unit sequence optionally passes through an injected [`UnitCleaner`], and
//! units are windowed into chunk documents of a configured length/overlap.
//! Batch processing keeps one chunk list per input document; results are
//! never flattened unless the caller asks for it.

mod cleaner;
mod processor;
mod splitter;

pub use cleaner::{drop_empty_units, UnitCleaner};
pub use processor::{Preprocessor, SplitConfig};
pub use splitter::{split_into_units, SplitMode};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("unsupported split mode {0:?}: expected \"passage\", \"sentence\" or \"word\"")]
    UnsupportedSplitMode(String),

    #[error("invalid split config: {0}")]
    InvalidSplitConfig(String),
}

#[cfg(test)]
mod tests;
