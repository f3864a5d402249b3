//! Chunk assembly and batch preprocessing.

use docprep_core::{content_id, Document, MetaValue};
use serde::{Deserialize, Serialize};

use crate::cleaner::UnitCleaner;
use crate::splitter::{split_into_units, SplitMode};
use crate::PreprocessError;

// ── Configuration ───────────────────────────────────────────────────────────

/// Configuration for the preprocessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// How text is divided into units.
    pub split_by: SplitMode,
    /// Units per chunk.
    pub split_length: usize,
    /// Units shared between adjacent chunks. Must be smaller than
    /// `split_length`.
    pub split_overlap: usize,
    /// Emit per-document progress events during batch processing.
    pub progress: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            split_by: SplitMode::Word,
            split_length: 200,
            split_overlap: 0,
            progress: true,
        }
    }
}

impl SplitConfig {
    fn validate(&self) -> Result<(), PreprocessError> {
        if self.split_length == 0 {
            return Err(PreprocessError::InvalidSplitConfig(
                "split_length must be at least 1".to_string(),
            ));
        }
        if self.split_overlap >= self.split_length {
            return Err(PreprocessError::InvalidSplitConfig(format!(
                "split_overlap ({}) must be smaller than split_length ({})",
                self.split_overlap, self.split_length
            )));
        }
        Ok(())
    }
}

// ── Preprocessor ────────────────────────────────────────────────────────────

/// Splits documents into chunk documents.
///
/// Each input document is divided into units, the unit sequence optionally
/// passes through the configured [`UnitCleaner`], and consecutive windows of
/// `split_length` units (stepping by `split_length - split_overlap`) are
/// joined back with the mode's delimiter to form chunk documents.
pub struct Preprocessor {
    config: SplitConfig,
    cleaner: Option<Box<dyn UnitCleaner>>,
}

impl Preprocessor {
    pub fn new(config: SplitConfig) -> Self {
        Self {
            config,
            cleaner: None,
        }
    }

    /// Attach a cleaning strategy applied to units before assembly.
    pub fn with_cleaner(mut self, cleaner: impl UnitCleaner + 'static) -> Self {
        self.cleaner = Some(Box::new(cleaner));
        self
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split a single document into chunk documents.
    ///
    /// Chunk metadata is the parent's metadata plus `split_id` (0-based
    /// chunk index) and `source_id` (the parent document's id). A document
    /// with whitespace-only content, or whose cleaner output is empty,
    /// yields an empty chunk list.
    pub fn process(&self, doc: &Document) -> Result<Vec<Document>, PreprocessError> {
        self.config.validate()?;

        if doc.content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let (units, delimiter) = split_into_units(&doc.content, self.config.split_by);
        let units = match &self.cleaner {
            Some(cleaner) => cleaner.clean(units),
            None => units,
        };
        if units.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.assemble_chunks(doc, &units, delimiter))
    }

    /// Apply [`process`](Self::process) to each document independently,
    /// returning one chunk list per input document in input order.
    ///
    /// Strictly sequential; the first failing document aborts the batch.
    pub fn process_batch(&self, docs: &[Document]) -> Result<Vec<Vec<Document>>, PreprocessError> {
        let total = docs.len();
        let mut nested = Vec::with_capacity(total);

        for (i, doc) in docs.iter().enumerate() {
            if self.config.progress {
                tracing::info!(doc = i + 1, total = total, "preprocessing documents");
            }
            nested.push(self.process(doc)?);
        }

        Ok(nested)
    }

    /// Process a batch and flatten the result into a single chunk list.
    /// Callers wanting document boundaries use
    /// [`process_batch`](Self::process_batch) instead.
    pub fn process_batch_flat(&self, docs: &[Document]) -> Result<Vec<Document>, PreprocessError> {
        Ok(self.process_batch(docs)?.into_iter().flatten().collect())
    }

    fn assemble_chunks(&self, parent: &Document, units: &[String], delimiter: &str) -> Vec<Document> {
        let step = self.config.split_length - self.config.split_overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < units.len() {
            let end = (start + self.config.split_length).min(units.len());
            let content = units[start..end].join(delimiter);

            let mut meta = parent.meta.clone();
            meta.insert(
                "split_id".to_string(),
                MetaValue::Integer(chunks.len() as i64),
            );
            meta.insert(
                "source_id".to_string(),
                MetaValue::Text(parent.id.clone()),
            );

            chunks.push(Document {
                id: content_id(&content),
                content,
                meta,
            });

            if end == units.len() {
                break;
            }
            start += step;
        }

        chunks
    }
}
