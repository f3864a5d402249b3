//! Unit splitting: dividing raw text into passages, sentences, or words.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PreprocessError;

/// How a document's text is divided into units before chunk assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Blank-line separated blocks.
    Passage,
    /// Detected sentences, surrounding whitespace trimmed.
    Sentence,
    /// Single-space separated words.
    Word,
}

impl SplitMode {
    /// The delimiter that reassembles units produced under this mode.
    pub fn delimiter(self) -> &'static str {
        match self {
            SplitMode::Passage => "\n\n",
            SplitMode::Sentence => " ",
            SplitMode::Word => " ",
        }
    }
}

impl FromStr for SplitMode {
    type Err = PreprocessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passage" => Ok(SplitMode::Passage),
            "sentence" => Ok(SplitMode::Sentence),
            "word" => Ok(SplitMode::Word),
            other => Err(PreprocessError::UnsupportedSplitMode(other.to_string())),
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitMode::Passage => write!(f, "passage"),
            SplitMode::Sentence => write!(f, "sentence"),
            SplitMode::Word => write!(f, "word"),
        }
    }
}

/// Split `text` into units for the given mode.
///
/// Returns the ordered unit sequence and the delimiter that reassembles it.
/// Passage and word output joined with the delimiter reconstructs `text`
/// exactly; sentence output reconstructs it approximately (sentences are
/// trimmed and rejoined with single spaces).
pub fn split_into_units(text: &str, mode: SplitMode) -> (Vec<String>, &'static str) {
    let units = match mode {
        SplitMode::Passage => text.split("\n\n").map(str::to_string).collect(),
        SplitMode::Sentence => split_sentences(text),
        SplitMode::Word => text.split(' ').map(str::to_string).collect(),
    };
    (units, mode.delimiter())
}

/// Detect sentence boundaries: terminal punctuation (`.`, `!`, `?`)
/// followed by a space and an uppercase letter or newline. Returns trimmed,
/// non-empty sentences; text after the last boundary is the final sentence.
pub(crate) fn split_sentences(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') && bytes.get(i + 1) == Some(&b' ') {
            // End-of-string after the space counts as a newline.
            let next = bytes.get(i + 2).copied().unwrap_or(b'\n');
            if next.is_ascii_uppercase() || next == b'\n' {
                push_trimmed(&mut sentences, &text[start..=i]);
                start = i + 2;
                i = start;
                continue;
            }
        }
        i += 1;
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
