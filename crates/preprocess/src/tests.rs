//! Tests for splitting, cleaning, and chunk assembly.

use std::str::FromStr;

use docprep_core::{Document, MetaValue};

use crate::splitter::split_sentences;
use crate::{
    drop_empty_units, split_into_units, PreprocessError, Preprocessor, SplitConfig, SplitMode,
};

fn word_config(split_length: usize, split_overlap: usize) -> SplitConfig {
    SplitConfig {
        split_by: SplitMode::Word,
        split_length,
        split_overlap,
        progress: false,
    }
}

// ── Split modes ─────────────────────────────────────────────────────

#[test]
fn passage_join_reconstructs_exactly() {
    let text = "First passage.\n\nSecond passage.\n\n\n\nFourth after empty.";
    let (units, delim) = split_into_units(text, SplitMode::Passage);
    assert_eq!(delim, "\n\n");
    assert_eq!(units.join(delim), text);
}

#[test]
fn word_join_reconstructs_exactly() {
    // Consecutive spaces produce empty units, preserving exact spacing.
    let text = "alpha bravo  charlie delta";
    let (units, delim) = split_into_units(text, SplitMode::Word);
    assert_eq!(delim, " ");
    assert_eq!(units.join(delim), text);
}

#[test]
fn word_split_empty_text_round_trips() {
    let (units, delim) = split_into_units("", SplitMode::Word);
    assert_eq!(units.join(delim), "");
}

#[test]
fn sentence_mode_trims_units() {
    let text = "  First sentence. Second sentence. Third one.";
    let (units, delim) = split_into_units(text, SplitMode::Sentence);
    assert_eq!(delim, " ");
    assert_eq!(units.len(), 3);
    assert_eq!(units[0], "First sentence.");
    assert_eq!(units[1], "Second sentence.");
    assert_eq!(units[2], "Third one.");
}

#[test]
fn sentence_mode_nonempty_text_yields_at_least_one_unit() {
    for text in ["no terminal punctuation at all", "One. Two.", "?!", "x"] {
        let (units, _) = split_into_units(text, SplitMode::Sentence);
        assert!(!units.is_empty(), "no units for {text:?}");
    }
}

#[test]
fn sentence_boundary_requires_uppercase_or_newline() {
    // "e.g. lowercase" must not split after the abbreviation.
    let sents = split_sentences("This uses e.g. lowercase continuations. Next Sentence here.");
    assert_eq!(sents.len(), 2);
    assert!(sents[0].starts_with("This uses"));
    assert_eq!(sents[1], "Next Sentence here.");
}

#[test]
fn sentence_terminal_at_end_of_text() {
    let sents = split_sentences("Only one sentence here. ");
    assert_eq!(sents, vec!["Only one sentence here."]);
}

#[test]
fn unsupported_mode_fails_to_parse() {
    let err = SplitMode::from_str("paragraph").unwrap_err();
    assert!(matches!(err, PreprocessError::UnsupportedSplitMode(ref m) if m == "paragraph"));
}

#[test]
fn mode_parse_and_display_round_trip() {
    for name in ["passage", "sentence", "word"] {
        let mode = SplitMode::from_str(name).unwrap();
        assert_eq!(mode.to_string(), name);
    }
}

// ── Cleaner ─────────────────────────────────────────────────────────

#[test]
fn cleaner_replaces_unit_sequence() {
    let doc = Document::new("keep DROP keep DROP keep");
    let processor = Preprocessor::new(word_config(10, 0)).with_cleaner(
        |units: Vec<String>| -> Vec<String> {
            units.into_iter().filter(|u| u != "DROP").collect()
        },
    );
    let chunks = processor.process(&doc).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, "keep keep keep");
}

#[test]
fn drop_empty_units_filters_blanks() {
    let cleaned = drop_empty_units(vec!["a".into(), "".into(), "  ".into(), "b".into()]);
    assert_eq!(cleaned, vec!["a", "b"]);
}

#[test]
fn cleaner_emptying_all_units_yields_no_chunks() {
    let doc = Document::new("some words here");
    let processor = Preprocessor::new(word_config(10, 0))
        .with_cleaner(|_units: Vec<String>| -> Vec<String> { Vec::new() });
    let chunks = processor.process(&doc).unwrap();
    assert!(chunks.is_empty());
}

// ── Chunk assembly ──────────────────────────────────────────────────

#[test]
fn chunks_respect_split_length() {
    let text = (0..10).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let doc = Document::new(text);
    let chunks = Preprocessor::new(word_config(4, 0)).process(&doc).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].content, "w0 w1 w2 w3");
    assert_eq!(chunks[1].content, "w4 w5 w6 w7");
    assert_eq!(chunks[2].content, "w8 w9");
}

#[test]
fn overlap_repeats_trailing_units() {
    let text = "a b c d e f";
    let doc = Document::new(text);
    let chunks = Preprocessor::new(word_config(4, 2)).process(&doc).unwrap();
    assert_eq!(chunks[0].content, "a b c d");
    assert_eq!(chunks[1].content, "c d e f");
}

#[test]
fn overlap_does_not_emit_pure_tail_chunk() {
    // Final window ending exactly at the last unit stops the walk.
    let doc = Document::new("a b c d");
    let chunks = Preprocessor::new(word_config(4, 2)).process(&doc).unwrap();
    assert_eq!(chunks.len(), 1);
}

#[test]
fn chunk_meta_carries_split_and_source_ids() {
    let mut parent = Document::new("one two three four");
    parent
        .meta
        .insert("origin".into(), MetaValue::Text("corpus.md".into()));
    let chunks = Preprocessor::new(word_config(2, 0)).process(&parent).unwrap();
    assert_eq!(chunks.len(), 2);
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.meta["split_id"].as_int(), Some(i as i64));
        assert_eq!(chunk.meta["source_id"].as_str(), Some(parent.id.as_str()));
        assert_eq!(chunk.meta["origin"].as_str(), Some("corpus.md"));
    }
}

#[test]
fn chunk_ids_are_content_derived() {
    let doc = Document::new("same same");
    let chunks = Preprocessor::new(word_config(1, 0)).process(&doc).unwrap();
    assert_eq!(chunks.len(), 2);
    // Identical content, identical id; distinct split_id in meta.
    assert_eq!(chunks[0].id, chunks[1].id);
    assert_ne!(chunks[0].meta["split_id"], chunks[1].meta["split_id"]);
}

#[test]
fn passage_chunks_rejoin_with_blank_lines() {
    let doc = Document::new("P1 text.\n\nP2 text.\n\nP3 text.");
    let config = SplitConfig {
        split_by: SplitMode::Passage,
        split_length: 2,
        split_overlap: 0,
        progress: false,
    };
    let chunks = Preprocessor::new(config).process(&doc).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].content, "P1 text.\n\nP2 text.");
    assert_eq!(chunks[1].content, "P3 text.");
}

#[test]
fn whitespace_only_document_yields_no_chunks() {
    let doc = Document::new("   \n\n\t  ");
    let chunks = Preprocessor::new(word_config(5, 0)).process(&doc).unwrap();
    assert!(chunks.is_empty());
}

// ── Config validation ───────────────────────────────────────────────

#[test]
fn zero_split_length_is_rejected() {
    let doc = Document::new("text");
    let err = Preprocessor::new(word_config(0, 0)).process(&doc).unwrap_err();
    assert!(matches!(err, PreprocessError::InvalidSplitConfig(_)));
}

#[test]
fn overlap_not_smaller_than_length_is_rejected() {
    let doc = Document::new("text");
    let err = Preprocessor::new(word_config(3, 3)).process(&doc).unwrap_err();
    assert!(matches!(err, PreprocessError::InvalidSplitConfig(_)));
}

// ── Batch processing ────────────────────────────────────────────────

#[test]
fn batch_output_is_nested_per_document() {
    let docs = vec![
        Document::new("a b c d"),
        Document::new("e f"),
        Document::new("g h i j k l"),
    ];
    let nested = Preprocessor::new(word_config(2, 0)).process_batch(&docs).unwrap();
    assert_eq!(nested.len(), docs.len());
    assert_eq!(nested[0].len(), 2);
    assert_eq!(nested[1].len(), 1);
    assert_eq!(nested[2].len(), 3);
}

#[test]
fn batch_sublists_derive_only_from_their_document() {
    let docs = vec![Document::new("alpha bravo"), Document::new("charlie delta")];
    let nested = Preprocessor::new(word_config(1, 0)).process_batch(&docs).unwrap();
    for chunk in &nested[0] {
        assert_eq!(chunk.meta["source_id"].as_str(), Some(docs[0].id.as_str()));
        assert!(!chunk.content.contains("charlie"));
    }
    for chunk in &nested[1] {
        assert_eq!(chunk.meta["source_id"].as_str(), Some(docs[1].id.as_str()));
        assert!(!chunk.content.contains("alpha"));
    }
}

#[test]
fn batch_preserves_input_order() {
    let docs: Vec<Document> = (0..5).map(|i| Document::new(format!("doc{i}"))).collect();
    let nested = Preprocessor::new(word_config(5, 0)).process_batch(&docs).unwrap();
    for (i, sublist) in nested.iter().enumerate() {
        assert_eq!(sublist[0].content, format!("doc{i}"));
    }
}

#[test]
fn batch_fails_fast_on_invalid_config() {
    let docs = vec![Document::new("a"), Document::new("b")];
    let err = Preprocessor::new(word_config(2, 2)).process_batch(&docs).unwrap_err();
    assert!(matches!(err, PreprocessError::InvalidSplitConfig(_)));
}

#[test]
fn flatten_is_an_explicit_request() {
    let docs = vec![Document::new("a b c d"), Document::new("e f")];
    let processor = Preprocessor::new(word_config(2, 0));
    let nested = processor.process_batch(&docs).unwrap();
    let flat = processor.process_batch_flat(&docs).unwrap();
    assert_eq!(flat.len(), nested.iter().map(Vec::len).sum::<usize>());
    assert_eq!(flat[0].content, "a b");
    assert_eq!(flat[2].content, "e f");
}

#[test]
fn empty_batch_yields_empty_nested_list() {
    let nested = Preprocessor::new(word_config(2, 0)).process_batch(&[]).unwrap();
    assert!(nested.is_empty());
}
