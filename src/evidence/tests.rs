use super::*;
use crate::constants::STABLE_KEY_LEN;

fn candidate_with_content(content: &str) -> EvidenceCandidate {
    EvidenceCandidate::new(content, "Car", DocumentKind::Terms, 0.5, SignalOrigin::keyword())
}

#[test]
fn test_stable_key_short_content_is_whole_content() {
    let candidate = candidate_with_content("windscreen excess is $100");
    assert_eq!(candidate.stable_key(), "windscreen excess is $100");
}

#[test]
fn test_stable_key_truncates_long_content() {
    let content = "x".repeat(STABLE_KEY_LEN + 40);
    let candidate = candidate_with_content(&content);
    assert_eq!(candidate.stable_key().len(), STABLE_KEY_LEN);
}

#[test]
fn test_stable_key_exact_boundary() {
    let content = "y".repeat(STABLE_KEY_LEN);
    let candidate = candidate_with_content(&content);
    assert_eq!(candidate.stable_key(), content);
}

#[test]
fn test_stable_key_respects_char_boundaries() {
    // Two-byte codepoints: the key must hold STABLE_KEY_LEN characters, not
    // bytes, and slicing must never panic mid-codepoint.
    let content = "é".repeat(STABLE_KEY_LEN + 20);
    let candidate = candidate_with_content(&content);
    assert_eq!(candidate.stable_key().chars().count(), STABLE_KEY_LEN);
}

#[test]
fn test_stable_key_shared_prefix_collides() {
    let prefix = "a".repeat(STABLE_KEY_LEN);
    let first = candidate_with_content(&format!("{prefix} tail one"));
    let second = candidate_with_content(&format!("{prefix} tail two"));
    assert_eq!(first.stable_key(), second.stable_key());
}

#[test]
fn test_signal_origin_absorb_appends_new_labels() {
    let mut origin = SignalOrigin::keyword();
    origin.absorb(&SignalOrigin::new("content"));
    assert_eq!(origin.as_str(), "keyword+content");
}

#[test]
fn test_signal_origin_absorb_skips_duplicates() {
    let mut origin = SignalOrigin::new("keyword+content");
    origin.absorb(&SignalOrigin::new("content"));
    origin.absorb(&SignalOrigin::keyword());
    assert_eq!(origin.as_str(), "keyword+content");
}

#[test]
fn test_signal_origin_contains_matches_whole_segments() {
    let origin = SignalOrigin::new("keyword+content");
    assert!(origin.contains("keyword"));
    assert!(origin.contains("content"));
    // "word" is a substring of "keyword" but not a recorded signal.
    assert!(!origin.contains("word"));
}

#[test]
fn test_document_kind_from_label_is_case_insensitive() {
    assert_eq!(DocumentKind::from_label("terms"), Some(DocumentKind::Terms));
    assert_eq!(DocumentKind::from_label("FAQ"), Some(DocumentKind::Faq));
    assert_eq!(DocumentKind::from_label("Benefits"), Some(DocumentKind::Benefits));
    assert_eq!(DocumentKind::from_label("unknown"), None);
}

#[test]
fn test_candidate_builder_setters() {
    let candidate = candidate_with_content("chunk")
        .source_ref("Car_Terms.md")
        .section_path(vec!["Coverage".into(), "Windscreen".into()])
        .raw_distance(0.4)
        .chunk_id("chunk-17")
        .table_data(true);

    assert_eq!(candidate.source_ref, "Car_Terms.md");
    assert_eq!(candidate.section_path, vec!["Coverage", "Windscreen"]);
    assert_eq!(candidate.raw_distance, Some(0.4));
    assert_eq!(candidate.chunk_id.as_deref(), Some("chunk-17"));
    assert!(candidate.is_table_data);
}
