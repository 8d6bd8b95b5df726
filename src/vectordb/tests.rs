use std::collections::HashMap;

use qdrant_client::qdrant::{ListValue, ScoredPoint, Value};

use super::client::bounded_keyword_score;
use super::*;
use crate::evidence::DocumentKind;
use crate::query::EntityFilter;

fn payload_point(entries: Vec<(&str, Value)>, score: f32) -> ScoredPoint {
    let payload: HashMap<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    ScoredPoint {
        payload,
        score,
        ..Default::default()
    }
}

fn list_value(items: &[&str]) -> Value {
    Value {
        kind: Some(qdrant_client::qdrant::value::Kind::ListValue(ListValue {
            values: items.iter().map(|&s| Value::from(s)).collect(),
        })),
    }
}

#[test]
fn test_backend_hit_decodes_full_payload() {
    let point = payload_point(
        vec![
            ("content", Value::from("windscreen excess is $100")),
            ("entity_label", Value::from("Car")),
            ("category", Value::from("faq")),
            ("source_ref", Value::from("Car_FAQs.txt")),
            ("section_path", list_value(&["Coverage", "Windscreen"])),
            ("chunk_id", Value::from("chunk-3")),
            ("question", Value::from("What is the windscreen excess?")),
            ("summary", Value::from("Windscreen excess amount.")),
            ("is_table_data", Value::from(true)),
        ],
        0.82,
    );

    let hit = BackendHit::from_scored_point(point).unwrap();
    assert_eq!(hit.content, "windscreen excess is $100");
    assert_eq!(hit.entity_label, "Car");
    assert_eq!(hit.category, DocumentKind::Faq);
    assert_eq!(hit.source_ref, "Car_FAQs.txt");
    assert_eq!(hit.section_path, vec!["Coverage", "Windscreen"]);
    assert_eq!(hit.chunk_id.as_deref(), Some("chunk-3"));
    assert!(hit.is_table_data);
    assert!((hit.score - 0.82).abs() < f32::EPSILON);
}

#[test]
fn test_backend_hit_requires_content() {
    let missing = payload_point(vec![("entity_label", Value::from("Car"))], 0.5);
    assert!(BackendHit::from_scored_point(missing).is_none());

    let empty = payload_point(vec![("content", Value::from(""))], 0.5);
    assert!(BackendHit::from_scored_point(empty).is_none());
}

#[test]
fn test_backend_hit_defaults_for_sparse_payload() {
    let point = payload_point(
        vec![
            ("content", Value::from("some chunk")),
            ("category", Value::from("mystery")),
        ],
        0.4,
    );

    let hit = BackendHit::from_scored_point(point).unwrap();
    assert_eq!(hit.entity_label, "");
    assert_eq!(hit.category, DocumentKind::Terms);
    assert_eq!(hit.source_ref, "");
    assert!(hit.section_path.is_empty());
    assert_eq!(hit.chunk_id, None);
    assert!(!hit.is_table_data);
}

#[test]
fn test_vector_space_canonical_order() {
    assert_eq!(
        VectorSpace::ALL,
        [
            VectorSpace::Question,
            VectorSpace::Summary,
            VectorSpace::Content
        ]
    );
    assert_eq!(
        VectorSpace::Question.vector_name(),
        "hypothetical_question_embedding"
    );
    assert_eq!(VectorSpace::Summary.vector_name(), "summary_embedding");
    assert_eq!(VectorSpace::Content.vector_name(), "content_embedding");
}

#[test]
fn test_content_point_id_is_stable() {
    let a = content_point_id("identical chunk text");
    let b = content_point_id("identical chunk text");
    let c = content_point_id("different chunk text");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_bounded_keyword_score_stays_in_unit_interval() {
    assert_eq!(bounded_keyword_score(0.0), 0.0);
    assert_eq!(bounded_keyword_score(-3.0), 0.0);

    let mid = bounded_keyword_score(1.0);
    assert!((mid - 0.5).abs() < f32::EPSILON);

    let large = bounded_keyword_score(100.0);
    assert!(large > 0.99 && large < 1.0);

    // Monotonic: a higher raw score never ranks lower after bounding.
    assert!(bounded_keyword_score(5.0) > bounded_keyword_score(2.0));
}

fn seeded_backend() -> MockSearchBackend {
    let backend = MockSearchBackend::new();
    backend.seed_all([
        SeedChunk::new("car windscreen excess", "Car", DocumentKind::Terms)
            .keyword_score(0.8)
            .distance(VectorSpace::Content, 0.2),
        SeedChunk::new("home fire cover", "Home", DocumentKind::Terms)
            .keyword_score(0.5)
            .distance(VectorSpace::Content, 0.6),
        SeedChunk::new("maid hospitalisation benefit", "Maid", DocumentKind::Benefits)
            .distance(VectorSpace::Content, 0.4)
            .distance(VectorSpace::Summary, 0.1),
    ]);
    backend
}

#[tokio::test]
async fn test_mock_keyword_search_ranks_descending() {
    let backend = seeded_backend();
    let hits = backend.keyword_search("anything", None, 10).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].entity_label, "Car");
    assert_eq!(hits[1].entity_label, "Home");
}

#[tokio::test]
async fn test_mock_vector_search_ranks_by_distance_ascending() {
    let backend = seeded_backend();
    let hits = backend
        .vector_search(&[0.0; 4], VectorSpace::Content, None, 10)
        .await
        .unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].entity_label, "Car");
    assert_eq!(hits[1].entity_label, "Maid");
    assert_eq!(hits[2].entity_label, "Home");
}

#[tokio::test]
async fn test_mock_search_respects_entity_filter() {
    let backend = seeded_backend();
    let filter = EntityFilter::from_labels(&["Maid".to_string()]);
    let hits = backend
        .vector_search(&[0.0; 4], VectorSpace::Content, filter.as_ref(), 10)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entity_label, "Maid");

    let keyword_hits = backend
        .keyword_search("anything", filter.as_ref(), 10)
        .await
        .unwrap();
    assert!(keyword_hits.is_empty());
}

#[tokio::test]
async fn test_mock_search_respects_limit() {
    let backend = seeded_backend();
    let hits = backend
        .vector_search(&[0.0; 4], VectorSpace::Content, None, 2)
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_mock_absent_space_returns_no_hits() {
    let backend = seeded_backend();
    let hits = backend
        .vector_search(&[0.0; 4], VectorSpace::Question, None, 10)
        .await
        .unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_mock_failure_switches() {
    let backend = seeded_backend();
    backend.fail_keyword();
    backend.fail_space(VectorSpace::Content);

    let keyword = backend.keyword_search("anything", None, 10).await;
    assert!(matches!(
        keyword,
        Err(SearchBackendError::SearchFailed { .. })
    ));

    let content = backend
        .vector_search(&[0.0; 4], VectorSpace::Content, None, 10)
        .await;
    assert!(matches!(
        content,
        Err(SearchBackendError::SearchFailed { .. })
    ));

    // Other spaces keep working.
    let summary = backend
        .vector_search(&[0.0; 4], VectorSpace::Summary, None, 10)
        .await
        .unwrap();
    assert_eq!(summary.len(), 1);
}

#[tokio::test]
async fn test_mock_seeded_chunks_expose_stable_chunk_ids() {
    let backend = seeded_backend();
    let first = backend
        .vector_search(&[0.0; 4], VectorSpace::Content, None, 1)
        .await
        .unwrap();
    let second = backend
        .vector_search(&[0.0; 4], VectorSpace::Content, None, 1)
        .await
        .unwrap();
    assert_eq!(first[0].chunk_id, second[0].chunk_id);
    assert!(first[0].chunk_id.is_some());
}
