use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::{ScoredPoint, Value};
use serde::{Deserialize, Serialize};

use crate::evidence::DocumentKind;

/// Named dense vector spaces stored per chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorSpace {
    /// Embedding of a hypothetical question the chunk answers.
    Question,
    /// Embedding of an ingestion-time summary of the chunk.
    Summary,
    /// Embedding of the raw chunk content.
    Content,
}

impl VectorSpace {
    /// Every space, in the canonical query and fusion order.
    pub const ALL: [VectorSpace; 3] = [Self::Question, Self::Summary, Self::Content];

    /// Name of the named vector in the Qdrant collection schema.
    pub fn vector_name(self) -> &'static str {
        match self {
            Self::Question => "hypothetical_question_embedding",
            Self::Summary => "summary_embedding",
            Self::Content => "content_embedding",
        }
    }

    /// Label recorded in [`crate::evidence::SignalOrigin`] for hits from
    /// this space.
    pub fn signal_label(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Summary => "summary",
            Self::Content => "content",
        }
    }
}

/// One raw hit from the search backend, before score normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendHit {
    pub content: String,
    pub entity_label: String,
    pub category: DocumentKind,
    pub source_ref: String,
    pub section_path: Vec<String>,
    pub chunk_id: Option<String>,
    pub question: Option<String>,
    pub summary: Option<String>,
    pub is_table_data: bool,
    /// Keyword hits: bounded relevance in `[0, 1]`. Vector hits: distance
    /// (lower is closer). The retrieval layer normalizes both.
    pub score: f32,
}

impl BackendHit {
    /// Decodes a scored point's payload. Points without `content` are
    /// dropped (nothing to cite); other missing fields fall back to empty
    /// defaults, and an unknown `category` label maps to
    /// [`DocumentKind::Terms`].
    pub fn from_scored_point(point: ScoredPoint) -> Option<Self> {
        let payload = point.payload;

        let content = payload
            .get("content")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())?
            .to_string();

        let entity_label = payload
            .get("entity_label")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let category = payload
            .get("category")
            .and_then(|v| v.as_str())
            .and_then(DocumentKind::from_label)
            .unwrap_or(DocumentKind::Terms);

        let source_ref = payload
            .get("source_ref")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let section_path = payload.get("section_path").map(string_list).unwrap_or_default();

        let chunk_id = payload
            .get("chunk_id")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let question = payload
            .get("question")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let summary = payload
            .get("summary")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        let is_table_data = payload
            .get("is_table_data")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        Some(BackendHit {
            content,
            entity_label,
            category,
            source_ref,
            section_path,
            chunk_id,
            question,
            summary,
            is_table_data,
            score: point.score,
        })
    }
}

fn string_list(value: &Value) -> Vec<String> {
    match &value.kind {
        Some(Kind::ListValue(list)) => list
            .values
            .iter()
            .filter_map(|v| v.as_str().map(|s| s.to_string()))
            .collect(),
        _ => Vec::new(),
    }
}

/// Derives a stable numeric point id from chunk content, so re-ingesting the
/// same chunk overwrites the same point.
pub fn content_point_id(content: &str) -> u64 {
    let hash = blake3::hash(content.as_bytes());
    let bytes: [u8; 8] = hash.as_bytes()[..8]
        .try_into()
        .expect("BLAKE3 digest is at least 8 bytes");
    u64::from_le_bytes(bytes)
}
