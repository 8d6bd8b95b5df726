use serde::{Deserialize, Serialize};

use crate::constants::STABLE_KEY_LEN;

/// Document category a chunk was ingested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Policy terms and conditions.
    Terms,
    /// Frequently asked questions.
    Faq,
    /// Benefit tables.
    Benefits,
}

impl DocumentKind {
    /// Parses a payload label, case-insensitively. Unknown labels map to
    /// `None`; callers pick their own fallback.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "terms" => Some(Self::Terms),
            "faq" => Some(Self::Faq),
            "benefits" => Some(Self::Benefits),
            _ => None,
        }
    }

    /// Lowercase label used in payloads and in answer text matching.
    pub fn label(self) -> &'static str {
        match self {
            Self::Terms => "terms",
            Self::Faq => "faq",
            Self::Benefits => "benefits",
        }
    }
}

/// Which retrieval signals produced a candidate.
///
/// Starts as a single signal label (`"keyword"`, `"question"`, `"summary"`,
/// `"content"`) and accumulates further labels as fusion merges duplicate
/// hits, e.g. `"keyword+content"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalOrigin(String);

impl SignalOrigin {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn keyword() -> Self {
        Self::new("keyword")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `label` is one of the accumulated signal labels (exact
    /// segment match, not substring).
    pub fn contains(&self, label: &str) -> bool {
        self.0.split('+').any(|segment| segment == label)
    }

    /// Merges the labels of `other` into this origin, skipping labels
    /// already present. Label order records first arrival.
    pub fn absorb(&mut self, other: &SignalOrigin) {
        for segment in other.0.split('+') {
            if !self.contains(segment) {
                self.0.push('+');
                self.0.push_str(segment);
            }
        }
    }
}

impl std::fmt::Display for SignalOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One retrieved document fragment with provenance and scoring state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceCandidate {
    /// Chunk text handed to answer synthesis.
    pub content: String,
    /// Product/entity the chunk belongs to, e.g. `"Car"` or `"Maid"`.
    pub entity_label: String,
    /// Source document category.
    pub category: DocumentKind,
    /// Identifier of the source document.
    pub source_ref: String,
    /// Section heading hierarchy within the source document.
    pub section_path: Vec<String>,
    /// Per-signal: normalized relevance in `[0, 1]`. Post-fusion: weighted
    /// sum, meaningful for ranking only.
    pub relevance_score: f32,
    /// Signals that produced this candidate.
    pub signal_origin: SignalOrigin,
    /// Raw backend distance before normalization, kept for diagnostics.
    /// `None` for keyword hits.
    pub raw_distance: Option<f32>,
    /// Stable chunk identifier assigned at ingestion, if known.
    pub chunk_id: Option<String>,
    /// Hypothetical question generated for the chunk at ingestion, if any.
    pub question: Option<String>,
    /// Ingestion-time summary of the chunk, if any.
    pub summary: Option<String>,
    /// True when the chunk was extracted from a benefits table.
    pub is_table_data: bool,
}

impl EvidenceCandidate {
    pub fn new(
        content: impl Into<String>,
        entity_label: impl Into<String>,
        category: DocumentKind,
        relevance_score: f32,
        signal_origin: SignalOrigin,
    ) -> Self {
        Self {
            content: content.into(),
            entity_label: entity_label.into(),
            category,
            source_ref: String::new(),
            section_path: Vec::new(),
            relevance_score,
            signal_origin,
            raw_distance: None,
            chunk_id: None,
            question: None,
            summary: None,
            is_table_data: false,
        }
    }

    pub fn source_ref(mut self, source_ref: impl Into<String>) -> Self {
        self.source_ref = source_ref.into();
        self
    }

    pub fn section_path(mut self, section_path: Vec<String>) -> Self {
        self.section_path = section_path;
        self
    }

    pub fn raw_distance(mut self, distance: f32) -> Self {
        self.raw_distance = Some(distance);
        self
    }

    pub fn chunk_id(mut self, chunk_id: impl Into<String>) -> Self {
        self.chunk_id = Some(chunk_id.into());
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn table_data(mut self, is_table_data: bool) -> Self {
        self.is_table_data = is_table_data;
        self
    }

    /// Deduplication identity: the first [`STABLE_KEY_LEN`] characters of the
    /// content (the whole content when shorter). Character-based so multibyte
    /// text never splits mid-codepoint.
    pub fn stable_key(&self) -> &str {
        match self.content.char_indices().nth(STABLE_KEY_LEN) {
            Some((byte_idx, _)) => &self.content[..byte_idx],
            None => &self.content,
        }
    }
}
