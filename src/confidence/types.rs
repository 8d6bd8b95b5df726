use serde::{Deserialize, Serialize};

/// Verdict on one generated answer, derived from the fused evidence scores
/// and lexical analysis of the answer text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceAssessment {
    /// Confidence in `[0, 1]`. Exactly `0.0` is reserved for answers backed
    /// by no usable evidence; any scored answer sits at or above the
    /// configured floor.
    pub score: f32,
    /// Whether the evidence justifies treating the answer as trustworthy.
    pub sufficient: bool,
    /// Evidence entries whose entity or document-kind label appears in the
    /// answer outside a negative context.
    pub used_evidence_count: usize,
}

impl ConfidenceAssessment {
    /// The reserved zero assessment for answers with no usable evidence.
    pub fn no_evidence() -> Self {
        Self {
            score: 0.0,
            sufficient: false,
            used_evidence_count: 0,
        }
    }
}
