use serde::{Deserialize, Serialize};

use super::citation::{Citation, CitationStyle};
use crate::confidence::{ConfidenceAssessment, ConfidenceTuning};
use crate::evidence::EvidenceCandidate;

/// Work order for answer synthesis: the user's question plus the fused
/// evidence retrieval produced for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub query: String,
    pub evidence: Vec<EvidenceCandidate>,
    pub citation_style: CitationStyle,
    /// Tuning for the confidence assessment of the generated answer.
    pub confidence: ConfidenceTuning,
}

impl AnswerRequest {
    pub fn new(query: impl Into<String>, evidence: Vec<EvidenceCandidate>) -> Self {
        Self {
            query: query.into(),
            evidence,
            citation_style: CitationStyle::default(),
            confidence: ConfidenceTuning::default(),
        }
    }

    pub fn citation_style(mut self, style: CitationStyle) -> Self {
        self.citation_style = style;
        self
    }

    pub fn confidence(mut self, tuning: ConfidenceTuning) -> Self {
        self.confidence = tuning;
        self
    }

    pub fn has_evidence(&self) -> bool {
        !self.evidence.is_empty()
    }
}

/// Synthesized answer with its provenance and confidence verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
    /// One citation per evidence chunk, in evidence order.
    pub citations: Vec<Citation>,
    pub assessment: ConfidenceAssessment,
    /// Evidence chunks that were available to the synthesizer.
    pub evidence_available: usize,
    /// Human-readable summary of how the answer was produced.
    pub reasoning: String,
}

impl AnswerResult {
    /// Renders the answer with an optional sources block and confidence
    /// line.
    pub fn format_response(&self, include_citations: bool, include_confidence: bool) -> String {
        let mut out = self.answer.clone();

        if include_citations && !self.citations.is_empty() {
            out.push_str("\n\n**Sources:**");
            for (idx, citation) in self.citations.iter().enumerate() {
                out.push('\n');
                out.push_str(&citation.full_reference(idx + 1));
            }
        }

        if include_confidence && self.assessment.score > 0.0 {
            out.push_str(&format!(
                "\n\n*Confidence: {:.1}%*",
                self.assessment.score * 100.0
            ));
        }

        out
    }
}
