use serde::{Deserialize, Serialize};

use crate::confidence::{mentioned, negated_mention};
use crate::evidence::{DocumentKind, EvidenceCandidate};

const FOOTNOTE_SYMBOLS: [&str; 10] = ["¹", "²", "³", "⁴", "⁵", "⁶", "⁷", "⁸", "⁹", "¹⁰"];

/// How citation markers are rendered in prepared context and answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    /// `[1]`, `[2]`, `[3]`...
    #[default]
    Numbered,
    /// `(Source: Car terms - Section > Subsection)`
    Inline,
    /// `¹`, `²`, `³`... falling back to numbered past ten sources.
    Footnote,
}

/// Provenance record for one evidence chunk used in an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Stable identifier of the form `cite_{n}`, 1-based over the evidence
    /// list.
    pub id: String,
    pub entity_label: String,
    pub category: DocumentKind,
    pub source_ref: String,
    pub section_path: Vec<String>,
    pub relevance_score: f32,
}

impl Citation {
    /// Builds the 1-based citation list for an evidence set, in evidence
    /// order.
    pub fn from_evidence(evidence: &[EvidenceCandidate]) -> Vec<Citation> {
        evidence
            .iter()
            .enumerate()
            .map(|(idx, candidate)| Citation {
                id: format!("cite_{}", idx + 1),
                entity_label: candidate.entity_label.clone(),
                category: candidate.category,
                source_ref: candidate.source_ref.clone(),
                section_path: candidate.section_path.clone(),
                relevance_score: candidate.relevance_score,
            })
            .collect()
    }

    fn source_info(&self) -> String {
        let mut info = format!("{} {}", self.entity_label, self.category.label());
        if !self.section_path.is_empty() {
            info.push_str(" - ");
            info.push_str(&self.section_path.join(" > "));
        }
        info
    }

    /// In-text marker for this citation in the given style; `number` is
    /// 1-based.
    pub fn marker(&self, style: CitationStyle, number: usize) -> String {
        match style {
            CitationStyle::Numbered => format!("[{number}]"),
            CitationStyle::Inline => format!("(Source: {})", self.source_info()),
            CitationStyle::Footnote => number
                .checked_sub(1)
                .and_then(|idx| FOOTNOTE_SYMBOLS.get(idx))
                .map(|symbol| (*symbol).to_string())
                .unwrap_or_else(|| format!("[{number}]")),
        }
    }

    /// Reference line for the sources block under a formatted answer.
    pub fn full_reference(&self, number: usize) -> String {
        format!(
            "[{number}] {} (Relevance: {:.2})",
            self.source_info(),
            self.relevance_score
        )
    }

    /// Whether the answer visibly uses this citation: its numbered marker,
    /// entity label, or document-kind label appears outside a negative
    /// context.
    pub fn used_in_answer(&self, answer: &str) -> bool {
        let answer_lower = answer.to_lowercase();

        let number_marker = self
            .id
            .split('_')
            .nth(1)
            .filter(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
            .map(|number| format!("[{number}]"));
        if let Some(marker) = number_marker {
            if answer_lower.contains(&marker) && !negated_mention(&marker, &answer_lower) {
                return true;
            }
        }

        let entity = self.entity_label.to_lowercase();
        if mentioned(&entity, &answer_lower) && !negated_mention(&entity, &answer_lower) {
            return true;
        }

        let kind = self.category.label();
        mentioned(kind, &answer_lower) && !negated_mention(kind, &answer_lower)
    }
}
