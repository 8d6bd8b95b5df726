use tracing::debug;

use super::config::ConfidenceTuning;
use super::lexical::{
    UncertaintyTier, count_specificity, detect_uncertainty, has_strong_uncertainty, mentioned,
    negated_mention, term_overlap_ratio, word_count,
};
use super::types::ConfidenceAssessment;
use crate::evidence::EvidenceCandidate;

/// Query phrasings answerable with a short factual statement.
const FACTUAL_QUERY_CUES: [&str; 4] = ["what", "how much", "when", "where"];

/// Query phrasings that demand a longer comparative answer.
const COMPARISON_QUERY_CUES: [&str; 3] = ["compare", "difference", "versus"];

/// Scores a generated answer against the evidence it was produced from.
///
/// Base confidence is the mean of the valid `[0, 1]` relevance scores,
/// multiplied by either an uncertainty penalty or a specificity boost
/// (uncertainty wins on conflict) and by the answer-length factor, then
/// clamped to `[min_confidence_threshold, 1.0]`. With no usable evidence the
/// reserved zero assessment comes back instead; scoring never fails.
///
/// The sufficiency verdict requires all four gates: no strong hedging, mean
/// relevance at or above the query-length gate, answer length at or above
/// the query-type floor, and enough query terms covered by the answer.
pub fn score_confidence(
    evidence: &[EvidenceCandidate],
    answer: &str,
    query: &str,
    tuning: &ConfidenceTuning,
) -> ConfidenceAssessment {
    let valid_scores = valid_relevance_scores(evidence);
    if valid_scores.is_empty() {
        return ConfidenceAssessment::no_evidence();
    }
    let mean_relevance = valid_scores.iter().sum::<f32>() / valid_scores.len() as f32;

    if answer.trim().is_empty() {
        // Evidence existed but the answer carries nothing to analyse; the
        // floor keeps this distinguishable from the reserved 0.0.
        return ConfidenceAssessment {
            score: tuning.min_confidence_threshold.clamp(0.0, 1.0),
            sufficient: false,
            used_evidence_count: 0,
        };
    }

    let answer_lower = answer.to_lowercase();
    let query_lower = query.to_lowercase();
    let answer_words = word_count(answer);

    let adjustment = match detect_uncertainty(&answer_lower) {
        Some(UncertaintyTier::Strong) => tuning.strong_uncertainty_penalty,
        Some(UncertaintyTier::Moderate) => tuning.moderate_uncertainty_penalty,
        Some(UncertaintyTier::Weak) => tuning.weak_uncertainty_penalty,
        None => specificity_boost(&answer_lower, tuning),
    };

    let score = (mean_relevance * adjustment * tuning.length_factor(answer_words))
        .max(tuning.min_confidence_threshold)
        .min(1.0);

    let sufficient = !has_strong_uncertainty(&answer_lower)
        && mean_relevance >= tuning.relevance_gate(word_count(query))
        && answer_words >= answer_word_floor(&query_lower, tuning)
        && term_overlap_ratio(&query_lower, &answer_lower) >= tuning.term_overlap_threshold;

    let used_evidence_count = count_used_evidence(evidence, &answer_lower);

    debug!(
        score,
        sufficient, used_evidence_count, "scored answer confidence"
    );

    ConfidenceAssessment {
        score,
        sufficient,
        used_evidence_count,
    }
}

/// Relevance scores usable for averaging; fused scores above 1.0 are
/// ranking-only values and are discarded here, as are non-finite ones.
pub(crate) fn valid_relevance_scores(evidence: &[EvidenceCandidate]) -> Vec<f32> {
    evidence
        .iter()
        .map(|candidate| candidate.relevance_score)
        .filter(|score| score.is_finite() && (0.0..=1.0).contains(score))
        .collect()
}

fn specificity_boost(answer_lower: &str, tuning: &ConfidenceTuning) -> f32 {
    let count = count_specificity(answer_lower);
    if count == 0 {
        return 1.0;
    }
    (1.0 + count as f32 * tuning.specificity_boost_per_item).min(tuning.max_specificity_boost)
}

/// Minimum answer length for the query's phrasing; factual cues take
/// precedence over comparison cues.
fn answer_word_floor(query_lower: &str, tuning: &ConfidenceTuning) -> usize {
    if FACTUAL_QUERY_CUES
        .iter()
        .any(|cue| query_lower.contains(cue))
    {
        tuning.min_factual_answer_words
    } else if COMPARISON_QUERY_CUES
        .iter()
        .any(|cue| query_lower.contains(cue))
    {
        tuning.min_comparison_answer_words
    } else {
        tuning.min_default_answer_words
    }
}

/// Evidence entries the answer visibly drew on: entity or document-kind
/// label present under a word-boundary match and outside negative contexts.
fn count_used_evidence(evidence: &[EvidenceCandidate], answer_lower: &str) -> usize {
    evidence
        .iter()
        .filter(|candidate| {
            let entity = candidate.entity_label.to_lowercase();
            let kind = candidate.category.label();
            (mentioned(&entity, answer_lower) && !negated_mention(&entity, answer_lower))
                || (mentioned(kind, answer_lower) && !negated_mention(kind, answer_lower))
        })
        .count()
}
