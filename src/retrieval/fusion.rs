use std::cmp::Ordering;
use std::collections::HashMap;

use crate::evidence::EvidenceCandidate;

/// Additive weighted merge of retrieval signals, keyed by stable key.
///
/// Every absorbed occurrence contributes `relevance * weight` to its
/// candidate's fused score, so evidence surfaced by several signals ranks at
/// least as high as it would from any single signal alone. Candidate
/// metadata (entity, category, sections) is taken from the first occurrence;
/// signal origins accumulate.
///
/// Insertion order is preserved until [`FusionAccumulator::into_ranked`],
/// which sorts stably, so ties keep first-seen order regardless of how the
/// backend happened to order equal-scored hits.
#[derive(Debug, Default)]
pub struct FusionAccumulator {
    candidates: Vec<EvidenceCandidate>,
    index: HashMap<String, usize>,
}

impl FusionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Folds one signal's candidates in at `weight`.
    pub fn absorb(&mut self, signal: Vec<EvidenceCandidate>, weight: f32) {
        for mut candidate in signal {
            let key = candidate.stable_key().to_string();
            match self.index.get(&key) {
                Some(&slot) => {
                    let existing = &mut self.candidates[slot];
                    existing.relevance_score += candidate.relevance_score * weight;
                    existing.signal_origin.absorb(&candidate.signal_origin);
                    if existing.raw_distance.is_none() {
                        existing.raw_distance = candidate.raw_distance;
                    }
                }
                None => {
                    candidate.relevance_score *= weight;
                    let slot = self.candidates.len();
                    self.candidates.push(candidate);
                    self.index.insert(key, slot);
                }
            }
        }
    }

    /// All fused candidates, sorted by fused score descending. Truncation is
    /// left to the caller: comparison balancing needs the full ranked pool.
    pub fn into_ranked(self) -> Vec<EvidenceCandidate> {
        let mut ranked = self.candidates;
        ranked.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }
}
