use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::evidence::EvidenceCandidate;

/// Rebalances a fused, ranked candidate list so every compared entity that
/// produced results stays represented in the final `top_k`.
///
/// Each entity with results is guaranteed one slot; remaining capacity is
/// split evenly with earlier entities (in `entities` order) absorbing the
/// remainder. Capacity left by thin entities is refilled with the
/// highest-scoring unused candidates, deduplicated by stable key. The output
/// is re-sorted by score descending and truncated to `top_k`, so when more
/// entities have results than `top_k` can hold the tail entities lose out.
///
/// With fewer than two entities this is a plain truncation.
pub fn balance_comparison(
    ranked: Vec<EvidenceCandidate>,
    entities: &[String],
    top_k: usize,
) -> Vec<EvidenceCandidate> {
    if entities.len() <= 1 {
        return truncated(ranked, top_k);
    }

    let mut keep = vec![false; ranked.len()];
    {
        let mut by_entity: HashMap<&str, Vec<usize>> = HashMap::new();
        for (idx, candidate) in ranked.iter().enumerate() {
            by_entity
                .entry(candidate.entity_label.as_str())
                .or_default()
                .push(idx);
        }

        let represented: Vec<&str> = entities
            .iter()
            .map(String::as_str)
            .filter(|entity| by_entity.contains_key(entity))
            .collect();
        if represented.is_empty() {
            return truncated(ranked, top_k);
        }

        let guaranteed = represented.len();
        let remaining = top_k.saturating_sub(guaranteed);
        let extra = remaining / guaranteed;
        let leftover = remaining % guaranteed;

        let mut used_keys: HashSet<&str> = HashSet::new();
        let mut selected = 0usize;

        for (rank, entity) in represented.iter().enumerate() {
            let quota = 1 + extra + usize::from(rank < leftover);
            let mut taken = 0usize;
            for &idx in &by_entity[entity] {
                if taken == quota {
                    break;
                }
                if used_keys.insert(ranked[idx].stable_key()) {
                    keep[idx] = true;
                    taken += 1;
                    selected += 1;
                }
            }
        }

        // Refill capacity left by entities with fewer results than their
        // quota, best unused candidates first.
        for (idx, candidate) in ranked.iter().enumerate() {
            if selected == top_k {
                break;
            }
            if !keep[idx] && used_keys.insert(candidate.stable_key()) {
                keep[idx] = true;
                selected += 1;
            }
        }
    }

    let mut balanced: Vec<EvidenceCandidate> = ranked
        .into_iter()
        .zip(keep)
        .filter_map(|(candidate, kept)| kept.then_some(candidate))
        .collect();
    balanced.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });
    balanced.truncate(top_k);
    balanced
}

fn truncated(mut candidates: Vec<EvidenceCandidate>, top_k: usize) -> Vec<EvidenceCandidate> {
    candidates.truncate(top_k);
    candidates
}
