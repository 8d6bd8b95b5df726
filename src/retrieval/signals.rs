use futures_util::future::join_all;
use tracing::warn;

use crate::embedding::Embedder;
use crate::evidence::{EvidenceCandidate, SignalOrigin};
use crate::query::EntityFilter;
use crate::vectordb::{BackendHit, SearchBackend, VectorSpace};

/// Maps a backend distance to relevance in `[0, 1]`.
///
/// Distances are capped at `max_distance` before normalizing, so anything at
/// or beyond the cap scores zero; closer is higher. `max_distance` must be
/// positive (enforced by [`super::SearchTuning::validate`]).
pub fn distance_to_relevance(distance: f32, max_distance: f32) -> f32 {
    (1.0 - distance.min(max_distance) / max_distance).clamp(0.0, 1.0)
}

/// Collects per-signal candidate lists, degrading each failed signal to an
/// empty list.
pub(crate) struct SignalRetriever<'a, B, E> {
    backend: &'a B,
    embedder: &'a E,
    max_distance: f32,
}

impl<'a, B: SearchBackend, E: Embedder> SignalRetriever<'a, B, E> {
    pub(crate) fn new(backend: &'a B, embedder: &'a E, max_distance: f32) -> Self {
        Self {
            backend,
            embedder,
            max_distance,
        }
    }

    /// Keyword signal. Scores arrive bounded from the backend and are
    /// clamped to `[0, 1]` as a safety net.
    pub(crate) async fn keyword(
        &self,
        query: &str,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Vec<EvidenceCandidate> {
        match self.backend.keyword_search(query, filter, limit).await {
            Ok(hits) => hits.into_iter().map(keyword_candidate).collect(),
            Err(error) => {
                warn!(%error, "keyword signal failed, degrading to empty");
                Vec::new()
            }
        }
    }

    /// Vector signals for `spaces`, embedding the query once and querying
    /// the spaces concurrently. The returned lists line up with `spaces`
    /// positionally, independent of completion order. An embedding failure
    /// degrades every space to empty.
    pub(crate) async fn vector_spaces(
        &self,
        query: &str,
        spaces: &[VectorSpace],
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Vec<Vec<EvidenceCandidate>> {
        let vector = match self.embedder.embed(query).await {
            Ok(vector) => vector,
            Err(error) => {
                warn!(%error, "query embedding failed, degrading vector signals to empty");
                return vec![Vec::new(); spaces.len()];
            }
        };

        let searches = spaces
            .iter()
            .map(|&space| self.vector_space(&vector, space, filter, limit));
        join_all(searches).await
    }

    async fn vector_space(
        &self,
        vector: &[f32],
        space: VectorSpace,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Vec<EvidenceCandidate> {
        match self.backend.vector_search(vector, space, filter, limit).await {
            Ok(hits) => hits
                .into_iter()
                .map(|hit| vector_candidate(hit, space, self.max_distance))
                .collect(),
            Err(error) => {
                warn!(
                    space = space.signal_label(),
                    %error,
                    "vector signal failed, degrading to empty"
                );
                Vec::new()
            }
        }
    }
}

fn keyword_candidate(hit: BackendHit) -> EvidenceCandidate {
    let relevance = hit.score.clamp(0.0, 1.0);
    candidate_from_hit(hit, relevance, SignalOrigin::keyword(), None)
}

fn vector_candidate(hit: BackendHit, space: VectorSpace, max_distance: f32) -> EvidenceCandidate {
    let distance = hit.score;
    let relevance = distance_to_relevance(distance, max_distance);
    candidate_from_hit(
        hit,
        relevance,
        SignalOrigin::new(space.signal_label()),
        Some(distance),
    )
}

fn candidate_from_hit(
    hit: BackendHit,
    relevance_score: f32,
    signal_origin: SignalOrigin,
    raw_distance: Option<f32>,
) -> EvidenceCandidate {
    EvidenceCandidate {
        content: hit.content,
        entity_label: hit.entity_label,
        category: hit.category,
        source_ref: hit.source_ref,
        section_path: hit.section_path,
        relevance_score,
        signal_origin,
        raw_distance,
        chunk_id: hit.chunk_id,
        question: hit.question,
        summary: hit.summary,
        is_table_data: hit.is_table_data,
    }
}
