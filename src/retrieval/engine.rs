use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::balance::balance_comparison;
use super::config::SearchTuning;
use super::error::{RetrievalError, RetrievalResult};
use super::fusion::FusionAccumulator;
use super::signals::SignalRetriever;
use crate::constants::MAX_SEARCH_LIMIT;
use crate::embedding::Embedder;
use crate::evidence::EvidenceCandidate;
use crate::query::{EntityFilter, QueryIntent, SearchRequest, SearchStrategy, SynonymTable};
use crate::vectordb::{SearchBackend, VectorSpace};

/// Stateless retrieval pipeline over a search backend and an embedder.
///
/// Holds no per-request state; a single engine serves concurrent requests.
pub struct RetrievalEngine<B, E> {
    backend: B,
    embedder: E,
    synonyms: SynonymTable,
    tuning: SearchTuning,
}

impl<B: SearchBackend, E: Embedder> RetrievalEngine<B, E> {
    /// Creates an engine after validating `tuning`. Query enhancement uses
    /// the built-in insurance vocabulary unless overridden with
    /// [`RetrievalEngine::with_synonyms`].
    pub fn new(backend: B, embedder: E, tuning: SearchTuning) -> RetrievalResult<Self> {
        tuning.validate()?;
        Ok(Self {
            backend,
            embedder,
            synonyms: SynonymTable::insurance_defaults(),
            tuning,
        })
    }

    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn tuning(&self) -> &SearchTuning {
        &self.tuning
    }

    /// Runs the full pipeline for one request: enhance the query, collect
    /// the strategy's signals, fuse, balance across entities for comparison
    /// intent, then drop candidates below the relevance floor.
    ///
    /// Backend and embedding failures degrade the affected signals to empty
    /// lists; the call itself only fails on an invalid `top_k`.
    #[instrument(
        skip(self, request),
        fields(
            retrieval_id = %Uuid::new_v4(),
            intent = ?request.intent,
            strategy = ?request.strategy,
            top_k = request.top_k,
        )
    )]
    pub async fn retrieve(
        &self,
        request: &SearchRequest,
    ) -> RetrievalResult<Vec<EvidenceCandidate>> {
        if request.top_k == 0 {
            return Err(RetrievalError::InvalidTopK {
                top_k: request.top_k,
            });
        }
        let top_k = if request.top_k > MAX_SEARCH_LIMIT {
            debug!(
                requested = request.top_k,
                clamped = MAX_SEARCH_LIMIT,
                "clamping top_k"
            );
            MAX_SEARCH_LIMIT
        } else {
            request.top_k
        };

        let enhanced = self.synonyms.enhance(&request.query, &request.entities);
        debug!(enhanced = %enhanced, "enhanced query");

        let filter = EntityFilter::from_labels(&request.entities);
        let comparison = request.intent == QueryIntent::Comparison && request.entities.len() >= 2;

        // Comparison queries search deeper per signal so balancing has a
        // pool to pick from; truncation to top_k happens after balancing.
        let signal_limit = if comparison {
            (top_k * request.entities.len()) as u64
        } else {
            top_k as u64
        };

        let signals = SignalRetriever::new(&self.backend, &self.embedder, self.tuning.max_distance);
        let fused = match request.strategy {
            SearchStrategy::Hybrid => {
                let (keyword, mut vector) = tokio::join!(
                    signals.keyword(&enhanced, filter.as_ref(), signal_limit),
                    signals.vector_spaces(
                        &enhanced,
                        &[VectorSpace::Content],
                        filter.as_ref(),
                        signal_limit
                    ),
                );
                let content = vector.pop().unwrap_or_default();
                let mut fusion = FusionAccumulator::new();
                fusion.absorb(keyword, 1.0 - self.tuning.hybrid_alpha);
                fusion.absorb(content, self.tuning.hybrid_alpha);
                fusion.into_ranked()
            }
            SearchStrategy::MultiVector => {
                let per_space = signals
                    .vector_spaces(&enhanced, &VectorSpace::ALL, filter.as_ref(), signal_limit)
                    .await;
                let mut fusion = FusionAccumulator::new();
                for (signal, space) in per_space.into_iter().zip(VectorSpace::ALL) {
                    fusion.absorb(signal, self.tuning.space_weight(space));
                }
                fusion.into_ranked()
            }
            SearchStrategy::SingleSpace(space) => {
                let mut per_space = signals
                    .vector_spaces(&enhanced, &[space], filter.as_ref(), signal_limit)
                    .await;
                let mut fusion = FusionAccumulator::new();
                fusion.absorb(per_space.pop().unwrap_or_default(), 1.0);
                fusion.into_ranked()
            }
        };
        debug!(fused = fused.len(), "fused retrieval signals");

        let mut results = if comparison {
            balance_comparison(fused, &request.entities, top_k)
        } else {
            let mut fused = fused;
            fused.truncate(top_k);
            fused
        };
        results.retain(|candidate| candidate.relevance_score >= self.tuning.min_relevance_score);

        info!(results = results.len(), "retrieval complete");
        Ok(results)
    }
}

impl<B, E> std::fmt::Debug for RetrievalEngine<B, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalEngine")
            .field("tuning", &self.tuning)
            .finish_non_exhaustive()
    }
}
