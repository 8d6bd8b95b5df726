use qdrant_client::Qdrant;
use qdrant_client::qdrant::{Condition, Document, Filter, Query, QueryPointsBuilder};

use super::error::SearchBackendError;
use super::model::{BackendHit, VectorSpace};
use crate::query::EntityFilter;

/// Server-side sparse model used for BM25 keyword scoring.
pub const BM25_MODEL: &str = "qdrant/bm25";

/// Named sparse vector holding the BM25 term weights of chunk content.
pub const KEYWORD_VECTOR_NAME: &str = "content_bm25";

/// One search call per retrieval signal.
///
/// Both calls apply `filter` as a hard restriction: non-matching entities are
/// excluded from the result, never merely down-ranked.
pub trait SearchBackend: Send + Sync {
    /// BM25 keyword search. Hit scores are bounded relevance in `[0, 1]`.
    fn keyword_search(
        &self,
        query: &str,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> impl std::future::Future<Output = Result<Vec<BackendHit>, SearchBackendError>> + Send;

    /// Nearest-neighbor search in one named vector space. Hit scores are
    /// distances (lower is closer).
    fn vector_search(
        &self,
        vector: &[f32],
        space: VectorSpace,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> impl std::future::Future<Output = Result<Vec<BackendHit>, SearchBackendError>> + Send;
}

/// Direct Qdrant client wrapper.
#[derive(Clone)]
pub struct QdrantSearchBackend {
    client: Qdrant,
    url: String,
    collection: String,
}

impl QdrantSearchBackend {
    /// Creates a backend for `url`, searching `collection`.
    pub async fn new(url: &str, collection: impl Into<String>) -> Result<Self, SearchBackendError> {
        let client =
            Qdrant::from_url(url)
                .build()
                .map_err(|e| SearchBackendError::ConnectionFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        Ok(Self {
            client,
            url: url.to_string(),
            collection: collection.into(),
        })
    }

    /// Returns the underlying Qdrant client.
    pub fn client(&self) -> &Qdrant {
        &self.client
    }

    /// Returns the configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the collection being searched.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Performs a basic health check request.
    pub async fn health_check(&self) -> Result<(), SearchBackendError> {
        self.client
            .health_check()
            .await
            .map_err(|e| SearchBackendError::ConnectionFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// BM25 search against the sparse keyword vector, with the query text
    /// embedded server-side.
    pub async fn keyword_search(
        &self,
        query: &str,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Result<Vec<BackendHit>, SearchBackendError> {
        let mut builder = QueryPointsBuilder::new(&self.collection)
            .query(Query::new_nearest(Document::new(query, BM25_MODEL)))
            .using(KEYWORD_VECTOR_NAME)
            .limit(limit)
            .with_payload(true);
        if let Some(filter) = filter {
            builder = builder.filter(entity_filter(filter));
        }

        let response =
            self.client
                .query(builder)
                .await
                .map_err(|e| SearchBackendError::SearchFailed {
                    collection: self.collection.clone(),
                    message: e.to_string(),
                })?;

        Ok(response
            .result
            .into_iter()
            .filter_map(BackendHit::from_scored_point)
            .map(|mut hit| {
                hit.score = bounded_keyword_score(hit.score);
                hit
            })
            .collect())
    }

    /// Nearest-neighbor search in one named vector space.
    pub async fn vector_search(
        &self,
        vector: &[f32],
        space: VectorSpace,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Result<Vec<BackendHit>, SearchBackendError> {
        let mut builder = QueryPointsBuilder::new(&self.collection)
            .query(Query::new_nearest(vector.to_vec()))
            .using(space.vector_name())
            .limit(limit)
            .with_payload(true);
        if let Some(filter) = filter {
            builder = builder.filter(entity_filter(filter));
        }

        let response =
            self.client
                .query(builder)
                .await
                .map_err(|e| SearchBackendError::SearchFailed {
                    collection: self.collection.clone(),
                    message: e.to_string(),
                })?;

        Ok(response
            .result
            .into_iter()
            .filter_map(BackendHit::from_scored_point)
            .map(|mut hit| {
                // The collection uses cosine similarity; the retrieval layer
                // expects distances.
                hit.score = 1.0 - hit.score;
                hit
            })
            .collect())
    }
}

impl std::fmt::Debug for QdrantSearchBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantSearchBackend")
            .field("url", &self.url)
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

impl SearchBackend for QdrantSearchBackend {
    async fn keyword_search(
        &self,
        query: &str,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Result<Vec<BackendHit>, SearchBackendError> {
        self.keyword_search(query, filter, limit).await
    }

    async fn vector_search(
        &self,
        vector: &[f32],
        space: VectorSpace,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Result<Vec<BackendHit>, SearchBackendError> {
        self.vector_search(vector, space, filter, limit).await
    }
}

fn entity_filter(filter: &EntityFilter) -> Filter {
    match filter {
        EntityFilter::One(label) => {
            Filter::must([Condition::matches("entity_label", label.clone())])
        }
        EntityFilter::AnyOf(labels) => Filter::should(
            labels
                .iter()
                .map(|label| Condition::matches("entity_label", label.clone()))
                .collect::<Vec<_>>(),
        ),
    }
}

/// Maps an unbounded BM25 score into `[0, 1)`, monotonically.
pub(crate) fn bounded_keyword_score(score: f32) -> f32 {
    let score = score.max(0.0);
    score / (1.0 + score)
}
