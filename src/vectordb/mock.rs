//! In-memory fixture backend for tests.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use super::client::SearchBackend;
use super::error::SearchBackendError;
use super::model::{BackendHit, VectorSpace, content_point_id};
use crate::evidence::DocumentKind;
use crate::query::EntityFilter;

const MOCK_COLLECTION: &str = "mock";

/// One seeded chunk with fixed per-signal scores.
///
/// A chunk is a keyword hit only when [`SeedChunk::keyword_score`] is set,
/// and a hit in a vector space only when a distance is seeded for that space.
/// Fixed scores keep test expectations exact without re-implementing BM25 or
/// vector similarity.
#[derive(Debug, Clone)]
pub struct SeedChunk {
    pub content: String,
    pub entity_label: String,
    pub category: DocumentKind,
    pub source_ref: String,
    pub section_path: Vec<String>,
    pub question: Option<String>,
    pub summary: Option<String>,
    pub is_table_data: bool,
    pub keyword_score: Option<f32>,
    pub space_distances: HashMap<VectorSpace, f32>,
}

impl SeedChunk {
    pub fn new(
        content: impl Into<String>,
        entity_label: impl Into<String>,
        category: DocumentKind,
    ) -> Self {
        Self {
            content: content.into(),
            entity_label: entity_label.into(),
            category,
            source_ref: String::new(),
            section_path: Vec::new(),
            question: None,
            summary: None,
            is_table_data: false,
            keyword_score: None,
            space_distances: HashMap::new(),
        }
    }

    /// Marks the chunk as a keyword hit with a bounded `[0, 1]` score.
    pub fn keyword_score(mut self, score: f32) -> Self {
        self.keyword_score = Some(score);
        self
    }

    /// Seeds the chunk's distance in one vector space.
    pub fn distance(mut self, space: VectorSpace, distance: f32) -> Self {
        self.space_distances.insert(space, distance);
        self
    }

    /// Seeds the same distance in every vector space.
    pub fn all_distances(mut self, distance: f32) -> Self {
        for space in VectorSpace::ALL {
            self.space_distances.insert(space, distance);
        }
        self
    }

    pub fn source_ref(mut self, source_ref: impl Into<String>) -> Self {
        self.source_ref = source_ref.into();
        self
    }

    pub fn section_path(mut self, section_path: Vec<String>) -> Self {
        self.section_path = section_path;
        self
    }

    pub fn table_data(mut self, is_table_data: bool) -> Self {
        self.is_table_data = is_table_data;
        self
    }

    fn to_hit(&self, score: f32) -> BackendHit {
        BackendHit {
            content: self.content.clone(),
            entity_label: self.entity_label.clone(),
            category: self.category,
            source_ref: self.source_ref.clone(),
            section_path: self.section_path.clone(),
            chunk_id: Some(format!("{:016x}", content_point_id(&self.content))),
            question: self.question.clone(),
            summary: self.summary.clone(),
            is_table_data: self.is_table_data,
            score,
        }
    }

    fn matches(&self, filter: Option<&EntityFilter>) -> bool {
        filter.is_none_or(|f| f.matches(&self.entity_label))
    }
}

/// [`SearchBackend`] over seeded chunks, with switches for failing either
/// signal kind to exercise degradation paths.
#[derive(Default)]
pub struct MockSearchBackend {
    chunks: RwLock<Vec<SeedChunk>>,
    fail_keyword: AtomicBool,
    fail_spaces: RwLock<HashSet<VectorSpace>>,
}

impl MockSearchBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, chunk: SeedChunk) {
        self.chunks
            .write()
            .expect("mock backend lock poisoned")
            .push(chunk);
    }

    pub fn seed_all(&self, chunks: impl IntoIterator<Item = SeedChunk>) {
        self.chunks
            .write()
            .expect("mock backend lock poisoned")
            .extend(chunks);
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.read().expect("mock backend lock poisoned").len()
    }

    /// Makes every subsequent keyword search fail.
    pub fn fail_keyword(&self) {
        self.fail_keyword.store(true, Ordering::SeqCst);
    }

    /// Makes every subsequent search in `space` fail.
    pub fn fail_space(&self, space: VectorSpace) {
        self.fail_spaces
            .write()
            .expect("mock backend lock poisoned")
            .insert(space);
    }

    fn search_failed(message: &str) -> SearchBackendError {
        SearchBackendError::SearchFailed {
            collection: MOCK_COLLECTION.to_string(),
            message: message.to_string(),
        }
    }
}

impl SearchBackend for MockSearchBackend {
    async fn keyword_search(
        &self,
        _query: &str,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Result<Vec<BackendHit>, SearchBackendError> {
        if self.fail_keyword.load(Ordering::SeqCst) {
            return Err(Self::search_failed("keyword search configured to fail"));
        }

        let chunks = self
            .chunks
            .read()
            .map_err(|_| Self::search_failed("lock poisoned"))?;

        let mut hits: Vec<BackendHit> = chunks
            .iter()
            .filter(|chunk| chunk.matches(filter))
            .filter_map(|chunk| chunk.keyword_score.map(|score| chunk.to_hit(score)))
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit as usize);
        Ok(hits)
    }

    async fn vector_search(
        &self,
        _vector: &[f32],
        space: VectorSpace,
        filter: Option<&EntityFilter>,
        limit: u64,
    ) -> Result<Vec<BackendHit>, SearchBackendError> {
        let failing = self
            .fail_spaces
            .read()
            .map_err(|_| Self::search_failed("lock poisoned"))?
            .contains(&space);
        if failing {
            return Err(Self::search_failed("vector search configured to fail"));
        }

        let chunks = self
            .chunks
            .read()
            .map_err(|_| Self::search_failed("lock poisoned"))?;

        let mut hits: Vec<BackendHit> = chunks
            .iter()
            .filter(|chunk| chunk.matches(filter))
            .filter_map(|chunk| {
                chunk
                    .space_distances
                    .get(&space)
                    .map(|&distance| chunk.to_hit(distance))
            })
            .collect();

        // Nearest first: vector hits carry distances.
        hits.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit as usize);
        Ok(hits)
    }
}
