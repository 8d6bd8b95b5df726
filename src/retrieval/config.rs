use super::error::{RetrievalError, RetrievalResult};
use crate::vectordb::VectorSpace;

pub const DEFAULT_QUESTION_WEIGHT: f32 = 0.6;
pub const DEFAULT_SUMMARY_WEIGHT: f32 = 0.25;
pub const DEFAULT_CONTENT_WEIGHT: f32 = 0.15;
pub const DEFAULT_HYBRID_ALPHA: f32 = 0.7;
pub const DEFAULT_MIN_RELEVANCE_SCORE: f32 = 0.1;
pub const DEFAULT_MAX_DISTANCE: f32 = 1.5;

/// Fusion weights and thresholds for one retrieval engine.
#[derive(Debug, Clone)]
pub struct SearchTuning {
    /// Weight of the hypothetical-question vector space in multi-vector
    /// fusion.
    pub question_weight: f32,
    /// Weight of the summary vector space.
    pub summary_weight: f32,
    /// Weight of the content vector space.
    pub content_weight: f32,
    /// Vector share in hybrid fusion; the keyword signal gets `1 - alpha`.
    pub hybrid_alpha: f32,
    /// Fused candidates scoring below this are dropped from the final list.
    pub min_relevance_score: f32,
    /// Distance at which vector relevance reaches zero.
    pub max_distance: f32,
}

impl Default for SearchTuning {
    fn default() -> Self {
        Self {
            question_weight: DEFAULT_QUESTION_WEIGHT,
            summary_weight: DEFAULT_SUMMARY_WEIGHT,
            content_weight: DEFAULT_CONTENT_WEIGHT,
            hybrid_alpha: DEFAULT_HYBRID_ALPHA,
            min_relevance_score: DEFAULT_MIN_RELEVANCE_SCORE,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl SearchTuning {
    pub fn hybrid_alpha(mut self, alpha: f32) -> Self {
        self.hybrid_alpha = alpha;
        self
    }

    pub fn min_relevance_score(mut self, min_relevance_score: f32) -> Self {
        self.min_relevance_score = min_relevance_score;
        self
    }

    pub fn max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn space_weights(mut self, question: f32, summary: f32, content: f32) -> Self {
        self.question_weight = question;
        self.summary_weight = summary;
        self.content_weight = content;
        self
    }

    /// Fusion weight of one vector space.
    pub fn space_weight(&self, space: VectorSpace) -> f32 {
        match space {
            VectorSpace::Question => self.question_weight,
            VectorSpace::Summary => self.summary_weight,
            VectorSpace::Content => self.content_weight,
        }
    }

    pub fn validate(&self) -> RetrievalResult<()> {
        for (name, weight) in [
            ("question_weight", self.question_weight),
            ("summary_weight", self.summary_weight),
            ("content_weight", self.content_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RetrievalError::InvalidTuning {
                    reason: format!("{name} must be finite and >= 0 (got {weight})"),
                });
            }
        }
        if !self.hybrid_alpha.is_finite() || !(0.0..=1.0).contains(&self.hybrid_alpha) {
            return Err(RetrievalError::InvalidTuning {
                reason: format!("hybrid_alpha must be in [0, 1] (got {})", self.hybrid_alpha),
            });
        }
        if !self.min_relevance_score.is_finite() || !(0.0..=1.0).contains(&self.min_relevance_score)
        {
            return Err(RetrievalError::InvalidTuning {
                reason: format!(
                    "min_relevance_score must be in [0, 1] (got {})",
                    self.min_relevance_score
                ),
            });
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(RetrievalError::InvalidTuning {
                reason: format!("max_distance must be > 0 (got {})", self.max_distance),
            });
        }
        Ok(())
    }
}
