use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_CONFIDENCE_THRESHOLD: f32 = 0.01;

pub const DEFAULT_STRONG_UNCERTAINTY_PENALTY: f32 = 0.6;
pub const DEFAULT_MODERATE_UNCERTAINTY_PENALTY: f32 = 0.8;
pub const DEFAULT_WEAK_UNCERTAINTY_PENALTY: f32 = 0.9;

pub const DEFAULT_SPECIFICITY_BOOST_PER_ITEM: f32 = 0.05;
pub const DEFAULT_MAX_SPECIFICITY_BOOST: f32 = 1.15;

pub const DEFAULT_SHORT_QUERY_MAX_WORDS: usize = 3;
pub const DEFAULT_MEDIUM_QUERY_MAX_WORDS: usize = 6;
pub const DEFAULT_SHORT_QUERY_RELEVANCE_GATE: f32 = 0.25;
pub const DEFAULT_MEDIUM_QUERY_RELEVANCE_GATE: f32 = 0.3;
pub const DEFAULT_LONG_QUERY_RELEVANCE_GATE: f32 = 0.35;

pub const DEFAULT_MIN_FACTUAL_ANSWER_WORDS: usize = 8;
pub const DEFAULT_MIN_COMPARISON_ANSWER_WORDS: usize = 20;
pub const DEFAULT_MIN_DEFAULT_ANSWER_WORDS: usize = 12;

pub const DEFAULT_VERY_SHORT_ANSWER_WORDS: usize = 5;
pub const DEFAULT_SHORT_ANSWER_WORDS: usize = 10;
pub const DEFAULT_ADEQUATE_ANSWER_WORDS: usize = 15;
pub const DEFAULT_VERY_SHORT_ANSWER_FACTOR: f32 = 0.7;
pub const DEFAULT_SHORT_ANSWER_FACTOR: f32 = 0.85;
pub const DEFAULT_ADEQUATE_ANSWER_FACTOR: f32 = 0.95;

pub const DEFAULT_TERM_OVERLAP_THRESHOLD: f32 = 0.3;

/// Thresholds, penalties, and boosts for confidence scoring.
///
/// Scoring is total: out-of-range values never fail a call, the scorer
/// clamps its output to `[min_confidence_threshold, 1.0]` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceTuning {
    /// Floor for any scored answer; keeps "poor answer" distinguishable from
    /// the reserved `0.0` of "no evidence".
    pub min_confidence_threshold: f32,
    /// Multiplier applied when the answer hedges outright ("cannot
    /// determine", ...).
    pub strong_uncertainty_penalty: f32,
    /// Multiplier for context-dependent hedging ("may depend", ...).
    pub moderate_uncertainty_penalty: f32,
    /// Multiplier for mild hedging ("you may", ...).
    pub weak_uncertainty_penalty: f32,
    /// Boost contributed by each concrete figure in the answer.
    pub specificity_boost_per_item: f32,
    /// Cap on the accumulated specificity boost.
    pub max_specificity_boost: f32,
    /// Queries up to this many words use the short relevance gate.
    pub short_query_max_words: usize,
    /// Queries up to this many words use the medium relevance gate.
    pub medium_query_max_words: usize,
    pub short_query_relevance_gate: f32,
    pub medium_query_relevance_gate: f32,
    pub long_query_relevance_gate: f32,
    /// Minimum answer words for factual queries ("what", "how much", ...).
    pub min_factual_answer_words: usize,
    /// Minimum answer words for comparison queries.
    pub min_comparison_answer_words: usize,
    /// Minimum answer words for everything else.
    pub min_default_answer_words: usize,
    /// Word-count tier boundaries for the length factor.
    pub very_short_answer_words: usize,
    pub short_answer_words: usize,
    pub adequate_answer_words: usize,
    pub very_short_answer_factor: f32,
    pub short_answer_factor: f32,
    pub adequate_answer_factor: f32,
    /// Fraction of non-stopword query terms that must appear in the answer.
    pub term_overlap_threshold: f32,
}

impl Default for ConfidenceTuning {
    fn default() -> Self {
        Self {
            min_confidence_threshold: DEFAULT_MIN_CONFIDENCE_THRESHOLD,
            strong_uncertainty_penalty: DEFAULT_STRONG_UNCERTAINTY_PENALTY,
            moderate_uncertainty_penalty: DEFAULT_MODERATE_UNCERTAINTY_PENALTY,
            weak_uncertainty_penalty: DEFAULT_WEAK_UNCERTAINTY_PENALTY,
            specificity_boost_per_item: DEFAULT_SPECIFICITY_BOOST_PER_ITEM,
            max_specificity_boost: DEFAULT_MAX_SPECIFICITY_BOOST,
            short_query_max_words: DEFAULT_SHORT_QUERY_MAX_WORDS,
            medium_query_max_words: DEFAULT_MEDIUM_QUERY_MAX_WORDS,
            short_query_relevance_gate: DEFAULT_SHORT_QUERY_RELEVANCE_GATE,
            medium_query_relevance_gate: DEFAULT_MEDIUM_QUERY_RELEVANCE_GATE,
            long_query_relevance_gate: DEFAULT_LONG_QUERY_RELEVANCE_GATE,
            min_factual_answer_words: DEFAULT_MIN_FACTUAL_ANSWER_WORDS,
            min_comparison_answer_words: DEFAULT_MIN_COMPARISON_ANSWER_WORDS,
            min_default_answer_words: DEFAULT_MIN_DEFAULT_ANSWER_WORDS,
            very_short_answer_words: DEFAULT_VERY_SHORT_ANSWER_WORDS,
            short_answer_words: DEFAULT_SHORT_ANSWER_WORDS,
            adequate_answer_words: DEFAULT_ADEQUATE_ANSWER_WORDS,
            very_short_answer_factor: DEFAULT_VERY_SHORT_ANSWER_FACTOR,
            short_answer_factor: DEFAULT_SHORT_ANSWER_FACTOR,
            adequate_answer_factor: DEFAULT_ADEQUATE_ANSWER_FACTOR,
            term_overlap_threshold: DEFAULT_TERM_OVERLAP_THRESHOLD,
        }
    }
}

impl ConfidenceTuning {
    pub fn min_confidence_threshold(mut self, threshold: f32) -> Self {
        self.min_confidence_threshold = threshold;
        self
    }

    pub fn uncertainty_penalties(mut self, strong: f32, moderate: f32, weak: f32) -> Self {
        self.strong_uncertainty_penalty = strong;
        self.moderate_uncertainty_penalty = moderate;
        self.weak_uncertainty_penalty = weak;
        self
    }

    pub fn specificity_boost(mut self, per_item: f32, max: f32) -> Self {
        self.specificity_boost_per_item = per_item;
        self.max_specificity_boost = max;
        self
    }

    pub fn relevance_gates(mut self, short: f32, medium: f32, long: f32) -> Self {
        self.short_query_relevance_gate = short;
        self.medium_query_relevance_gate = medium;
        self.long_query_relevance_gate = long;
        self
    }

    pub fn answer_word_floors(mut self, factual: usize, comparison: usize, default: usize) -> Self {
        self.min_factual_answer_words = factual;
        self.min_comparison_answer_words = comparison;
        self.min_default_answer_words = default;
        self
    }

    pub fn term_overlap_threshold(mut self, threshold: f32) -> Self {
        self.term_overlap_threshold = threshold;
        self
    }

    /// Relevance gate for a query of `query_word_count` words; longer
    /// queries get a higher bar.
    pub fn relevance_gate(&self, query_word_count: usize) -> f32 {
        if query_word_count <= self.short_query_max_words {
            self.short_query_relevance_gate
        } else if query_word_count <= self.medium_query_max_words {
            self.medium_query_relevance_gate
        } else {
            self.long_query_relevance_gate
        }
    }

    /// Step-function multiplier penalising short answers.
    pub fn length_factor(&self, answer_word_count: usize) -> f32 {
        if answer_word_count < self.very_short_answer_words {
            self.very_short_answer_factor
        } else if answer_word_count < self.short_answer_words {
            self.short_answer_factor
        } else if answer_word_count < self.adequate_answer_words {
            self.adequate_answer_factor
        } else {
            1.0
        }
    }
}
