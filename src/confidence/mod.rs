//! Answer confidence scoring and context-sufficiency assessment.
//!
//! [`score_confidence`] is a pure function over the fused evidence, the
//! generated answer text, and the originating query. No external calls; the
//! same inputs always produce the same [`ConfidenceAssessment`].

mod config;
mod lexical;
mod scorer;
mod types;


pub use config::ConfidenceTuning;
pub use lexical::UncertaintyTier;
pub use scorer::score_confidence;
pub use types::ConfidenceAssessment;

pub(crate) use lexical::{mentioned, negated_mention};
pub(crate) use scorer::valid_relevance_scores;
