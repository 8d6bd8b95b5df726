//! Evidence model shared across retrieval, confidence scoring, and answer
//! synthesis.
//!
//! An [`EvidenceCandidate`] is one retrieved document fragment carrying its
//! provenance (entity label, category, source reference, section path) and a
//! relevance score whose meaning depends on the pipeline stage: per-signal
//! scores are normalized to `[0, 1]`, fused scores are weighted sums that are
//! only meaningful for ranking.

mod model;

#[cfg(test)]
mod tests;

pub use model::{DocumentKind, EvidenceCandidate, SignalOrigin};
