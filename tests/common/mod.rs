//! Shared fixtures for integration tests: a seeded insurance corpus and
//! engine constructors over the mock collaborators.

use verity::{
    DocumentKind, MockEmbedder, MockSearchBackend, RetrievalEngine, SearchTuning, SeedChunk,
    VectorSpace,
};

/// Seeds a small cross-product corpus with fixed per-signal scores.
///
/// Hybrid fused scores with default tuning (alpha 0.7, max distance 1.5):
/// Car windscreen 0.90, Car claim FAQ 0.77, Car coverage 0.57,
/// Home coverage 0.67, Home contents excess 0.54, Home add-ons 0.44,
/// Maid coverage 0.57, Maid outpatient 0.385, Travel coverage 0.485.
pub fn seed_insurance_corpus(backend: &MockSearchBackend) {
    backend.seed_all([
        SeedChunk::new(
            "The windscreen excess is $100 for each approved windscreen claim under your Car \
             policy.",
            "Car",
            DocumentKind::Terms,
        )
        .source_ref("car_policy_terms.pdf")
        .section_path(vec!["Section 2".to_string(), "Excess".to_string()])
        .keyword_score(0.9)
        .distance(VectorSpace::Content, 0.15)
        .distance(VectorSpace::Question, 0.15)
        .distance(VectorSpace::Summary, 0.3),
        SeedChunk::new(
            "To claim for windscreen damage, take your vehicle to an approved workshop with \
             your policy number.",
            "Car",
            DocumentKind::Faq,
        )
        .source_ref("car_faq.pdf")
        .keyword_score(0.7)
        .distance(VectorSpace::Content, 0.3),
        SeedChunk::new(
            "Car insurance covers accidental loss or damage to your vehicle from collision, \
             fire, and theft.",
            "Car",
            DocumentKind::Terms,
        )
        .source_ref("car_policy_terms.pdf")
        .keyword_score(0.5)
        .distance(VectorSpace::Content, 0.6),
        SeedChunk::new(
            "Home insurance covers your building and household contents against fire, flood, \
             and theft.",
            "Home",
            DocumentKind::Terms,
        )
        .source_ref("home_policy_terms.pdf")
        .keyword_score(0.6)
        .distance(VectorSpace::Content, 0.45),
        SeedChunk::new(
            "Home contents claims carry a $500 excess for each claim you make.",
            "Home",
            DocumentKind::Benefits,
        )
        .source_ref("home_benefits.pdf")
        .keyword_score(0.4)
        .distance(VectorSpace::Content, 0.6)
        .table_data(true),
        SeedChunk::new(
            "You can add cover for renovations and personal belongings to your Home policy.",
            "Home",
            DocumentKind::Faq,
        )
        .source_ref("home_faq.pdf")
        .keyword_score(0.3)
        .distance(VectorSpace::Content, 0.75),
        SeedChunk::new(
            "Maid insurance provides medical and personal accident coverage for your domestic \
             helper.",
            "Maid",
            DocumentKind::Terms,
        )
        .source_ref("maid_policy_terms.pdf")
        .keyword_score(0.5)
        .distance(VectorSpace::Content, 0.6),
        SeedChunk::new(
            "Maid insurance outpatient benefit covers up to $1,500 of GP visits per policy \
             year.",
            "Maid",
            DocumentKind::Benefits,
        )
        .source_ref("maid_benefits.pdf")
        .keyword_score(0.35)
        .distance(VectorSpace::Content, 0.9)
        .table_data(true),
        SeedChunk::new(
            "Travel insurance covers trip cancellation, lost baggage, and overseas medical \
             expenses.",
            "Travel",
            DocumentKind::Terms,
        )
        .source_ref("travel_policy_terms.pdf")
        .keyword_score(0.45)
        .distance(VectorSpace::Content, 0.75),
    ]);
}

pub fn make_engine(backend: MockSearchBackend) -> RetrievalEngine<MockSearchBackend, MockEmbedder> {
    init_tracing();
    RetrievalEngine::new(backend, MockEmbedder::new(), SearchTuning::default())
        .expect("default tuning is valid")
}

pub fn seeded_engine() -> RetrievalEngine<MockSearchBackend, MockEmbedder> {
    let backend = MockSearchBackend::new();
    seed_insurance_corpus(&backend);
    make_engine(backend)
}

/// Honors `RUST_LOG` when set; repeated calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
