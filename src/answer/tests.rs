use super::*;
use crate::confidence::ConfidenceAssessment;
use crate::evidence::{DocumentKind, EvidenceCandidate, SignalOrigin};

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

fn candidate(content: &str, entity: &str, kind: DocumentKind, score: f32) -> EvidenceCandidate {
    EvidenceCandidate::new(content, entity, kind, score, SignalOrigin::new("content"))
}

fn windscreen_evidence() -> Vec<EvidenceCandidate> {
    vec![
        candidate(
            "The windscreen excess is $100 per claim.",
            "Car",
            DocumentKind::Terms,
            0.9,
        )
        .section_path(vec!["Section 2".to_string(), "Windscreen".to_string()]),
        candidate(
            "Windscreen repairs are arranged through approved workshops.",
            "Car",
            DocumentKind::Faq,
            0.8,
        ),
    ]
}

#[test]
fn test_citation_list_is_one_based() {
    let citations = Citation::from_evidence(&windscreen_evidence());
    assert_eq!(citations.len(), 2);
    assert_eq!(citations[0].id, "cite_1");
    assert_eq!(citations[1].id, "cite_2");
    assert_eq!(citations[0].entity_label, "Car");
    assert_eq!(citations[0].category, DocumentKind::Terms);
    assert_close(citations[1].relevance_score, 0.8);
}

#[test]
fn test_citation_markers_by_style() {
    let citations = Citation::from_evidence(&windscreen_evidence());
    let first = &citations[0];

    assert_eq!(first.marker(CitationStyle::Numbered, 1), "[1]");
    assert_eq!(
        first.marker(CitationStyle::Inline, 1),
        "(Source: Car terms - Section 2 > Windscreen)"
    );
    assert_eq!(first.marker(CitationStyle::Footnote, 3), "³");
    // Past the symbol table the footnote style falls back to numbered.
    assert_eq!(first.marker(CitationStyle::Footnote, 11), "[11]");

    assert_eq!(
        first.full_reference(2),
        "[2] Car terms - Section 2 > Windscreen (Relevance: 0.90)"
    );
}

#[test]
fn test_citation_usage_detection() {
    let citations = Citation::from_evidence(&windscreen_evidence());
    let first = &citations[0];

    assert!(first.used_in_answer("The excess applies [1] to all repairs."));
    assert!(first.used_in_answer("Your Car policy covers this."));
    assert!(first.used_in_answer("See the policy terms for details."));
    assert!(!first.used_in_answer("The scars healed quickly."));
    assert!(!first.used_in_answer("We have no information about car cover."));
}

#[tokio::test]
async fn test_synthesizer_generates_cited_answer() {
    let synthesizer =
        AnswerSynthesizer::new(MockGenerationClient::replying("The windscreen excess is $100 [1]."));
    let request = AnswerRequest::new("What is the windscreen excess?", windscreen_evidence());

    let result = synthesizer.synthesize(&request).await;

    assert_eq!(result.answer, "The windscreen excess is $100 [1].");
    assert_eq!(result.citations.len(), 2);
    assert_eq!(result.evidence_available, 2);
    // Only the first citation's marker appears in the answer.
    assert_eq!(result.assessment.used_evidence_count, 1);
    assert!(result.assessment.score > 0.0);
    assert!(result.reasoning.contains("1 product(s)"));
    assert!(result.reasoning.contains("Confidence score:"));

    let prompt = synthesizer
        .generation()
        .last_prompt()
        .expect("generation was invoked");
    assert!(prompt.contains("Customer Question: What is the windscreen excess?"));
    assert!(prompt.contains("Source 1: Car terms - Section 2 > Windscreen"));
    assert!(prompt.contains("Content: The windscreen excess is $100 per claim."));
    assert!(prompt.contains("Citation: [1]"));
    assert!(prompt.contains("---"));
    assert!(prompt.contains("[1], [2], [3] etc."));
}

#[tokio::test]
async fn test_synthesizer_footnote_style_flows_into_prompt() {
    let synthesizer = AnswerSynthesizer::new(MockGenerationClient::replying("Covered ¹."));
    let request = AnswerRequest::new("What is covered?", windscreen_evidence())
        .citation_style(CitationStyle::Footnote);

    synthesizer.synthesize(&request).await;

    let prompt = synthesizer
        .generation()
        .last_prompt()
        .expect("generation was invoked");
    assert!(prompt.contains("Citation: ¹"));
    assert!(prompt.contains("Citation: ²"));
    assert!(prompt.contains("¹, ², ³ etc."));
}

#[tokio::test]
async fn test_synthesizer_rejects_blank_query() {
    let synthesizer = AnswerSynthesizer::new(MockGenerationClient::replying("unused"));
    let request = AnswerRequest::new("   ", windscreen_evidence());

    let result = synthesizer.synthesize(&request).await;

    assert!(result.answer.contains("valid question"));
    assert!(result.citations.is_empty());
    assert_eq!(result.assessment, ConfidenceAssessment::no_evidence());
    assert_eq!(result.evidence_available, 0);
    assert!(synthesizer.generation().prompts().is_empty());
}

#[tokio::test]
async fn test_synthesizer_no_evidence_path() {
    let synthesizer = AnswerSynthesizer::new(MockGenerationClient::replying("unused"));
    let request = AnswerRequest::new("What is the windscreen excess?", Vec::new());

    let result = synthesizer.synthesize(&request).await;

    assert!(result.answer.contains("don't have enough information"));
    assert_eq!(result.assessment.score, 0.0);
    assert!(!result.assessment.sufficient);
    assert!(result.citations.is_empty());
    assert!(synthesizer.generation().prompts().is_empty());
}

#[tokio::test]
async fn test_synthesizer_provider_failure_falls_back() {
    let synthesizer = AnswerSynthesizer::new(MockGenerationClient::failing());
    let request = AnswerRequest::new("What is the windscreen excess?", windscreen_evidence());

    let result = synthesizer.synthesize(&request).await;

    assert!(result.answer.contains("I apologize"));
    assert!(result.answer.contains("(Error:"));
    // Citations survive so the caller can still show provenance.
    assert_eq!(result.citations.len(), 2);
    assert_eq!(result.assessment, ConfidenceAssessment::no_evidence());
    assert_eq!(result.evidence_available, 2);
    assert!(result.reasoning.contains("Error during answer generation"));
}

#[test]
fn test_format_response_layout() {
    let citations = vec![
        Citation {
            id: "cite_1".to_string(),
            entity_label: "Car".to_string(),
            category: DocumentKind::Terms,
            source_ref: String::new(),
            section_path: Vec::new(),
            relevance_score: 0.9,
        },
        Citation {
            id: "cite_2".to_string(),
            entity_label: "Home".to_string(),
            category: DocumentKind::Faq,
            source_ref: String::new(),
            section_path: vec!["Cover".to_string()],
            relevance_score: 0.5,
        },
    ];
    let result = AnswerResult {
        answer: "The excess is $100.".to_string(),
        citations,
        assessment: ConfidenceAssessment {
            score: 0.875,
            sufficient: true,
            used_evidence_count: 1,
        },
        evidence_available: 2,
        reasoning: "reasoning".to_string(),
    };

    assert_eq!(
        result.format_response(true, true),
        "The excess is $100.\n\n**Sources:**\n[1] Car terms (Relevance: 0.90)\n\
         [2] Home faq - Cover (Relevance: 0.50)\n\n*Confidence: 87.5%*"
    );
    assert_eq!(result.format_response(false, false), "The excess is $100.");
    assert!(!result.format_response(true, false).contains("Confidence"));
}

#[test]
fn test_format_response_omits_zero_confidence() {
    let result = AnswerResult {
        answer: "answer".to_string(),
        citations: Vec::new(),
        assessment: ConfidenceAssessment::no_evidence(),
        evidence_available: 0,
        reasoning: String::new(),
    };
    assert_eq!(result.format_response(true, true), "answer");
}

#[test]
fn test_answer_request_builders() {
    let request = AnswerRequest::new("query", Vec::new())
        .citation_style(CitationStyle::Inline)
        .confidence(crate::confidence::ConfidenceTuning::default());
    assert_eq!(request.citation_style, CitationStyle::Inline);
    assert!(!request.has_evidence());
}
