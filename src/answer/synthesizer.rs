use tracing::{debug, instrument, warn};

use super::citation::{Citation, CitationStyle};
use super::client::GenerationClient;
use super::types::{AnswerRequest, AnswerResult};
use crate::confidence::{ConfidenceAssessment, score_confidence, valid_relevance_scores};
use crate::evidence::EvidenceCandidate;

/// Canned reply for blank questions; nothing is generated or scored.
const INVALID_QUERY_ANSWER: &str =
    "I need a valid question to provide an answer. Please ask me about insurance products.";

/// Canned reply when retrieval produced no evidence. Deliberately carries
/// the honest hedging an LLM should produce in that situation.
const NO_CONTEXT_ANSWER: &str = "I don't have enough information in our insurance documents to \
     answer your question. Please contact our customer service team for assistance, or try \
     rephrasing your question to be more specific about the insurance product you're interested \
     in.";

/// Synthesizes grounded, cited answers from retrieved evidence.
///
/// Every path returns an [`AnswerResult`]; provider failures surface as an
/// apologetic fallback answer with zero confidence rather than an error.
pub struct AnswerSynthesizer<G> {
    generation: G,
}

impl<G> AnswerSynthesizer<G> {
    pub fn new(generation: G) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> &G {
        &self.generation
    }
}

impl<G> std::fmt::Debug for AnswerSynthesizer<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerSynthesizer").finish_non_exhaustive()
    }
}

impl<G: GenerationClient> AnswerSynthesizer<G> {
    /// Generates an answer for the request's query from its evidence, then
    /// scores the result.
    #[instrument(
        skip(self, request),
        fields(
            evidence = request.evidence.len(),
            style = ?request.citation_style,
        )
    )]
    pub async fn synthesize(&self, request: &AnswerRequest) -> AnswerResult {
        if request.query.trim().is_empty() {
            return AnswerResult {
                answer: INVALID_QUERY_ANSWER.to_string(),
                citations: Vec::new(),
                assessment: ConfidenceAssessment::no_evidence(),
                evidence_available: 0,
                reasoning: "Invalid or empty query provided.".to_string(),
            };
        }

        if !request.has_evidence() {
            debug!("no evidence available; returning no-context answer");
            return AnswerResult {
                answer: NO_CONTEXT_ANSWER.to_string(),
                citations: Vec::new(),
                assessment: ConfidenceAssessment::no_evidence(),
                evidence_available: 0,
                reasoning: "No relevant evidence was provided by the retrieval stage.".to_string(),
            };
        }

        let citations = Citation::from_evidence(&request.evidence);
        let context = prepare_context(&request.evidence, &citations, request.citation_style);
        let prompt = build_prompt(&request.query, &context, request.citation_style);

        let answer = match self.generation.generate(&prompt).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "generation failed; returning fallback answer");
                return AnswerResult {
                    answer: format!(
                        "I apologize, but I encountered an error while processing your \
                         question. Please try again or contact customer service. \
                         (Error: {error})"
                    ),
                    citations,
                    assessment: ConfidenceAssessment::no_evidence(),
                    evidence_available: request.evidence.len(),
                    reasoning: format!("Error during answer generation: {error}"),
                };
            }
        };

        let mut assessment = score_confidence(
            &request.evidence,
            &answer,
            &request.query,
            &request.confidence,
        );
        // Citation markers give a sharper usage signal than evidence labels
        // alone once the answer text exists.
        assessment.used_evidence_count = citations
            .iter()
            .filter(|citation| citation.used_in_answer(&answer))
            .count();

        let reasoning = build_reasoning(request, &assessment);

        AnswerResult {
            answer,
            citations,
            assessment,
            evidence_available: request.evidence.len(),
            reasoning,
        }
    }
}

/// Renders the evidence into the source-annotated context block the prompt
/// embeds, one `Source N / Content / Citation` stanza per chunk.
fn prepare_context(
    evidence: &[EvidenceCandidate],
    citations: &[Citation],
    style: CitationStyle,
) -> String {
    let mut parts = Vec::new();

    for (idx, (candidate, citation)) in evidence.iter().zip(citations).enumerate() {
        let number = idx + 1;
        let mut source = format!(
            "Source {number}: {} {}",
            candidate.entity_label,
            candidate.category.label()
        );
        if !candidate.section_path.is_empty() {
            source.push_str(" - ");
            source.push_str(&candidate.section_path.join(" > "));
        }
        parts.push(source);
        parts.push(format!("Content: {}", candidate.content));
        parts.push(format!("Citation: {}", citation.marker(style, number)));
        parts.push("---".to_string());
    }

    parts.join("\n")
}

fn citation_instruction(style: CitationStyle) -> &'static str {
    match style {
        CitationStyle::Numbered => "[1], [2], [3] etc.",
        CitationStyle::Inline => "(Source: Product Document Type)",
        CitationStyle::Footnote => "¹, ², ³ etc.",
    }
}

fn build_prompt(query: &str, context: &str, style: CitationStyle) -> String {
    format!(
        "You are an insurance customer service assistant. Your job is to answer customer \
         questions based ONLY on the provided insurance document context. Follow these strict \
         rules:\n\
         \n\
         1. ONLY use information from the provided context - never use external knowledge\n\
         2. If the context doesn't contain enough information to answer the question, say so \
         clearly\n\
         3. Use clear, simple language that customers can understand\n\
         4. Cite every piece of information using the citation format: {}\n\
         5. Be direct and helpful\n\
         6. If multiple products are mentioned, clearly distinguish between them\n\
         \n\
         Customer Question: {query}\n\
         \n\
         Context from Insurance Documents:\n\
         {context}\n\
         \n\
         Answer the customer's question based ONLY on the provided context. Include proper \
         citations for every fact you mention.",
        citation_instruction(style),
    )
}

/// One-line audit trail of evidence volume, relevance, and the verdict.
fn build_reasoning(request: &AnswerRequest, assessment: &ConfidenceAssessment) -> String {
    let mut products: Vec<&str> = Vec::new();
    for candidate in &request.evidence {
        if !products.contains(&candidate.entity_label.as_str()) {
            products.push(candidate.entity_label.as_str());
        }
    }

    let valid = valid_relevance_scores(&request.evidence);
    let mean_relevance = if valid.is_empty() {
        0.0
    } else {
        valid.iter().sum::<f32>() / valid.len() as f32
    };

    let verdict = if assessment.sufficient {
        "Assessment: Sufficient context available to provide a comprehensive answer"
    } else {
        "Assessment: Limited context available, answer may be incomplete"
    };

    [
        format!(
            "Used {} evidence chunks from {} product(s): {}",
            request.evidence.len(),
            products.len(),
            products.join(", ")
        ),
        format!("Average relevance score: {mean_relevance:.2}"),
        format!("Confidence score: {:.2}", assessment.score),
        verdict.to_string(),
    ]
    .join(" | ")
}
