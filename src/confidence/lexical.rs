//! Lexical analysis of generated answers: hedging detection, specificity
//! counting, and query-term coverage.
//!
//! All matching runs over lowercased text; callers lowercase once and pass
//! the result around.

use std::sync::LazyLock;

use regex::Regex;

/// Outright admissions that the context did not answer the question.
const STRONG_UNCERTAINTY_PHRASES: [&str; 12] = [
    "don't have enough information",
    "not enough information",
    "insufficient information",
    "cannot determine",
    "unclear",
    "please contact",
    "i don't know",
    "unsure",
    "unable to find",
    "no information available",
    "not specified",
    "not mentioned",
];

/// Context-dependent hedging.
const MODERATE_UNCERTAINTY_PHRASES: [&str; 12] = [
    "may depend",
    "might vary",
    "could be",
    "possibly",
    "perhaps",
    "seems to",
    "appears to",
    "likely",
    "probably",
    "i think",
    "it depends",
    "varies",
];

/// Mild hedging that often carries procedural meaning.
const WEAK_UNCERTAINTY_PHRASES: [&str; 5] =
    ["you may", "may apply", "may choose", "might want", "could consider"];

/// Procedural phrasings that suppress the moderate and weak tiers; "you may
/// apply online" is an instruction, not epistemic hedging.
const INSTRUCTIONAL_PHRASES: [&str; 8] = [
    "you may apply",
    "you may choose",
    "you may contact",
    "may be eligible",
    "you might want",
    "you could consider",
    "may qualify",
    "may submit",
];

/// Words carrying no lookup value when measuring query-term coverage.
const QUERY_STOPWORDS: [&str; 25] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "what", "how", "when", "where", "why", "which", "who",
];

/// Hedging severity; only the highest matching tier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncertaintyTier {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecificityKind {
    Monetary,
    Percentage,
    Time,
    Age,
    Range,
}

static SPECIFICITY_PATTERNS: LazyLock<Vec<(Regex, SpecificityKind)>> = LazyLock::new(|| {
    [
        (r"\$\d+", SpecificityKind::Monetary),
        (r"\d+\s*dollars?", SpecificityKind::Monetary),
        (r"\d+\s*cents?", SpecificityKind::Monetary),
        (r"\d+\s*%", SpecificityKind::Percentage),
        (r"\d+\s*percent", SpecificityKind::Percentage),
        (r"\d+\s*days?", SpecificityKind::Time),
        (r"\d+\s*months?", SpecificityKind::Time),
        (r"\d+\s*years?", SpecificityKind::Time),
        (r"\d+\s*weeks?", SpecificityKind::Time),
        (r"\d+\s*years?\s*old", SpecificityKind::Age),
        (r"age\s*\d+", SpecificityKind::Age),
        (r"between\s*\d+\s*and\s*\d+", SpecificityKind::Range),
    ]
    .into_iter()
    .map(|(pattern, kind)| {
        let regex = Regex::new(pattern).expect("hard-coded specificity pattern compiles");
        (regex, kind)
    })
    .collect()
});

/// Dollar figures quoted while denying knowledge do not count as specifics.
const MONETARY_NEGATIVE_CONTEXTS: [&str; 4] =
    ["don't have", "no information", "not specified", "unclear"];

/// Hypothetical time periods ("may take 5 days") do not count as specifics.
const TIME_HYPOTHETICAL_CONTEXTS: [&str; 4] = ["may take", "might be", "could be", "possibly"];

/// Highest-severity hedging tier present in the answer, if any. The
/// instructional allow-list suppresses the moderate and weak tiers but never
/// the strong one.
pub fn detect_uncertainty(answer_lower: &str) -> Option<UncertaintyTier> {
    let contains_any =
        |phrases: &[&str]| phrases.iter().any(|phrase| answer_lower.contains(phrase));

    if contains_any(&STRONG_UNCERTAINTY_PHRASES) {
        return Some(UncertaintyTier::Strong);
    }
    if contains_any(&INSTRUCTIONAL_PHRASES) {
        return None;
    }
    if contains_any(&MODERATE_UNCERTAINTY_PHRASES) {
        return Some(UncertaintyTier::Moderate);
    }
    if contains_any(&WEAK_UNCERTAINTY_PHRASES) {
        return Some(UncertaintyTier::Weak);
    }
    None
}

/// Whether the answer admits outright that the context was not enough.
pub(crate) fn has_strong_uncertainty(answer_lower: &str) -> bool {
    STRONG_UNCERTAINTY_PHRASES
        .iter()
        .any(|phrase| answer_lower.contains(phrase))
}

fn specificity_counts(kind: SpecificityKind, answer_lower: &str) -> bool {
    match kind {
        SpecificityKind::Monetary => !MONETARY_NEGATIVE_CONTEXTS
            .iter()
            .any(|context| answer_lower.contains(context)),
        SpecificityKind::Time => !TIME_HYPOTHETICAL_CONTEXTS
            .iter()
            .any(|context| answer_lower.contains(context)),
        SpecificityKind::Percentage | SpecificityKind::Age | SpecificityKind::Range => true,
    }
}

/// Number of concrete figures (amounts, percentages, durations, ages) in the
/// answer, after the negative-context guards.
pub(crate) fn count_specificity(answer_lower: &str) -> usize {
    SPECIFICITY_PATTERNS
        .iter()
        .filter(|(_, kind)| specificity_counts(*kind, answer_lower))
        .map(|(pattern, _)| pattern.find_iter(answer_lower).count())
        .sum()
}

pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Fraction of the query's non-stopword terms that literally appear in the
/// answer. Queries with no such terms count as fully covered.
pub(crate) fn term_overlap_ratio(query_lower: &str, answer_lower: &str) -> f32 {
    let terms: Vec<&str> = query_lower
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !QUERY_STOPWORDS.contains(word))
        .collect();
    if terms.is_empty() {
        return 1.0;
    }

    let matching = terms
        .iter()
        .filter(|term| answer_lower.contains(*term))
        .count();
    matching as f32 / terms.len() as f32
}

/// Word-boundary match, so "car" never matches inside "scar".
pub(crate) fn mentioned(label_lower: &str, answer_lower: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(label_lower));
    Regex::new(&pattern)
        .map(|regex| regex.is_match(answer_lower))
        .unwrap_or(false)
}

/// Whether the label only appears while denying knowledge of it.
pub(crate) fn negated_mention(label_lower: &str, answer_lower: &str) -> bool {
    [
        format!("no information about {label_lower}"),
        format!("don't have {label_lower}"),
        format!("not mentioned in {label_lower}"),
        format!("unclear from {label_lower}"),
    ]
    .iter()
    .any(|negated| answer_lower.contains(negated.as_str()))
}
