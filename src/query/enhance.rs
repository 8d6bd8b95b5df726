use std::collections::HashSet;

use crate::constants::GENERIC_QUERY_PLACEHOLDER;

/// Ordered abbreviation/synonym pairs applied to queries before retrieval.
///
/// Expansion is substring-based and sequential: each table entry rewrites
/// every occurrence of its term as `"term expansion"`, and later entries see
/// the text produced by earlier ones. Order therefore matters and is
/// preserved from construction.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: Vec<(String, String)>,
}

/// Domain vocabulary for the insurance corpus, in application order.
const INSURANCE_TERMS: [(&str, &str); 22] = [
    ("ncd", "no claim discount"),
    ("fdw", "foreign domestic worker"),
    ("covid", "covid-19"),
    ("icu", "intensive care unit"),
    ("gp", "general practitioner"),
    ("a&e", "accident and emergency"),
    ("helper", "domestic helper"),
    ("maid", "domestic helper"),
    ("car", "vehicle"),
    ("auto", "vehicle"),
    ("house", "home"),
    ("property", "home"),
    ("trip", "travel"),
    ("vacation", "travel"),
    ("holiday", "travel"),
    ("excess", "deductible"),
    ("sum insured", "coverage limit"),
    ("premium", "insurance cost"),
    ("claim", "insurance claim"),
    ("policy", "insurance policy"),
    ("coverage", "insurance coverage"),
    ("benefit", "insurance benefit"),
];

impl SynonymTable {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// The built-in insurance vocabulary.
    pub fn insurance_defaults() -> Self {
        Self::new(
            INSURANCE_TERMS
                .iter()
                .map(|(term, expansion)| (term.to_string(), expansion.to_string()))
                .collect(),
        )
    }

    /// A table with no entries; enhancement then only lower-cases and
    /// appends entities.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the enhanced query handed to the retrieval signals.
    ///
    /// Lower-cases the query, applies synonym expansion, then appends each
    /// entity (verbatim) whose words are not already all present in the
    /// enhanced text. A blank result falls back to
    /// [`GENERIC_QUERY_PLACEHOLDER`] so embedding never sees empty input.
    pub fn enhance(&self, query: &str, entities: &[String]) -> String {
        let mut enhanced = query.to_lowercase();
        for (term, expansion) in &self.entries {
            if enhanced.contains(term.as_str()) {
                enhanced = enhanced.replace(term.as_str(), &format!("{term} {expansion}"));
            }
        }

        let additions: Vec<&str> = {
            let query_words: HashSet<&str> = enhanced.split_whitespace().collect();
            entities
                .iter()
                .filter(|entity| {
                    let lowered = entity.to_lowercase();
                    !lowered.split_whitespace().all(|word| query_words.contains(word))
                })
                .map(String::as_str)
                .collect()
        };
        for entity in additions {
            enhanced.push(' ');
            enhanced.push_str(entity);
        }

        if enhanced.trim().is_empty() {
            return GENERIC_QUERY_PLACEHOLDER.to_string();
        }
        enhanced
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::insurance_defaults()
    }
}
