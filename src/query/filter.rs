use serde::{Deserialize, Serialize};

/// Hard entity restriction applied inside the search backend.
///
/// A filter never boosts: candidates from non-matching entities are excluded,
/// not down-ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityFilter {
    /// Equality match on a single entity label.
    One(String),
    /// Disjunction over several labels.
    AnyOf(Vec<String>),
}

impl EntityFilter {
    /// `None` for an empty label list (unrestricted search), an equality
    /// filter for exactly one label, a disjunction otherwise. Duplicate
    /// labels are kept as given.
    pub fn from_labels(labels: &[String]) -> Option<Self> {
        match labels {
            [] => None,
            [single] => Some(Self::One(single.clone())),
            many => Some(Self::AnyOf(many.to_vec())),
        }
    }

    /// Exact, case-sensitive label match, mirroring the backend's equality
    /// semantics.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Self::One(wanted) => wanted == label,
            Self::AnyOf(wanted) => wanted.iter().any(|candidate| candidate == label),
        }
    }
}
