//! Query matching strategies.
//!
//! `Substring` is the default: a column matches when its lower-cased search
//! text contains the normalized query. `Fuzzy` swaps in skim-style subsequence matching for
//! hosts that want more forgiving search; the OR-across-columns rule is the
//! same for both.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// How a normalized query is tested against one column's search text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMatcher {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Case-insensitive fuzzy subsequence match.
    Fuzzy,
}

/// Trims and lower-cases a raw query. An empty result means "no filtering".
///
/// ```
/// use bubbletea_browse::browser::normalize_query;
///
/// assert_eq!(normalize_query("  ACME Corp "), "acme corp");
/// assert_eq!(normalize_query(" \t "), "");
/// ```
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl QueryMatcher {
    /// Builds a reusable matcher for one filtering pass.
    pub(crate) fn prepare(self) -> PreparedMatcher {
        match self {
            QueryMatcher::Substring => PreparedMatcher::Substring,
            QueryMatcher::Fuzzy => PreparedMatcher::Fuzzy(Box::new(SkimMatcherV2::default())),
        }
    }
}

pub(crate) enum PreparedMatcher {
    Substring,
    Fuzzy(Box<SkimMatcherV2>),
}

impl PreparedMatcher {
    /// `query` must already be normalized.
    pub(crate) fn is_match(&self, haystack: &str, query: &str) -> bool {
        let haystack = haystack.to_lowercase();
        match self {
            PreparedMatcher::Substring => haystack.contains(query),
            PreparedMatcher::Fuzzy(matcher) => matcher.fuzzy_match(&haystack, query).is_some(),
        }
    }
}
