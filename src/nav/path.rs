//! Path normalization and prefix matching.

use serde::{Deserialize, Serialize};

/// How an item's href is tested against the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Plain string prefix. `/transport` matches `/transportation`.
    #[default]
    Prefix,
    /// The prefix must end at a `/` or at the end of the path.
    /// `/transport` matches `/transport/fleet` but not `/transportation`.
    Segment,
}

/// Trims surrounding whitespace and strips trailing slashes.
///
/// A path that normalizes to the empty string counts as absent.
///
/// ```
/// use bubbletea_browse::nav::normalize_path;
///
/// assert_eq!(normalize_path("  /hotel/rooms/ "), "/hotel/rooms");
/// assert_eq!(normalize_path("   "), "");
/// ```
pub fn normalize_path(path: &str) -> &str {
    path.trim().trim_end_matches('/')
}

/// Normalizes an optional href, mapping empty results to `None`.
pub(crate) fn normalize_href(href: Option<&str>) -> Option<&str> {
    href.map(normalize_path).filter(|h| !h.is_empty())
}

/// Reports whether `href` is a prefix of `path` under `mode`.
///
/// Both arguments must already be normalized. An empty href never matches.
pub fn path_matches(path: &str, href: &str, mode: MatchMode) -> bool {
    if href.is_empty() || !path.starts_with(href) {
        return false;
    }
    match mode {
        MatchMode::Prefix => true,
        MatchMode::Segment => {
            path.len() == href.len() || path[href.len()..].starts_with('/')
        }
    }
}
