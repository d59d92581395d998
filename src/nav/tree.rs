//! Navigation tree types.

use serde::{Deserialize, Serialize};

use super::path::normalize_href;

/// One link in a navigation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Target path. Missing or blank hrefs never become active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Short annotation rendered after the title, e.g. a pending count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl NavItem {
    /// Creates an item linking to `href`.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: Some(href.into()),
            badge: None,
        }
    }

    /// Creates an item with no link. It is displayed but never active.
    pub fn label(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: None,
            badge: None,
        }
    }

    /// Attaches a badge.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// The normalized href, or `None` when it is missing or blank.
    pub fn normalized_href(&self) -> Option<&str> {
        normalize_href(self.href.as_deref())
    }
}

/// A titled, collapsible group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    /// Identifier used for expansion state.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavGroup {
    /// Creates a group.
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }
}
