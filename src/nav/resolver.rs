//! Active-item resolution and group expansion state.

use std::collections::HashMap;

use super::path::{normalize_path, path_matches, MatchMode};
use super::tree::{NavGroup, NavItem};

/// Resolves the active item of a navigation tree and tracks which groups
/// are expanded.
///
/// The resolver is bound to a tree and a current path. On binding it seeds
/// the expansion map: a group starts expanded when any of its items matches
/// the path. After that, expansion only changes through [`toggle_group`],
/// [`set_expanded`] or a full [`rebind`]; moving to another path with
/// [`navigate`] leaves it alone.
///
/// The active item is the matching item with the longest normalized href.
/// Ties go to the first one in group order.
///
/// [`toggle_group`]: Resolver::toggle_group
/// [`set_expanded`]: Resolver::set_expanded
/// [`rebind`]: Resolver::rebind
/// [`navigate`]: Resolver::navigate
///
/// # Examples
///
/// ```
/// use bubbletea_browse::nav::{NavGroup, NavItem, Resolver};
///
/// let tree = vec![NavGroup::new(
///     "hotel",
///     "Hotel",
///     vec![
///         NavItem::new("Overview", "/hotel"),
///         NavItem::new("Rooms", "/hotel/rooms"),
///     ],
/// )];
///
/// let resolver = Resolver::new(tree, "/hotel/rooms/12");
/// assert_eq!(resolver.active().map(|i| i.title.as_str()), Some("Rooms"));
/// assert!(resolver.is_expanded("hotel"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    groups: Vec<NavGroup>,
    path: String,
    mode: MatchMode,
    expanded: HashMap<String, bool>,
}

impl Resolver {
    /// Binds a tree to `path` using [`MatchMode::Prefix`].
    pub fn new(groups: Vec<NavGroup>, path: impl AsRef<str>) -> Self {
        let mut resolver = Self {
            groups,
            path: normalize_path(path.as_ref()).to_string(),
            mode: MatchMode::default(),
            expanded: HashMap::new(),
        };
        resolver.seed();
        resolver
    }

    /// Switches the matching mode and re-seeds expansion.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self.seed();
        self
    }

    /// The matching mode in use.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Replaces the tree and path, discarding all expansion state.
    pub fn rebind(&mut self, groups: Vec<NavGroup>, path: impl AsRef<str>) {
        self.groups = groups;
        self.path = normalize_path(path.as_ref()).to_string();
        self.seed();
    }

    /// Moves to `path` without touching expansion state.
    pub fn navigate(&mut self, path: impl AsRef<str>) {
        self.path = normalize_path(path.as_ref()).to_string();
    }

    /// The bound path, normalized.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The most specific item matching `path`, if any.
    pub fn resolve_active(&self, path: &str) -> Option<&NavItem> {
        self.resolve(normalize_path(path)).map(|(_, item)| item)
    }

    /// The active item for the bound path.
    pub fn active(&self) -> Option<&NavItem> {
        self.resolve(&self.path).map(|(_, item)| item)
    }

    /// Id of the group holding the active item for the bound path.
    pub fn active_group(&self) -> Option<&str> {
        self.resolve(&self.path)
            .map(|(group, _)| self.groups[group].id.as_str())
    }

    /// Flips group `id`. Unknown ids are ignored.
    pub fn toggle_group(&mut self, id: &str) {
        match self.expanded.get_mut(id) {
            Some(open) => *open = !*open,
            None => tracing::debug!(group = id, "ignoring toggle of unknown group"),
        }
    }

    /// Opens or closes group `id`. Unknown ids are ignored.
    pub fn set_expanded(&mut self, id: &str, expanded: bool) {
        match self.expanded.get_mut(id) {
            Some(open) => *open = expanded,
            None => tracing::debug!(group = id, "ignoring expansion of unknown group"),
        }
    }

    /// Whether group `id` is expanded. Unknown ids are not.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Ids of the expanded groups, in tree order, each listed once.
    pub fn expanded_groups(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for group in &self.groups {
            let id = group.id.as_str();
            if self.is_expanded(id) && !seen.contains(&id) {
                seen.push(id);
            }
        }
        seen
    }

    /// The bound tree.
    pub fn groups(&self) -> &[NavGroup] {
        &self.groups
    }

    /// Looks up a group by id. With duplicate ids the last one wins.
    pub fn group(&self, id: &str) -> Option<&NavGroup> {
        self.groups.iter().rev().find(|g| g.id == id)
    }

    fn resolve(&self, path: &str) -> Option<(usize, &NavItem)> {
        let mut best: Option<(usize, &NavItem, usize)> = None;
        for (index, group) in self.groups.iter().enumerate() {
            for item in &group.items {
                let Some(href) = item.normalized_href() else {
                    continue;
                };
                if !path_matches(path, href, self.mode) {
                    continue;
                }
                if best.map_or(true, |(_, _, len)| href.len() > len) {
                    best = Some((index, item, href.len()));
                }
            }
        }
        best.map(|(index, item, _)| (index, item))
    }

    fn group_matches(&self, group: &NavGroup) -> bool {
        group.items.iter().any(|item| {
            item.normalized_href()
                .is_some_and(|href| path_matches(&self.path, href, self.mode))
        })
    }

    fn seed(&mut self) {
        let seeded: HashMap<String, bool> = self
            .groups
            .iter()
            .map(|group| (group.id.clone(), self.group_matches(group)))
            .collect();
        self.expanded = seeded;
        tracing::debug!(
            path = %self.path,
            expanded = self.expanded.values().filter(|open| **open).count(),
            "seeded group expansion"
        );
    }
}
