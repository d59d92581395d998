//! Collapsible navigation sidebar component.

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

use super::catalog::Catalog;
use super::keys::SidebarKeyMap;
use super::path::MatchMode;
use super::resolver::Resolver;
use super::style::{SidebarStyles, ACTIVE, COLLAPSED, EXPANDED};
use super::tree::{NavGroup, NavItem};
use crate::config::NavConfig;
use crate::key::{self, KeyMap};

/// Asks a [`Sidebar`] to move to a new path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateMsg(pub String);

/// A sidebar of collapsible groups with the active item highlighted.
///
/// A sidebar is either bound to one fixed tree ([`Sidebar::new`]) or to a
/// [`Catalog`] ([`Sidebar::with_catalog`]), in which case the tree follows
/// the section of the current path. Switching section rebinds the resolver
/// and re-seeds expansion; moving within a section keeps whatever the user
/// opened or closed.
///
/// # Examples
///
/// ```
/// use bubbletea_browse::nav::{Catalog, Sidebar};
///
/// let mut sidebar = Sidebar::with_catalog(Catalog::builtin().clone(), "/hr/payroll");
/// assert!(sidebar.resolver().is_expanded("hr"));
///
/// sidebar.navigate("/hotel/rooms/12");
/// assert_eq!(sidebar.active().map(|i| i.title.as_str()), Some("Rooms"));
/// ```
#[derive(Debug, Clone)]
pub struct Sidebar {
    resolver: Resolver,
    catalog: Option<Catalog>,
    section: Option<String>,
    cursor: usize,
    keymap: SidebarKeyMap,
    styles: SidebarStyles,
}

impl Sidebar {
    /// Creates a sidebar over a fixed tree.
    pub fn new(groups: Vec<NavGroup>, path: impl AsRef<str>) -> Self {
        let mut sidebar = Self {
            resolver: Resolver::new(groups, path),
            catalog: None,
            section: None,
            cursor: 0,
            keymap: SidebarKeyMap::default(),
            styles: SidebarStyles::default(),
        };
        sidebar.reset_cursor();
        sidebar
    }

    /// Creates a sidebar whose tree is picked from `catalog` by path.
    pub fn with_catalog(catalog: Catalog, path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        let mode = MatchMode::default();
        let section = catalog.section_for(path, mode).map(|s| s.prefix.clone());
        let groups = catalog.tree_for(path, mode).to_vec();
        let mut sidebar = Self::new(groups, path);
        sidebar.catalog = Some(catalog);
        sidebar.section = section;
        sidebar
    }

    /// Switches the matching mode, rebinding from scratch.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        let path = self.resolver.path().to_string();
        self.resolver = self.resolver.with_mode(mode);
        self.section = None;
        if let Some(catalog) = &self.catalog {
            self.section = catalog.section_for(&path, mode).map(|s| s.prefix.clone());
            let groups = catalog.tree_for(&path, mode).to_vec();
            self.resolver.rebind(groups, &path);
        }
        self.reset_cursor();
        self
    }

    /// Applies the navigation options of a configuration.
    pub fn with_config(self, config: &NavConfig) -> Self {
        self.with_mode(config.match_mode)
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: SidebarKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: SidebarStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Moves to `path`.
    ///
    /// When a catalog selects a different tree for the new path the
    /// sidebar rebinds to it; otherwise only the active item moves.
    pub fn navigate(&mut self, path: impl AsRef<str>) {
        let path = path.as_ref();
        let mode = self.resolver.mode();
        if let Some(catalog) = &self.catalog {
            let section = catalog.section_for(path, mode).map(|s| s.prefix.clone());
            if section != self.section {
                tracing::debug!(
                    from = ?self.section,
                    to = ?section,
                    "navigation section changed, rebinding"
                );
                let groups = catalog.tree_for(path, mode).to_vec();
                self.resolver.rebind(groups, path);
                self.section = section;
                self.reset_cursor();
                return;
            }
        }
        self.resolver.navigate(path);
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The active item for the current path.
    pub fn active(&self) -> Option<&NavItem> {
        self.resolver.active()
    }

    /// Prefix of the catalog section in use, if any.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Index of the group under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The group under the cursor.
    pub fn selected_group(&self) -> Option<&NavGroup> {
        self.resolver.groups().get(self.cursor)
    }

    /// Expands or collapses the group under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_group().map(|g| g.id.clone()) {
            self.resolver.toggle_group(&id);
        }
    }

    fn reset_cursor(&mut self) {
        let active = self.resolver.active_group();
        self.cursor = active
            .and_then(|id| self.resolver.groups().iter().position(|g| g.id == id))
            .unwrap_or(0);
    }

    fn view_item(&self, item: &NavItem, active: bool) -> String {
        let mut line = if active {
            format!("  {} {}", ACTIVE, self.styles.active_item.clone().render(&item.title))
        } else {
            format!("    {}", self.styles.item.clone().render(&item.title))
        };
        if let Some(badge) = item.badge.as_deref().filter(|b| !b.trim().is_empty()) {
            line.push(' ');
            line.push_str(&self.styles.badge.clone().render(badge));
        }
        line
    }
}

impl key::KeyMap for Sidebar {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.keymap.full_help()
    }
}

impl BubbleTeaModel for Sidebar {
    /// A sidebar over the built-in catalog at the dashboard root.
    fn init() -> (Self, Option<Cmd>) {
        (Self::with_catalog(Catalog::builtin().clone(), "/dashboard"), None)
    }

    /// Handles cursor keys, group toggling and [`NavigateMsg`].
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(NavigateMsg(path)) = msg.downcast_ref::<NavigateMsg>() {
            self.navigate(path);
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.down.matches(key_msg) {
            if self.cursor + 1 < self.resolver.groups().len() {
                self.cursor += 1;
            }
        } else if self.keymap.toggle.matches(key_msg) {
            self.toggle_selected();
        } else if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        None
    }

    fn view(&self) -> String {
        let active = self.resolver.active();
        let mut lines = Vec::new();

        for (index, group) in self.resolver.groups().iter().enumerate() {
            let expanded = self.resolver.is_expanded(&group.id);
            let marker = if expanded { EXPANDED } else { COLLAPSED };
            let header = format!("{} {}", marker, group.title);
            if index == self.cursor {
                lines.push(format!("> {}", self.styles.selected_group.clone().render(&header)));
            } else {
                lines.push(format!("  {}", self.styles.group.clone().render(&header)));
            }

            if expanded {
                for item in &group.items {
                    let is_active = active.is_some_and(|a| std::ptr::eq(a, item));
                    lines.push(self.view_item(item, is_active));
                }
            }
        }

        lines.push(String::new());
        lines.push(
            self.styles
                .help
                .clone()
                .render(&key::short_help_line(&self.keymap.short_help())),
        );
        lines.join("\n")
    }
}
