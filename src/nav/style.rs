//! Styles and markers for the navigation sidebar.

use lipgloss_extras::prelude::*;

/// Marker before an expanded group.
pub const EXPANDED: &str = "▾";

/// Marker before a collapsed group.
pub const COLLAPSED: &str = "▸";

/// Marker before the active item.
pub const ACTIVE: &str = "›";

/// Styling for the sidebar view.
#[derive(Debug, Clone)]
pub struct SidebarStyles {
    /// Group header.
    pub group: Style,
    /// Group header under the cursor.
    pub selected_group: Style,
    /// Inactive item.
    pub item: Style,
    /// The active item.
    pub active_item: Style,
    /// Item badge.
    pub badge: Style,
    /// Help line.
    pub help: Style,
}

impl Default for SidebarStyles {
    fn default() -> Self {
        Self {
            group: Style::new().bold(true),
            selected_group: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            active_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#ECFD65",
                })
                .bold(true),
            badge: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            help: Style::new().foreground(AdaptiveColor {
                Light: "#9B9B9B",
                Dark: "#5C5C5C",
            }),
        }
    }
}
