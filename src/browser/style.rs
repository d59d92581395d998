//! Styles for the record browser table.

use lipgloss_extras::prelude::*;

/// Ellipsis appended to truncated cells.
pub const ELLIPSIS: &str = "…";

/// Separator drawn between table cells.
pub const CELL_SEPARATOR: &str = "  ";

/// Styling for every part of the browser view.
#[derive(Debug, Clone)]
pub struct BrowserStyles {
    /// Table title.
    pub title: Style,
    /// `Search:` prompt while editing the query.
    pub search_prompt: Style,
    /// Placeholder text in an empty search field.
    pub placeholder: Style,
    /// Column header row.
    pub header: Style,
    /// The row under the cursor.
    pub selected_row: Style,
    /// Every other row.
    pub row: Style,
    /// Empty-state message.
    pub no_items: Style,
    /// Status line and column legend.
    pub status_bar: Style,
    /// Help line.
    pub help: Style,
}

impl Default for BrowserStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            placeholder: Style::new().foreground(subdued.clone()),
            header: Style::new().bold(true),
            selected_row: Style::new().foreground(AdaptiveColor {
                Light: "#EE6FF8",
                Dark: "#EE6FF8",
            }),
            row: Style::new(),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            status_bar: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            help: Style::new().foreground(subdued),
        }
    }
}
