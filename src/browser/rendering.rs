//! View rendering for the record browser.
//!
//! The view is three stacked sections: a header (title or search field), the
//! table of visible columns by visible records, and a footer with the record
//! count, the column legend and a help line.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::model::{Model, SearchState};
use super::style::{CELL_SEPARATOR, ELLIPSIS};
use crate::key::{self, KeyMap};

/// Display width of `s`, ignoring ANSI escape sequences.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi_escapes::strip_str(s).as_str())
}

/// Pads or truncates `s` to exactly `width` cells.
///
/// Truncated text loses any ANSI styling and ends with an ellipsis.
pub(crate) fn fit_cell(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current <= width {
        return format!("{}{}", s, " ".repeat(width - current));
    }
    if width == 0 {
        return String::new();
    }

    let plain = strip_ansi_escapes::strip_str(s);
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for grapheme in plain.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > budget {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push_str(ELLIPSIS);
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

impl<T> Model<T> {
    pub(super) fn view_header(&self) -> String {
        match self.search_state {
            SearchState::Editing => {
                let prompt = self.styles.search_prompt.clone().render("Search: ");
                let query = self.engine.query();
                if query.is_empty() {
                    format!("{}{}", prompt, self.styles.placeholder.clone().render(&self.placeholder))
                } else {
                    format!("{}{}", prompt, query)
                }
            }
            _ => {
                let mut header = self.title.clone();
                if self.engine.is_filtering() {
                    header.push_str(&format!(" (filtered: {})", self.engine.len()));
                }
                self.styles.title.clone().render(&header)
            }
        }
    }

    /// Renders header row plus one line per visible record.
    pub(super) fn view_table(&self) -> String {
        let columns = self.engine.visible_columns();
        let records = self.engine.visible_records();

        let mut headers: Vec<String> = columns.iter().map(|c| c.label().to_string()).collect();
        let mut fixed: Vec<Option<usize>> = columns.iter().map(|c| c.width()).collect();
        if self.row_actions.is_some() {
            headers.push(String::new());
            fixed.push(None);
        }

        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| {
                let mut cells: Vec<String> = columns.iter().map(|c| c.render(record)).collect();
                if let Some(actions) = &self.row_actions {
                    cells.push(actions(record));
                }
                cells
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                fixed[i].unwrap_or_else(|| {
                    rows.iter()
                        .map(|row| display_width(&row[i]))
                        .chain(std::iter::once(display_width(header)))
                        .max()
                        .unwrap_or(0)
                        .min(self.max_cell_width)
                })
            })
            .collect();

        let join = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| fit_cell(cell, w))
                .collect::<Vec<_>>()
                .join(CELL_SEPARATOR)
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(format!("  {}", self.styles.header.clone().render(&join(headers.as_slice()))));

        if rows.is_empty() {
            lines.push(format!(
                "  {}",
                self.styles.no_items.clone().render(&self.empty_message)
            ));
            return lines.join("\n");
        }

        for (index, row) in rows.iter().enumerate() {
            let line = join(row.as_slice());
            if index == self.cursor {
                lines.push(format!("> {}", self.styles.selected_row.clone().render(&line)));
            } else {
                lines.push(format!("  {}", self.styles.row.clone().render(&line)));
            }
        }
        lines.join("\n")
    }

    /// Renders the record count, column legend and help line.
    pub(super) fn view_footer(&self) -> String {
        let shown = self.engine.len();
        let total = self.engine.total();
        let noun = if total == 1 {
            &self.item_singular
        } else {
            &self.item_plural
        };
        let status = if self.engine.is_filtering() {
            format!("{} of {} {}", shown, total, noun)
        } else {
            format!("{} {}", total, noun)
        };

        let legend = self
            .engine
            .columns()
            .iter()
            .take(9)
            .enumerate()
            .map(|(i, column)| {
                let mark = if self.engine.is_column_visible(column.id()) {
                    'x'
                } else {
                    ' '
                };
                format!("{}:[{}] {}", i + 1, mark, column.label())
            })
            .collect::<Vec<_>>()
            .join("  ");

        let help = match self.search_state {
            SearchState::Editing => key::short_help_line(&[
                &self.keymap.accept_search,
                &self.keymap.clear_search,
            ]),
            _ => key::short_help_line(&self.keymap.short_help()),
        };

        let mut footer = vec![self.styles.status_bar.clone().render(&status)];
        if !legend.is_empty() {
            footer.push(self.styles.status_bar.clone().render(&legend));
        }
        footer.push(self.styles.help.clone().render(&help));
        footer.join("\n")
    }

    pub(super) fn render_view(&self) -> String {
        [self.view_header(), self.view_table(), self.view_footer()].join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_cell_pads_short_text() {
        assert_eq!(fit_cell("ab", 4), "ab  ");
        assert_eq!(fit_cell("abcd", 4), "abcd");
    }

    #[test]
    fn test_fit_cell_truncates_with_ellipsis() {
        assert_eq!(fit_cell("Acme Corporation", 6), "Acme …");
        assert_eq!(fit_cell("abc", 1), "…");
        assert_eq!(fit_cell("abc", 0), "");
    }

    #[test]
    fn test_fit_cell_counts_wide_characters() {
        // Each CJK character takes two cells.
        assert_eq!(display_width("東京"), 4);
        assert_eq!(fit_cell("東京都", 5), "東京…");
    }

    #[test]
    fn test_display_width_ignores_ansi() {
        assert_eq!(display_width("\u{1b}[1mbold\u{1b}[0m"), 4);
    }
}
