//! Key bindings for the record browser.
//!
//! - **Cursor**: `↑/k` (up), `↓/j` (down), `g/home` (first), `G/end` (last)
//! - **Search**: `/` (start), `enter` (keep query), `esc` (clear query)
//! - **Columns**: `1`–`9` toggle the N-th column
//! - **Quit**: `q`

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for record navigation, search and column toggling.
#[derive(Debug, Clone)]
pub struct BrowserKeyMap {
    /// Move the cursor up one record.
    pub cursor_up: key::Binding,
    /// Move the cursor down one record.
    pub cursor_down: key::Binding,
    /// Jump to the first record.
    pub go_to_start: key::Binding,
    /// Jump to the last record.
    pub go_to_end: key::Binding,
    /// Start editing the search query.
    pub search: key::Binding,
    /// Keep the query and leave the search field.
    pub accept_search: key::Binding,
    /// Clear the query.
    pub clear_search: key::Binding,
    /// Toggle a column by its 1-based position.
    pub toggle_column: key::Binding,
    /// Quit.
    pub quit: key::Binding,
}

impl Default for BrowserKeyMap {
    fn default() -> Self {
        let digits = ('1'..='9').map(KeyCode::Char).collect();
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter, KeyCode::Tab])
                .with_help("enter", "apply search"),
            clear_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear search"),
            toggle_column: key::Binding::new(digits).with_help("1-9", "toggle column"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
        }
    }
}

impl BrowserKeyMap {
    /// Maps a key code to the 0-based column position it toggles.
    pub fn column_position(code: KeyCode) -> Option<usize> {
        match code {
            KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}

impl key::KeyMap for BrowserKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.search,
            &self.toggle_column,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.search, &self.accept_search, &self.clear_search],
            vec![&self.toggle_column, &self.quit],
        ]
    }
}
