//! Generic record browser: column-projected search plus a table component.
//!
//! The module is split in two layers:
//!
//! - [`SearchEngine<T>`] is the pure core. It owns records of any type `T`,
//!   a set of [`Column<T>`] definitions, a [`VisibilityMap`] and a query,
//!   and derives the visible records and visible columns from them.
//! - [`Model<T>`] wraps an engine as a `bubbletea-rs` component with a
//!   search field, a cursor, an optional row-actions column and a rendered
//!   table view.
//!
//! ### Search rules
//! - The query is trimmed and lower-cased before use; an empty result shows
//!   every record in source order.
//! - A record matches when **any** column with a search projection contains
//!   the query (case-insensitive). Columns without a projection never take
//!   part, and hiding a column does not remove it from search.
//!
//! ### Column visibility
//! Every column starts visible. Toggling flips one entry; unknown ids are
//! ignored rather than reported, since they come from stale UI state.

pub mod keys;
pub mod style;

mod column;
mod engine;
mod matcher;
mod model;
mod rendering;
mod visibility;

#[cfg(test)]
mod tests;

pub use column::{validate_columns, Column};
pub use engine::SearchEngine;
pub use keys::BrowserKeyMap;
pub use matcher::{normalize_query, QueryMatcher};
pub use model::{Model, RowActions, SearchState};
pub use style::BrowserStyles;
pub use visibility::VisibilityMap;

use crate::key::{self, KeyMap};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;

impl<T> key::KeyMap for Model<T> {
    fn short_help(&self) -> Vec<&key::Binding> {
        match self.search_state {
            SearchState::Editing => vec![&self.keymap.accept_search, &self.keymap.clear_search],
            _ => self.keymap.short_help(),
        }
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.keymap.full_help()
    }
}

impl<T> Component for Model<T> {
    /// Opens the search field.
    fn focus(&mut self) -> Option<Cmd> {
        self.search_state = SearchState::Editing;
        None
    }

    /// Closes the search field, keeping whatever query was typed.
    fn blur(&mut self) {
        if self.search_state == SearchState::Editing {
            self.search_state = if self.engine.is_filtering() {
                SearchState::Applied
            } else {
                SearchState::Idle
            };
        }
    }

    fn focused(&self) -> bool {
        self.search_state == SearchState::Editing
    }
}

impl<T> Model<T> {
    fn update_search(&mut self, key_msg: &KeyMsg) {
        if self.keymap.clear_search.matches(key_msg) {
            self.clear_search();
        } else if self.keymap.accept_search.matches(key_msg) {
            self.blur();
        } else {
            match key_msg.key {
                KeyCode::Char(c) => {
                    let mut query = self.engine.query().to_string();
                    query.push(c);
                    self.set_query(query);
                }
                KeyCode::Backspace => {
                    let mut query = self.engine.query().to_string();
                    query.pop();
                    self.set_query(query);
                }
                _ => {}
            }
        }
    }

    fn toggle_column_at(&mut self, position: usize) {
        let id = match self.engine.columns().get(position) {
            Some(column) => column.id().to_string(),
            None => return,
        };
        self.engine.toggle_column(&id);
    }
}

impl<T: Send + Sync + 'static> BubbleTeaModel for Model<T> {
    /// An empty table with no columns.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new(), Vec::new()), None)
    }

    /// Handles key input.
    ///
    /// While the search field is open, characters and backspace edit the
    /// query and the table refilters on every key; `enter` keeps the query
    /// and `esc` clears it. Otherwise the cursor keys move through the
    /// visible records, `/` opens the search field, `1`–`9` toggle columns
    /// by position, `esc` clears an applied query and `q` quits.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.search_state == SearchState::Editing {
            self.update_search(key_msg);
            return None;
        }

        if self.keymap.cursor_up.matches(key_msg) {
            self.cursor = self.cursor.saturating_sub(1);
        } else if self.keymap.cursor_down.matches(key_msg) {
            if self.cursor + 1 < self.len() {
                self.cursor += 1;
            }
        } else if self.keymap.go_to_start.matches(key_msg) {
            self.cursor = 0;
        } else if self.keymap.go_to_end.matches(key_msg) {
            self.cursor = self.len().saturating_sub(1);
        } else if self.keymap.search.matches(key_msg) {
            return self.focus();
        } else if self.keymap.clear_search.matches(key_msg) {
            self.clear_search();
        } else if self.keymap.toggle_column.matches(key_msg) {
            if let Some(position) = BrowserKeyMap::column_position(key_msg.key) {
                self.toggle_column_at(position);
            }
        } else if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        None
    }

    fn view(&self) -> String {
        self.render_view()
    }
}
