//! The `Model` struct and its non-interactive API.

use std::sync::Arc;

use super::column::Column;
use super::engine::SearchEngine;
use super::keys::BrowserKeyMap;
use super::matcher::QueryMatcher;
use super::style::BrowserStyles;
use crate::config::BrowserConfig;

/// Renders the trailing actions cell of a row.
pub type RowActions<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Where the search field stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    /// No query in effect.
    #[default]
    Idle,
    /// The user is typing a query; results update on every key.
    Editing,
    /// A query was accepted and is filtering the table.
    Applied,
}

/// A searchable, column-toggleable record table.
///
/// The model wraps a [`SearchEngine`] and adds what an interactive table
/// needs on top of it: a cursor over the visible records, a search field,
/// an optional row-actions column, key bindings and styles.
///
/// # Examples
///
/// ```
/// use bubbletea_browse::browser::{Column, Model};
///
/// #[derive(Debug, PartialEq)]
/// struct Room {
///     number: u32,
///     status: String,
/// }
///
/// let rooms = vec![
///     Room { number: 101, status: "Clean".into() },
///     Room { number: 102, status: "Dirty".into() },
/// ];
/// let columns = vec![
///     Column::new("room", "Room", |r: &Room| r.number.to_string())
///         .searchable(|r: &Room| r.number.to_string()),
///     Column::new("status", "Status", |r: &Room| r.status.clone())
///         .searchable(|r: &Room| r.status.clone()),
/// ];
///
/// let mut table = Model::new(rooms, columns).with_title("Rooms");
/// table.set_query("dirty");
/// assert_eq!(table.selected_record().map(|r| r.number), Some(102));
/// ```
pub struct Model<T> {
    pub(super) engine: SearchEngine<T>,
    pub(super) title: String,
    pub(super) placeholder: String,
    pub(super) empty_message: String,
    pub(super) item_singular: String,
    pub(super) item_plural: String,
    pub(super) row_actions: Option<RowActions<T>>,
    pub(super) search_state: SearchState,
    pub(super) cursor: usize,
    pub(super) keymap: BrowserKeyMap,
    pub(super) styles: BrowserStyles,
    pub(super) max_cell_width: usize,
}

impl<T> Model<T> {
    /// Creates a table over `records` with every column visible.
    pub fn new(records: Vec<T>, columns: Vec<Column<T>>) -> Self {
        let defaults = BrowserConfig::default();
        Self {
            engine: SearchEngine::new(records, columns),
            title: defaults.title,
            placeholder: defaults.placeholder,
            empty_message: defaults.empty_message,
            item_singular: defaults.item_name,
            item_plural: defaults.item_name_plural,
            row_actions: None,
            search_state: SearchState::Idle,
            cursor: 0,
            keymap: BrowserKeyMap::default(),
            styles: BrowserStyles::default(),
            max_cell_width: 32,
        }
    }

    /// Applies titles, messages and the matcher from a configuration.
    pub fn with_config(mut self, config: &BrowserConfig) -> Self {
        self.title = config.title.clone();
        self.placeholder = config.placeholder.clone();
        self.empty_message = config.empty_message.clone();
        self.item_singular = config.item_name.clone();
        self.item_plural = config.item_name_plural.clone();
        self.engine.set_matcher(config.matcher);
        self.clamp_cursor();
        self
    }

    /// Sets the table title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the text shown in an empty search field.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the row shown when nothing matches.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Selects the query matching strategy.
    pub fn with_matcher(mut self, matcher: QueryMatcher) -> Self {
        self.engine.set_matcher(matcher);
        self.clamp_cursor();
        self
    }

    /// Adds a trailing, always-visible actions cell to every row.
    pub fn with_row_actions<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.row_actions = Some(Arc::new(render));
        self
    }

    /// Caps the automatic width of a column. Fixed column widths win.
    pub fn with_max_cell_width(mut self, width: usize) -> Self {
        self.max_cell_width = width.max(1);
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: BrowserKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: BrowserStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the nouns used in the status line.
    pub fn set_status_bar_item_name(&mut self, singular: &str, plural: &str) {
        self.item_singular = singular.to_string();
        self.item_plural = plural.to_string();
    }

    /// The underlying search engine.
    pub fn engine(&self) -> &SearchEngine<T> {
        &self.engine
    }

    /// Replaces the query, keeping the cursor on a visible record.
    ///
    /// The cursor returns to the first record only when the normalized
    /// query changes; whitespace-only edits keep the selection.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let previous = self.engine.normalized_query().to_string();
        self.engine.set_query(query);
        if self.search_state != SearchState::Editing {
            self.search_state = if self.engine.is_filtering() {
                SearchState::Applied
            } else {
                SearchState::Idle
            };
        }
        if self.engine.normalized_query() != previous {
            self.cursor = 0;
        } else {
            self.clamp_cursor();
        }
    }

    /// Clears the query and leaves the search field.
    pub fn clear_search(&mut self) {
        self.engine.set_query("");
        self.search_state = SearchState::Idle;
        self.cursor = 0;
    }

    /// Flips the visibility of column `id`. Unknown ids are ignored.
    pub fn toggle_column(&mut self, id: &str) {
        self.engine.toggle_column(id);
    }

    /// Shows or hides column `id`. Unknown ids are ignored.
    pub fn set_column_visible(&mut self, id: &str, visible: bool) {
        self.engine.set_column_visible(id, visible);
    }

    /// Replaces the records, keeping query and column visibility.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.engine.set_records(records);
        self.clamp_cursor();
    }

    /// Records passing the current query.
    pub fn visible_records(&self) -> Vec<&T> {
        self.engine.visible_records()
    }

    /// Columns currently shown, in definition order.
    pub fn visible_columns(&self) -> Vec<&Column<T>> {
        self.engine.visible_columns()
    }

    /// The record under the cursor.
    pub fn selected_record(&self) -> Option<&T> {
        self.engine.visible_record(self.cursor)
    }

    /// Cursor position within the visible records.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current search field state.
    pub fn search_state(&self) -> SearchState {
        self.search_state
    }

    /// Number of visible records.
    pub fn len(&self) -> usize {
        self.engine.len()
    }

    /// Whether no record is visible.
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.engine.len().saturating_sub(1));
    }
}
