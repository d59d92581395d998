//! The column-projected search engine.
//!
//! `SearchEngine<T>` owns a record collection, a column set, a visibility
//! map and a query. The filtered view is derived from
//! `(records, columns, query)` and memoized as a list of record indices; any
//! change to one of the three inputs re-derives it, so the cached view is
//! always identical to a fresh computation.

use super::column::Column;
use super::matcher::{normalize_query, QueryMatcher};
use super::visibility::VisibilityMap;

/// Search, filter and column-visibility state over records of type `T`.
///
/// # Examples
///
/// ```
/// use bubbletea_browse::browser::{Column, SearchEngine};
///
/// #[derive(Debug, PartialEq)]
/// struct Company {
///     id: u32,
///     name: &'static str,
/// }
///
/// let records = vec![
///     Company { id: 1, name: "Acme Corp" },
///     Company { id: 2, name: "Skyline" },
/// ];
/// let columns = vec![
///     Column::new("id", "ID", |c: &Company| c.id.to_string()),
///     Column::new("name", "Name", |c: &Company| c.name.to_string())
///         .searchable(|c: &Company| c.name.to_string()),
/// ];
///
/// let mut engine = SearchEngine::new(records, columns);
/// engine.set_query("acme");
/// let visible = engine.visible_records();
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, 1);
///
/// engine.toggle_column("id");
/// let labels: Vec<_> = engine.visible_columns().iter().map(|c| c.label()).collect();
/// assert_eq!(labels, ["Name"]);
/// ```
#[derive(Debug, Clone)]
pub struct SearchEngine<T> {
    records: Vec<T>,
    columns: Vec<Column<T>>,
    visibility: VisibilityMap,
    query: String,
    normalized: String,
    matcher: QueryMatcher,
    filtered: Vec<usize>,
}

impl<T> SearchEngine<T> {
    /// Creates an engine with every column visible and an empty query.
    ///
    /// Duplicate column ids are tolerated; they share one visibility entry.
    /// Use [`validate_columns`](super::validate_columns) to reject them.
    pub fn new(records: Vec<T>, columns: Vec<Column<T>>) -> Self {
        warn_on_duplicate_ids(&columns);
        let visibility = VisibilityMap::all_visible(&columns);
        let mut engine = Self {
            records,
            columns,
            visibility,
            query: String::new(),
            normalized: String::new(),
            matcher: QueryMatcher::default(),
            filtered: Vec::new(),
        };
        engine.refilter();
        engine
    }

    /// Selects the matching strategy.
    pub fn with_matcher(mut self, matcher: QueryMatcher) -> Self {
        self.set_matcher(matcher);
        self
    }

    /// Changes the matching strategy and re-derives the view.
    pub fn set_matcher(&mut self, matcher: QueryMatcher) {
        self.matcher = matcher;
        self.refilter();
    }

    /// The active matching strategy.
    pub fn matcher(&self) -> QueryMatcher {
        self.matcher
    }

    /// Replaces the query. Any string is accepted.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        let normalized = normalize_query(&self.query);
        if normalized != self.normalized {
            self.normalized = normalized;
            self.refilter();
        }
    }

    /// The query exactly as last set.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The trimmed, lower-cased query used for matching.
    pub fn normalized_query(&self) -> &str {
        &self.normalized
    }

    /// Whether a non-empty normalized query is in effect.
    pub fn is_filtering(&self) -> bool {
        !self.normalized.is_empty()
    }

    /// Flips the visibility of column `id`. Unknown ids are ignored.
    pub fn toggle_column(&mut self, id: &str) {
        match self.visibility.toggle(id) {
            Some(visible) => tracing::debug!(column = id, visible, "toggled column"),
            None => tracing::debug!(column = id, "ignoring toggle for unknown column"),
        }
    }

    /// Shows or hides column `id`. Unknown ids are ignored.
    pub fn set_column_visible(&mut self, id: &str, visible: bool) {
        if !self.visibility.set(id, visible) {
            tracing::debug!(column = id, "ignoring visibility change for unknown column");
        }
    }

    /// Whether column `id` is currently shown. Unknown ids are not.
    pub fn is_column_visible(&self, id: &str) -> bool {
        self.visibility.is_visible(id)
    }

    /// The visibility map.
    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    /// Records that pass the current query, in source order.
    ///
    /// With an empty or whitespace-only query every record is returned.
    /// Otherwise a record is kept when any column with a search projection
    /// matches; hidden columns still count.
    pub fn visible_records(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.records[i]).collect()
    }

    /// Source indices of [`visible_records`](Self::visible_records).
    pub fn visible_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// The `n`-th visible record.
    pub fn visible_record(&self, n: usize) -> Option<&T> {
        self.filtered.get(n).map(|&i| &self.records[i])
    }

    /// Visible columns in definition order.
    pub fn visible_columns(&self) -> Vec<&Column<T>> {
        self.columns
            .iter()
            .filter(|column| self.visibility.is_visible(column.id()))
            .collect()
    }

    /// All records, unfiltered.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// All columns, including hidden ones.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Replaces the record collection, keeping query and visibility.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.refilter();
    }

    /// Replaces the column set.
    ///
    /// Ids present in both sets keep their visibility; new ids start visible.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        warn_on_duplicate_ids(&columns);
        self.visibility = self.visibility.reseed(&columns);
        self.columns = columns;
        self.refilter();
    }

    /// Number of visible records.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Whether no record is visible.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Number of records before filtering.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    fn refilter(&mut self) {
        if self.normalized.is_empty() {
            self.filtered = (0..self.records.len()).collect();
            return;
        }

        let matcher = self.matcher.prepare();
        let query = self.normalized.as_str();
        let searchable: Vec<&Column<T>> =
            self.columns.iter().filter(|c| c.is_searchable()).collect();

        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                searchable.iter().any(|column| {
                    column
                        .search_text(record)
                        .is_some_and(|text| matcher.is_match(&text, query))
                })
            })
            .map(|(index, _)| index)
            .collect();

        tracing::trace!(
            query,
            matched = self.filtered.len(),
            total = self.records.len(),
            "filtered records"
        );
    }
}

fn warn_on_duplicate_ids<T>(columns: &[Column<T>]) {
    if let Err(err) = super::column::validate_columns(columns) {
        tracing::warn!(%err, "column ids are not unique; duplicates share visibility");
    }
}
