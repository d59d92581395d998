//! Column definitions for the record browser.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

type Projection<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// One facet of a record: how to display it and, optionally, how to search it.
///
/// The `id` identifies the column for visibility toggling and must be unique
/// within a column set. The `label` is only used for display. The `render`
/// closure is never called while filtering; the optional `searchable`
/// projection is the only thing the search engine looks at.
///
/// # Examples
///
/// ```
/// use bubbletea_browse::browser::Column;
///
/// struct Guest {
///     name: String,
///     room: u32,
/// }
///
/// let name = Column::new("name", "Name", |g: &Guest| g.name.clone())
///     .searchable(|g: &Guest| g.name.clone());
/// let room = Column::new("room", "Room", |g: &Guest| g.room.to_string());
///
/// let guest = Guest { name: "Ada".into(), room: 101 };
/// assert_eq!(name.search_text(&guest).as_deref(), Some("Ada"));
/// assert_eq!(room.search_text(&guest), None);
/// assert_eq!(room.render(&guest), "101");
/// ```
pub struct Column<T> {
    id: String,
    label: String,
    width: Option<usize>,
    searchable: Option<Projection<T>>,
    render: Projection<T>,
}

impl<T> Column<T> {
    /// Creates a display-only column.
    pub fn new<F>(id: impl Into<String>, label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            label: label.into(),
            width: None,
            searchable: None,
            render: Arc::new(render),
        }
    }

    /// Adds a search projection to the column.
    pub fn searchable<F>(mut self, projection: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.searchable = Some(Arc::new(projection));
        self
    }

    /// Fixes the rendered width of the column in terminal cells.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// The column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The fixed width, if one was set.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Whether the column takes part in search.
    pub fn is_searchable(&self) -> bool {
        self.searchable.is_some()
    }

    /// Runs the search projection, if the column has one.
    pub fn search_text(&self, record: &T) -> Option<String> {
        self.searchable.as_ref().map(|project| project(record))
    }

    /// Renders the cell for `record`.
    pub fn render(&self, record: &T) -> String {
        (self.render)(record)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            width: self.width,
            searchable: self.searchable.clone(),
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("searchable", &self.is_searchable())
            .finish()
    }
}

/// Checks that no two columns share an id.
///
/// The engine tolerates duplicates (they share a single visibility entry),
/// so this is for callers who want to reject such definitions up front.
pub fn validate_columns<T>(columns: &[Column<T>]) -> Result<()> {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.id()) {
            return Err(Error::DuplicateColumn {
                id: column.id().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_columns_reports_first_duplicate() {
        let columns: Vec<Column<String>> = vec![
            Column::new("name", "Name", |s: &String| s.clone()),
            Column::new("status", "Status", |s: &String| s.clone()),
            Column::new("name", "Name again", |s: &String| s.clone()),
        ];
        match validate_columns(&columns) {
            Err(Error::DuplicateColumn { id }) => assert_eq!(id, "name"),
            other => panic!("expected duplicate column, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_columns_accepts_unique_ids() {
        let columns: Vec<Column<String>> = vec![
            Column::new("a", "A", |s: &String| s.clone()),
            Column::new("b", "B", |s: &String| s.clone()),
        ];
        assert!(validate_columns(&columns).is_ok());
        assert!(validate_columns::<String>(&[]).is_ok());
    }

    #[test]
    fn test_clone_shares_projections() {
        let column = Column::new("len", "Len", |s: &String| s.len().to_string())
            .searchable(|s: &String| s.to_uppercase());
        let copy = column.clone();
        let record = "abc".to_string();
        assert_eq!(copy.render(&record), "3");
        assert_eq!(copy.search_text(&record).as_deref(), Some("ABC"));
    }
}
