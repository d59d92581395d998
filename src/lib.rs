#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-browse/")]

//! # bubbletea-browse
//!
//! Searchable record tables and path-aware navigation sidebars for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! ## Overview
//!
//! The crate has two halves, each built as a pure engine plus a component
//! that follows the Elm Architecture (`init()`, `update()`, `view()`):
//!
//! - [`browser`]: a generic record browser. [`browser::SearchEngine`] filters
//!   any `Vec<T>` through caller-supplied column projections and tracks
//!   which columns are shown; [`browser::Model`] renders it as a table with a
//!   live search field and column toggles.
//! - [`nav`]: a navigation tree resolver. [`nav::Resolver`] finds the single
//!   most specific active link for a path and seeds which groups start
//!   expanded; [`nav::Sidebar`] renders the tree and lets the user expand
//!   and collapse groups.
//!
//! Both engines are synchronous and never fail. Unknown column or group ids
//! are ignored, and "nothing matches" is an ordinary result.
//!
//! ## Record browser
//!
//! ```rust
//! use bubbletea_browse::browser::{Column, SearchEngine};
//!
//! struct Guest {
//!     name: String,
//!     room: u32,
//! }
//!
//! let guests = vec![
//!     Guest { name: "Amina Rahman".into(), room: 101 },
//!     Guest { name: "Tomas Berg".into(), room: 204 },
//! ];
//! let columns = vec![
//!     Column::new("name", "Name", |g: &Guest| g.name.clone())
//!         .searchable(|g: &Guest| g.name.clone()),
//!     Column::new("room", "Room", |g: &Guest| g.room.to_string()),
//! ];
//!
//! let mut engine = SearchEngine::new(guests, columns);
//! engine.set_query("BERG");
//! assert_eq!(engine.visible_records()[0].room, 204);
//!
//! // Hiding a column only changes what is shown, not what is searched.
//! engine.toggle_column("name");
//! assert_eq!(engine.visible_records().len(), 1);
//! assert_eq!(engine.visible_columns().len(), 1);
//! ```
//!
//! ## Navigation
//!
//! ```rust
//! use bubbletea_browse::nav::{NavGroup, NavItem, Resolver};
//!
//! let tree = vec![NavGroup::new(
//!     "hotel",
//!     "Hotel",
//!     vec![
//!         NavItem::new("Overview", "/hotel"),
//!         NavItem::new("Rooms", "/hotel/rooms"),
//!     ],
//! )];
//!
//! let resolver = Resolver::new(tree, "/hotel/rooms/101");
//! let active = resolver.active().map(|item| item.title.as_str());
//! assert_eq!(active, Some("Rooms"));
//! ```
//!
//! ## Configuration
//!
//! Component defaults can be read from TOML with [`Config`]:
//!
//! ```rust
//! use bubbletea_browse::Config;
//! use bubbletea_browse::nav::MatchMode;
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     [browser]
//!     title = "Guests"
//!
//!     [nav]
//!     match_mode = "segment"
//!     "#,
//! )?;
//! assert_eq!(config.nav.match_mode, MatchMode::Segment);
//! # Ok::<(), bubbletea_browse::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events and installs
//! no subscriber. Ignored ids and expansion re-seeding are logged at
//! `debug`, per-query filter results at `trace`.

pub mod browser;
pub mod config;
pub mod error;
pub mod key;
pub mod nav;

use bubbletea_rs::Cmd;

/// Components that take keyboard focus.
///
/// For the record browser, focus means the search field is open and keys
/// edit the query instead of moving the cursor.
///
/// ```rust
/// use bubbletea_browse::prelude::*;
///
/// fn toggle_focus<C: Component>(component: &mut C) {
///     if component.focused() {
///         component.blur();
///     } else {
///         let _ = component.focus();
///     }
/// }
///
/// let mut table: Browser<String> = Browser::new(Vec::new(), Vec::new());
/// toggle_focus(&mut table);
/// assert!(table.focused());
/// toggle_focus(&mut table);
/// assert!(!table.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away from the component.
    fn blur(&mut self);

    /// Whether the component has focus.
    fn focused(&self) -> bool;
}

pub use config::Config;
pub use error::{Error, Result};

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::browser::{
        Column, Model as Browser, QueryMatcher, SearchEngine, SearchState,
    };
    pub use crate::config::{BrowserConfig, Config, NavConfig};
    pub use crate::error::{Error, Result};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::nav::{Catalog, MatchMode, NavGroup, NavItem, Resolver, Sidebar};
    pub use crate::Component;
}
