//! Navigation trees: active-link resolution, group expansion and a sidebar.
//!
//! A tree is a list of [`NavGroup`]s, each holding [`NavItem`]s with an
//! optional href. Given the current path, a [`Resolver`] picks the single
//! most specific active item (longest matching href) and seeds which groups
//! start expanded. Expansion is seeded once per binding and then belongs to
//! the user.
//!
//! Paths and hrefs are compared after [`normalize_path`]: surrounding
//! whitespace and trailing slashes are dropped, and an href that ends up
//! empty is treated as missing. Whether `/transport` counts as a prefix of
//! `/transportation` depends on the [`MatchMode`].

pub mod keys;
pub mod style;

mod catalog;
mod path;
mod resolver;
mod sidebar;
mod tree;


pub use catalog::{Catalog, Section};
pub use keys::SidebarKeyMap;
pub use path::{normalize_path, path_matches, MatchMode};
pub use resolver::Resolver;
pub use sidebar::{NavigateMsg, Sidebar};
pub use style::SidebarStyles;
pub use tree::{NavGroup, NavItem};
