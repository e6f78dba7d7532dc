//! Sidebar model and page navigation for docsite.
//!
//! This crate provides:
//! - [`SidebarLinkGroups`]: the ordered table of contents of a documentation set
//! - [`resolve_navigation`]: previous/next page lookup in reading order
//!
//! Reading order is the flattened sequence of every group's links, in group
//! order then link order. Crossing a group boundary is transparent: the last
//! link of one group is followed by the first link of the next non-empty group.
//!
//! # Quick Start
//!
//! ```
//! use docsite_nav::{Link, SidebarLinkGroup, SidebarLinkGroups, resolve_navigation};
//!
//! let groups = SidebarLinkGroups::from(vec![
//!     SidebarLinkGroup::new("Guide", vec![Link::new("/a", "A"), Link::new("/b", "B")]),
//!     SidebarLinkGroup::new("Ref", vec![Link::new("/c", "C")]),
//! ]);
//!
//! let neighbors = resolve_navigation(Some(&groups), "/b");
//! assert_eq!(neighbors.prev, Some(Link::new("/a", "A")));
//! assert_eq!(neighbors.next, Some(Link::new("/c", "C")));
//! ```

mod navigation;
mod sidebar;

pub use navigation::{PageNeighbors, resolve_navigation};
pub use sidebar::{DuplicateUrl, Link, LinkPosition, SidebarLinkGroup, SidebarLinkGroups};
