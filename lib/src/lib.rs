#![doc = svgbobdoc::transform!(
//! A toolkit for building a book's navigation sidebar.
//!
//! # Overview
//!
//! Waxwing models the table-of-contents sidebar of a multi-page book: the
//! chapter outline is fixed at build time, while the highlighted entry, the
//! expanded sections, and the scroll position are derived again on every
//! page load.
//!
//! ```svgbob
//!  +------------+  build   +---------+  mount    +----------+
//!  | summary.md | -------> | Outline | --------> | Sidebar  |
//!  +------------+  (once)  +---------+ (per page)+----+-----+
//!                                                     |
//!                  +----------------+-----------------+
//!                  |                |                 |
//!                  v                v                 v
//!             +--------+     +-----------+     +-------------+
//!             | markup |     | active +  |     | scroll via  |
//!             | string |     | expanded  |     | a `Session` |
//!             +--------+     +-----------+     +-------------+
//! ```
//!
//! In words:
//!
//!   * An [`Outline`] is the ordered chapter tree, parsed once from a
//!     `SUMMARY.md`-style file by the build step and shared verbatim by
//!     every page of the book.
//!
//!   * A [`Sidebar`](sidebar::Sidebar) is the outline as seen from one page:
//!     links rebased against the page's path back to the book root, the
//!     entry for the current location marked active, its ancestor sections
//!     marked expanded, and toggle state for collapsible sections.
//!
//!   * The only state that survives navigation is a single scroll offset,
//!     stored through the [`Session`](sidebar::Session) key-value interface
//!     and consumed on the next mount.
//!
//! Everything at the page level degrades silently: a location that matches
//! no entry, an unknown toggle id, or a missing stored offset simply leaves
//! state as it is. The sidebar is navigation, not content.
)]

#[macro_use]
pub mod error;
pub mod util;
pub mod config;
pub mod url;
pub mod outline;
pub mod sidebar;
pub mod render;

pub use config::{Fold, SidebarConfig};
pub use outline::Outline;
pub use sidebar::{PageContext, Scroll, Session, Sidebar};
