//! The book's chapter tree, produced by the build step and immutable at run
//! time. The tree is built from a `SUMMARY.md`-style outline file and fed to
//! [`Sidebar::mount`](crate::sidebar::Sidebar::mount) once per page.

mod entry;
mod summary;

pub use entry::*;
