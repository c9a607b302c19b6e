use std::path::Path;

use waxwing::{Outline, SidebarConfig};
use waxwing::error::{Chainable, Result};

/// A discovered book: its sidebar config and chapter outline.
#[derive(Debug)]
pub struct Book {
    pub config: SidebarConfig,
    pub outline: Outline,
}

impl Book {
    pub fn discover(dir: &Path) -> Result<Book> {
        let config = crate::config::discover(dir)?;

        let summary = dir.join(crate::SUMMARY_FILE);
        let raw = std::fs::read_to_string(&summary).chain_with(|| waxwing::error! {
            "failed to read the book outline",
            "path" => summary.display(),
        })?;

        let outline = Outline::from_summary(&raw).chain_with(|| waxwing::error! {
            "malformed book outline",
            "path" => summary.display(),
        })?;

        Ok(Book { config, outline })
    }
}
