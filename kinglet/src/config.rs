use std::path::Path;

use waxwing::SidebarConfig;
use waxwing::error::{Chainable, Result};

/// Read the book's sidebar config, falling back to defaults when the book
/// carries no config file.
pub fn discover(dir: &Path) -> Result<SidebarConfig> {
    let path = dir.join(crate::CONFIG_FILE);
    if !path.exists() {
        return Ok(SidebarConfig::default());
    }

    let raw = std::fs::read_to_string(&path)?;
    SidebarConfig::from_toml(&raw).chain_with(|| waxwing::error! {
        "failed to read sidebar config",
        "path" => path.display(),
    })
}
