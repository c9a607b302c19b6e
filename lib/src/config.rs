use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Sidebar behavior configured by the book. The defaults reproduce the
/// generated artifact: directory URLs alias `index.html`, the scroll offset
/// lives under `sidebar-scroll`, and every section starts expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SidebarConfig {
    /// The document a trailing-slash URL is treated as.
    pub default_document: String,
    /// Session storage key for the persisted scroll offset.
    pub scroll_key: String,
    pub fold: Fold,
}

/// Initial collapse behavior for sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fold {
    /// When disabled (the default), every section starts expanded.
    pub enable: bool,
    /// With folding enabled, items nested shallower than this start expanded.
    /// Ancestors of the active entry are expanded regardless.
    pub level: usize,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        SidebarConfig {
            default_document: "index.html".into(),
            scroll_key: crate::sidebar::SCROLL_KEY.into(),
            fold: Fold::default(),
        }
    }
}

impl SidebarConfig {
    /// Read a config from TOML; missing keys keep their defaults.
    pub fn from_toml(input: &str) -> Result<SidebarConfig> {
        Ok(toml::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SidebarConfig::from_toml("").unwrap();
        assert_eq!(config, SidebarConfig::default());
        assert_eq!(config.default_document, "index.html");
        assert!(!config.fold.enable);
    }

    #[test]
    fn partial_overrides() {
        let config = SidebarConfig::from_toml(
            "default-document = 'readme.html'\n\n[fold]\nenable = true\nlevel = 1\n"
        ).unwrap();

        assert_eq!(config.default_document, "readme.html");
        assert_eq!(config.scroll_key, "sidebar-scroll");
        assert!(config.fold.enable);
        assert_eq!(config.fold.level, 1);
    }
}
