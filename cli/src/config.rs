//! Configuration file support.
//!
//! Loads optional `vseprostavby.toml` from the working directory. Command
//! line flags override anything set here.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "vseprostavby.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where `render` writes the document
    pub output: PathBuf,
    /// Inline the mobile menu script
    pub inline_script: bool,
    /// Pin the footer year (reproducible builds)
    pub year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist/index.html"),
            inline_script: true,
            year: None,
        }
    }
}

impl SiteConfig {
    /// Load `vseprostavby.toml` from `root`.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
