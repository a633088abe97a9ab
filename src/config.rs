//! Workspace configuration for railgraph
//!
//! Reads `railgraph.toml` from the working directory (or the path in
//! `RAILGRAPH_CONFIG`) for defaults that command-line flags override.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use railgraph_core::error::Result;
use railgraph_core::format::OutputFormat;

pub const CONFIG_FILE: &str = "railgraph.toml";

/// Defaults loaded from `railgraph.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RailConfig {
    /// Default route list file
    #[serde(default)]
    pub graph: Option<PathBuf>,

    /// Default output format
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl RailConfig {
    /// Load the config for this invocation; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = match env::var_os("RAILGRAPH_CONFIG") {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(CONFIG_FILE),
        };
        Self::load_from(&path)
    }

    /// Load the config from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(RailConfig::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
