//! Layered run configuration.
//!
//! Sources, lowest priority first: built-in defaults, an optional TOML file,
//! then `GRAPHWALK_*` environment variables.
//!
//! ```toml
//! edges_path = "data/graph.txt"
//! vertex_count = 7
//! expected_edges = 9
//! log_level = "debug"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHWALK_";

/// Configuration for loading a graph from an edge-list file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Edge-list file to read.
    pub edges_path: Option<PathBuf>,
    /// Number of vertices.
    pub vertex_count: Option<usize>,
    /// Number of edges the file is expected to hold (informational).
    pub expected_edges: Option<usize>,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            edges_path: None,
            vertex_count: None,
            expected_edges: None,
            log_level: "info".to_string(),
        }
    }
}

impl WalkConfig {
    /// Builds the provider stack: defaults, then `file` if given, then env.
    #[must_use]
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the configuration from defaults, `file` and the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source is malformed.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::from_figment(&Self::figment(file))
    }

    /// Extracts the configuration from an arbitrary provider stack.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Returns the edge file and vertex count, both of which a run needs.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the first missing field.
    pub fn require_source(&self) -> Result<(&Path, usize)> {
        let path = self
            .edges_path
            .as_deref()
            .ok_or_else(|| Error::Config("edges_path is not set".to_string()))?;
        let vertex_count = self
            .vertex_count
            .ok_or_else(|| Error::Config("vertex_count is not set".to_string()))?;
        Ok((path, vertex_count))
    }
}
