//! Configuration model for a FRACTURA workspace.
//!
//! The configuration is a single JSON document with two required sections:
//! `symbolic_analysis` and `narrative_structures`. All shape validation
//! happens once at load time; downstream code works with plain typed fields
//! and never re-checks the JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file was missing or could not be read.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file was read but is not valid FRACTURA JSON.
    ///
    /// This covers both malformed JSON and a document missing one of the
    /// two required sections.
    #[error("Invalid config JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// The `symbolic_analysis` section of the configuration.
///
/// Both lists keep their source order; absent lists default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolicAnalysis {
    /// Core symbols, in canonical (insertion) order.
    #[serde(default)]
    pub symbols: Vec<String>,
    /// Aesthetic techniques; treated as symbolic content as well.
    #[serde(default)]
    pub aesthetic_techniques: Vec<String>,
}

/// The `narrative_structures` section of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeStructures {
    /// Mantras, in canonical (insertion) order.
    #[serde(default)]
    pub mantras: Vec<String>,
    /// Optional archetype description. Absence is not an error.
    #[serde(default)]
    pub archetype: Option<String>,
    /// Narrative techniques.
    #[serde(default)]
    pub techniques: Vec<String>,
}

/// The loaded FRACTURA configuration.
///
/// Both sections are required in the JSON document; their list fields are
/// optional and default to empty. The runner owns one instance for the
/// lifetime of an invocation and lends it to the extractors read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualConfig {
    pub symbolic_analysis: SymbolicAnalysis,
    pub narrative_structures: NarrativeStructures,
}

impl RitualConfig {
    /// Read and parse the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}
