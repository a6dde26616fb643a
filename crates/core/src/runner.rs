//! Step dispatch and the append-only run log.
//!
//! The runner owns the loaded configuration for the lifetime of an
//! invocation and lends it to the extractors read-only. Steps run strictly
//! sequentially and fail fast: the first error ends the run, and nothing is
//! retried.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::artifact::{Artifact, WriteError};
use crate::config::{ConfigError, RitualConfig};
use crate::extract;
use crate::glitch;
use crate::layout::{RitualLayout, CHANT_FILE, MANTRAS_FILE, SYMBOLS_FILE};

/// Error type for a ritual run.
#[derive(Debug, Error)]
pub enum RitualError {
    /// The configuration was missing, unreadable, or malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An artifact could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// The run log itself could not be appended to.
    #[error("Failed to append run log at {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for runner operations.
pub type RitualResult<T> = Result<T, RitualError>;

/// Which steps a single invocation should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Run the complete ritual: symbols, mantras, then chant.
    All,
    /// Write only the symbols artifact.
    Symbols,
    /// Write only the mantras artifact.
    Mantras,
    /// Run both extractors in memory but write only the chant artifact.
    Chant,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Symbols => "symbols",
            Mode::Mantras => "mantras",
            Mode::Chant => "chant",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only run log.
///
/// One line per event: RFC 3339 UTC timestamp, step name, `start` or `end`,
/// and on `end` events the outcome.
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one event line to the log, creating the file if needed.
    pub fn append(&self, step: &str, event: &str, outcome: Option<&str>) -> RitualResult<()> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let line = match outcome {
            Some(outcome) => format!("{timestamp} step={step} event={event} outcome={outcome}\n"),
            None => format!("{timestamp} step={step} event={event}\n"),
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| RitualError::Log { path: self.path.clone(), source })?;
        file.write_all(line.as_bytes())
            .map_err(|source| RitualError::Log { path: self.path.clone(), source })
    }
}

/// Summary of a completed run: the mode and the artifact paths written.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub written: Vec<PathBuf>,
}

/// Executes ritual steps against a workspace.
#[derive(Debug)]
pub struct Runner {
    config: RitualConfig,
    layout: RitualLayout,
    log: RunLog,
}

impl Runner {
    /// Load the configuration for `layout`, logging the attempt and its
    /// outcome. A config failure leaves the outputs directory untouched.
    pub fn load(layout: RitualLayout) -> RitualResult<Self> {
        let log = RunLog::new(layout.log_path.clone());
        log.append("config", "start", None)?;
        match RitualConfig::load(&layout.config_path) {
            Ok(config) => {
                log.append("config", "end", Some("success"))?;
                Ok(Self { config, layout, log })
            }
            Err(err) => {
                // The config error is the failure the caller needs to see;
                // a log append failure on this path must not mask it.
                let _ = log.append("config", "end", Some("error"));
                Err(err.into())
            }
        }
    }

    /// Execute the steps selected by `mode`, writing artifacts into the
    /// outputs directory and logging each step.
    ///
    /// Both extractions always run in memory: they are pure and cheap, and
    /// the chant needs both texts even when their artifacts are not written.
    pub fn run(&self, mode: Mode) -> RitualResult<RunReport> {
        let symbol_text = extract::extract_symbols(&self.config);
        let narrative_text = extract::extract_narratives(&self.config);

        let mut written = Vec::new();

        if matches!(mode, Mode::All | Mode::Symbols) {
            let artifact = Artifact::new(SYMBOLS_FILE, symbol_text.as_str());
            written.push(self.write_step("symbols", &artifact)?);
        }
        if matches!(mode, Mode::All | Mode::Mantras) {
            let artifact = Artifact::new(MANTRAS_FILE, narrative_text.as_str());
            written.push(self.write_step("mantras", &artifact)?);
        }
        if matches!(mode, Mode::All | Mode::Chant) {
            let chant = glitch::glitch_fusion(&symbol_text, &narrative_text);
            let artifact = Artifact::new(CHANT_FILE, chant);
            written.push(self.write_step("chant", &artifact)?);
        }

        Ok(RunReport { mode, written })
    }

    /// Write one artifact, bracketed by log events. The first failure ends
    /// the run.
    fn write_step(&self, step: &str, artifact: &Artifact) -> RitualResult<PathBuf> {
        self.log.append(step, "start", None)?;
        match artifact.write_into(&self.layout.outputs_dir) {
            Ok(path) => {
                self.log.append(step, "end", Some("success"))?;
                Ok(path)
            }
            Err(err) => {
                let _ = self.log.append(step, "end", Some("error"));
                Err(err.into())
            }
        }
    }
}
