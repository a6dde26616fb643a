use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use fractura_core::runner::Mode;

pub mod commands;

/// Resolve the workspace root argument to an absolute path.
///
/// An existing path canonicalizes; a path that does not exist yet is joined
/// onto the current working directory instead of failing, so the error
/// surfaces later with a clearer message (missing config, unwritable dir).
pub fn resolve_root(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;
    if path == Path::new(".") {
        Ok(cwd)
    } else {
        Ok(cwd.join(path))
    }
}

/// Parse the optional positional mode argument.
///
/// `ritual` is accepted as an alias for `all`.
pub fn parse_mode(mode: &str) -> Result<Mode> {
    match mode {
        "all" | "ritual" => Ok(Mode::All),
        "symbols" => Ok(Mode::Symbols),
        "mantras" => Ok(Mode::Mantras),
        "chant" => Ok(Mode::Chant),
        other => {
            Err(anyhow!("Unknown mode '{}'. Allowed: symbols, mantras, chant, all", other))
        }
    }
}
