use std::path::{Path, PathBuf};

/// File name of the symbols artifact.
pub const SYMBOLS_FILE: &str = "symboles_extraits.txt";
/// File name of the mantras artifact.
pub const MANTRAS_FILE: &str = "mantras_extraits.txt";
/// File name of the glitch-chant artifact.
pub const CHANT_FILE: &str = "chant_glitch_fusion.txt";

/// Default file name of the configuration document.
pub const CONFIG_FILE: &str = "fractura.json";
/// File name of the append-only run log.
pub const LOG_FILE: &str = "fractura.log";

/// Logical layout of a FRACTURA workspace on disk.
///
/// This is derived from a chosen root path. It does *not* perform any IO
/// itself. The runner and other frontends are responsible for actually
/// creating directories and files based on this layout.
#[derive(Debug, Clone)]
pub struct RitualLayout {
    /// Root directory of the workspace.
    pub root: PathBuf,
    /// Path to the configuration document (JSON).
    pub config_path: PathBuf,
    /// Directory that receives the generated artifacts.
    pub outputs_dir: PathBuf,
    /// Path of the symbols artifact.
    pub symbols_path: PathBuf,
    /// Path of the mantras artifact.
    pub mantras_path: PathBuf,
    /// Path of the glitch-chant artifact.
    pub chant_path: PathBuf,
    /// Path of the append-only run log.
    pub log_path: PathBuf,
}

impl RitualLayout {
    /// Compute the default layout for a workspace rooted at `root`.
    ///
    /// This does *not* touch the filesystem.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let config_path = root.join(CONFIG_FILE);
        let outputs_dir = root.join("outputs");
        let symbols_path = outputs_dir.join(SYMBOLS_FILE);
        let mantras_path = outputs_dir.join(MANTRAS_FILE);
        let chant_path = outputs_dir.join(CHANT_FILE);
        let log_path = root.join(LOG_FILE);

        Self { root, config_path, outputs_dir, symbols_path, mantras_path, chant_path, log_path }
    }

    /// Replace the configuration path, e.g. from a `--config` CLI override.
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }
}
