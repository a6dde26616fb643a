use anyhow::Result;
use clap::Parser;
use fractura::commands::run_ritual_command;
use fractura::parse_mode;
use fractura_core::runner::Mode;

/// FRACTURA extraction and chant-generation CLI.
///
/// This CLI is a thin wrapper around `fractura-core` (exposed in code as
/// `fractura_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "fractura",
    version,
    about = "Symbol/mantra extractor and glitch-chant generator",
    long_about = None
)]
struct Cli {
    /// Which step to run: symbols, mantras, chant, or all (alias: ritual).
    ///
    /// When omitted, the complete ritual runs and all three artifacts are
    /// written.
    mode: Option<String>,

    /// Workspace root directory. Defaults to the current working directory.
    #[arg(long, default_value = ".")]
    root: String,

    /// Path to the configuration document. Defaults to `fractura.json`
    /// under the workspace root.
    #[arg(long)]
    config: Option<String>,

    /// Emit the run report as JSON instead of human-readable text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Absent mode argument means the full ritual.
    let mode = match cli.mode.as_deref() {
        Some(raw) => parse_mode(raw)?,
        None => Mode::All,
    };

    run_ritual_command(&cli.root, cli.config, mode, cli.json)
}
