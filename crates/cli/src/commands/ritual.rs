use std::path::Path;

use anyhow::{Context, Result};
use fractura_core::layout::RitualLayout;
use fractura_core::runner::{Mode, Runner};

use crate::resolve_root;

/// Execute the requested mode against the workspace at `root`.
pub fn run_ritual_command(
    root: &str,
    config: Option<String>,
    mode: Mode,
    json: bool,
) -> Result<()> {
    let root_path = resolve_root(root)?;
    let mut layout = RitualLayout::new(&root_path);

    // A --config override may be relative or absolute; relative paths
    // resolve under the workspace root.
    if let Some(config) = config {
        let config_path = Path::new(&config);
        let config_path = if config_path.is_absolute() {
            config_path.to_path_buf()
        } else {
            root_path.join(config_path)
        };
        layout = layout.with_config_path(config_path);
    }

    let runner = Runner::load(layout.clone()).with_context(|| {
        format!("Failed to prepare ritual from config at {}", layout.config_path.display())
    })?;

    let report =
        runner.run(mode).with_context(|| format!("Ritual failed in mode '{mode}'"))?;

    if json {
        let serialized = serde_json::to_string_pretty(&report)
            .context("Failed to serialize run report to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("FRACTURA ritual complete (core v{}):", fractura_core::version());
    println!("  Mode: {}", report.mode);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    for path in &report.written {
        println!("  Wrote: {}", path.display());
    }
    println!("  Log: {}", layout.log_path.display());

    Ok(())
}
