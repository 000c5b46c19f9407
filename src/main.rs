use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::info;

use sitepatch::cli::Cli;
use sitepatch::{patch, run_patch, PatchError};

fn main() -> Result<()> {
    let cli = Cli::parse();

    sitepatch::init_logging();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.patch_name() {
        Some(name) => {
            let patch = patch::find(name).ok_or_else(|| PatchError::unknown_patch(name))?;
            let root = std::env::current_dir().context("Failed to resolve working directory")?;
            info!("Starting sitepatch v{} in {}", sitepatch::version(), root.display());

            let reports = run_patch(&root, patch, &mut out)
                .with_context(|| format!("Failed to apply {}", patch.name))?;
            let normalized = reports.iter().filter(|r| r.newlines_normalized).count();
            if normalized > 0 {
                info!("{} file(s) rewritten with LF line endings", normalized);
            }
        }
        None => {
            for p in patch::catalog() {
                writeln!(out, "{}\t{}\t{}", p.name, p.targets.join(", "), p.summary)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
