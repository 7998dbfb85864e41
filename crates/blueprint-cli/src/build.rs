//! Build command implementation for Blueprint CLI.
//!
//! Renders every module of a manifest to both LaTeX and JSON.

use std::path::Path;
use std::time::Instant;

use blueprint_core::Session;
use blueprint_export::{OutputLayout, write_all};

use crate::colors;

/// Execute the build command.
pub fn execute(manifest_path: &str, output: &str) -> anyhow::Result<()> {
    let path = Path::new(manifest_path);
    if !path.exists() {
        anyhow::bail!("Manifest not found: {}", manifest_path);
    }

    println!(
        "\n{}Blueprint Build{} - {}",
        colors::BOLD,
        colors::RESET,
        path.display()
    );
    println!("{}", "─".repeat(50));

    let start = Instant::now();
    let session = Session::load(path)?;
    println!(
        "  {}Loaded{} {} nodes, {} modules",
        colors::CYAN,
        colors::RESET,
        session.registry.len(),
        session.store.modules().len()
    );

    let layout = OutputLayout::new(output);
    let written = write_all(&session, &layout)?;

    println!(
        "\n{}✓ Wrote {} files{} to {} ({:.2}ms)",
        colors::GREEN,
        written.len(),
        colors::RESET,
        layout.base_dir().display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
