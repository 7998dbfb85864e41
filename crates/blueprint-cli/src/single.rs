//! Single command implementation for Blueprint CLI.
//!
//! Renders one module of a manifest to LaTeX or JSON.

use std::path::Path;
use std::time::Instant;

use blueprint_core::{Format, Name, Session};
use blueprint_export::{OutputLayout, write_module};

use crate::colors;

/// Execute the single command.
pub fn execute(
    module: &str,
    manifest_path: &str,
    output: &str,
    json: bool,
    input_root: Option<String>,
) -> anyhow::Result<()> {
    let path = Path::new(manifest_path);
    if !path.exists() {
        anyhow::bail!("Manifest not found: {}", manifest_path);
    }

    let mut session = Session::load(path)?;
    if let Some(input_root) = input_root {
        session.config.input_root = input_root;
    }

    let format = if json { Format::Json } else { Format::Latex };
    let module = Name::from(module);
    let layout = OutputLayout::new(output);

    let start = Instant::now();
    print!("  {} ... ", module);
    std::io::Write::flush(&mut std::io::stdout()).ok();

    let written = write_module(&session, &layout, &module, format);
    let written = match written {
        Ok(written) => written,
        Err(e) => {
            println!("{}✗{}", colors::RED, colors::RESET);
            return Err(e.into());
        }
    };

    println!(
        "{}✓{} {} ({:.2}ms)",
        colors::GREEN,
        colors::RESET,
        written.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
