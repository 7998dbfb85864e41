//! Index command implementation for Blueprint CLI.

use blueprint_core::{Format, Name, RenderConfig};
use blueprint_export::{OutputLayout, write_library_index};

use crate::colors;

/// Execute the index command.
pub fn execute(
    library: &str,
    modules: &[String],
    output: &str,
    json: bool,
    input_root: String,
) -> anyhow::Result<()> {
    let config = RenderConfig {
        input_root,
        ..RenderConfig::default()
    };
    let format = if json { Format::Json } else { Format::Latex };
    let members: Vec<Name> = modules.iter().map(|m| Name::from(m.as_str())).collect();

    let written = write_library_index(
        &config,
        &OutputLayout::new(output),
        &Name::from(library),
        &members,
        format,
    )?;

    println!(
        "{}✓{} {} {}({} modules){}",
        colors::GREEN,
        colors::RESET,
        written.display(),
        colors::DIM,
        members.len(),
        colors::RESET
    );

    Ok(())
}
