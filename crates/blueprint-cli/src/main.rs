//! Blueprint CLI - LaTeX and JSON documents from formalization manifests.

mod build;
mod colors;
mod index;
mod single;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blueprint")]
#[command(about = "Generate blueprint documents from a formalization manifest")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single module
    Single {
        /// Dotted module name, e.g. `Mathlib.Algebra.Group`
        module: String,

        /// Path to the manifest (.json file)
        #[arg(short, long)]
        manifest: String,

        /// Output base directory
        #[arg(short, long, default_value = "blueprint")]
        output: String,

        /// Write JSON instead of LaTeX
        #[arg(long)]
        json: bool,

        /// Override the prefix of `\input` paths
        #[arg(long)]
        input_root: Option<String>,
    },

    /// Write a library index referencing member modules
    Index {
        /// Dotted library name
        library: String,

        /// Member modules in document order
        modules: Vec<String>,

        /// Output base directory
        #[arg(short, long, default_value = "blueprint")]
        output: String,

        /// Write JSON instead of LaTeX
        #[arg(long)]
        json: bool,

        /// Prefix of `\input` paths
        #[arg(long, default_value = "")]
        input_root: String,
    },

    /// Render every module of a manifest in both formats
    Build {
        /// Path to the manifest (.json file)
        #[arg(short, long)]
        manifest: String,

        /// Output base directory
        #[arg(short, long, default_value = "blueprint")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Core errors carry recovery hints, also when wrapped by the writer
    let format_error = |err: anyhow::Error| -> anyhow::Error {
        let core_err = match err.downcast_ref::<blueprint_export::ExportError>() {
            Some(blueprint_export::ExportError::Core(core_err)) => Some(core_err),
            _ => err.downcast_ref::<blueprint_core::Error>(),
        };
        match core_err {
            Some(core_err) => anyhow::anyhow!("{}", core_err.with_hint()),
            None => err,
        }
    };

    match cli.command {
        Commands::Single {
            module,
            manifest,
            output,
            json,
            input_root,
        } => {
            single::execute(&module, &manifest, &output, json, input_root).map_err(format_error)?;
        }

        Commands::Index {
            library,
            modules,
            output,
            json,
            input_root,
        } => {
            index::execute(&library, &modules, &output, json, input_root).map_err(format_error)?;
        }

        Commands::Build { manifest, output } => {
            build::execute(&manifest, &output).map_err(format_error)?;
        }
    }

    Ok(())
}
