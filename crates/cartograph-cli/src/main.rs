//! cartograph: CLI for cloud resource graph building

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cartograph_cli::commands;
use cartograph_cli::commands::LayoutArg;

#[derive(Parser)]
#[command(name = "cartograph")]
#[command(author, version, about = "Cloud resource graph mapping tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a node-link graph from a scan inventory
    Build {
        /// Inventory file or fragment directory
        input: std::path::PathBuf,

        /// Layout strategy for node positions
        #[arg(long, value_enum, default_value_t = LayoutArg::Regional)]
        layout: LayoutArg,

        /// Vertical spacing between node rows
        #[arg(long, default_value_t = 150.0)]
        vertical_spacing: f64,

        /// Horizontal spacing between node columns
        #[arg(long, default_value_t = 180.0)]
        horizontal_spacing: f64,

        /// Write the graph JSON here instead of stdout
        #[arg(long)]
        output: Option<std::path::PathBuf>,

        /// Pretty-print the graph JSON
        #[arg(long)]
        pretty: bool,

        /// Version tag recorded in the scan manifest
        #[arg(long)]
        version_tag: Option<String>,
    },

    /// Summarize an inventory by region and service
    Inspect {
        /// Inventory file or fragment directory
        input: std::path::PathBuf,
    },

    /// Compare two inventories
    Diff {
        /// Baseline inventory file or fragment directory
        from: std::path::PathBuf,

        /// Updated inventory file or fragment directory
        to: std::path::PathBuf,
    },
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Build {
            input,
            layout,
            vertical_spacing,
            horizontal_spacing,
            output,
            pretty,
            version_tag,
        } => {
            let options = layout.to_options(vertical_spacing, horizontal_spacing);
            commands::build::run(
                &input,
                &options,
                output.as_deref(),
                pretty,
                version_tag.as_deref(),
            )?;
        }
        Commands::Inspect { input } => {
            commands::inspect::run(&input)?;
        }
        Commands::Diff { from, to } => {
            commands::diff::run(&from, &to)?;
        }
    }

    Ok(())
}
