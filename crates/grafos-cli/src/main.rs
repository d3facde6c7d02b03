//! Grafos CLI - build weighted graphs from a script and run algorithms on them.
//!
//! Every line of a script is one command: mutations (`vertex`, `edge`, ...)
//! change the graph, queries (`mst`, `dijkstra`, `components`, ...) print a
//! result. See `grafos demo` for a sample.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use grafos::GraphConfig;

/// Grafos graph workbench.
///
/// Builds a weighted graph from a command script and prints the result of
/// every algorithm the script asks for.
#[derive(Parser)]
#[command(name = "grafos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress status messages and info logging
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Start with a directed graph
    #[arg(long, global = true)]
    directed: bool,

    /// Accept negative edge weights
    #[arg(long, global = true)]
    allow_negative: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// One JSON document per line
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Execute a command script
    Run {
        /// Script file, or `-` to read standard input
        script: String,
    },

    /// Execute the built-in sample script
    Demo,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = GraphConfig::default()
        .with_directed(cli.directed)
        .with_negative_weights(cli.allow_negative);

    let result = match cli.command {
        Commands::Run { script } => commands::run::run(&script, config, cli.format, cli.quiet),
        Commands::Demo => commands::demo::run(config, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
