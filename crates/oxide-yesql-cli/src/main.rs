//! oxide-yesql CLI
//!
//! Command-line tool for validating and inspecting named SQL query files.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use oxide_yesql_cli::{OutputFormat, check, list, show};

/// Validate and inspect named SQL query files.
#[derive(Parser)]
#[command(name = "oxide-yesql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(short, long, value_enum, env = "OXIDE_YESQL_FORMAT", default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse query files and report how many queries each declares.
    Check {
        /// Query files to validate.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List the queries declared in a file.
    List {
        /// Query file.
        file: PathBuf,
    },

    /// Print the assembled statement of one query.
    Show {
        /// Query file.
        file: PathBuf,

        /// Query name.
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check { files } => check(&files, cli.format, &mut out)?,
        Commands::List { file } => list(&file, cli.format, &mut out)?,
        Commands::Show { file, name } => show(&file, &name, cli.format, &mut out)?,
    }

    Ok(())
}
