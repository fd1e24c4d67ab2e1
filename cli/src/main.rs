use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "fflsplit",
    version,
    about = "Split an ACT combat log into selected fights"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a log file and list the fights it contains
    List { path: PathBuf },
    /// Rewrite a log file, keeping only the chosen fights
    Extract {
        path: PathBuf,
        /// Fight indices to keep, e.g. `0-4,7,10` (or `all`)
        #[arg(short, long)]
        keep: String,
    },
    /// Show the director-code configuration and where it lives
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::List { path } => commands::list(&path),
        Commands::Extract { path, keep } => commands::extract(&path, &keep),
        Commands::Config => commands::config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
