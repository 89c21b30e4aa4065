// edlp/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug edlp serve ... pour voir les détails.
    // Logs go to stderr so `validate` output stays pipeable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config_dir } => commands::serve::execute(config_dir).await,
        Commands::Validate { file } => commands::validate::execute(file),
        Commands::Submit { file, db_path } => commands::submit::execute(file, db_path).await,
        Commands::List { db_path } => commands::list::execute(db_path).await,
        Commands::Export {
            db_path,
            out_dir,
            prefix,
        } => commands::export::execute(db_path, out_dir, prefix).await,
        Commands::Clear { db_path, yes } => commands::clear::execute(db_path, yes).await,
    }
}
