// edlp/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "edlp")]
#[command(about = "Email DLP policy intake: validate, canonicalize, store and export", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Starts the REST API (records, submit, clear, export)
    Serve {
        /// Directory holding edlp.yaml
        #[arg(long, default_value = ".")]
        config_dir: PathBuf,
    },

    /// 🔎 Validates a policy draft (JSON or YAML) and prints its canonical record
    Validate {
        /// Draft file (.json, .yaml or .yml)
        file: PathBuf,
    },

    /// 📝 Validates a draft and stores its canonical record
    Submit {
        /// Draft file (.json, .yaml or .yml)
        file: PathBuf,

        #[arg(long, env = "EDLP_DB_PATH", default_value = "edlp_db.duckdb")]
        db_path: String,
    },

    /// 📋 Lists stored policies, newest first
    List {
        #[arg(long, env = "EDLP_DB_PATH", default_value = "edlp_db.duckdb")]
        db_path: String,
    },

    /// 📤 Exports every stored policy to a dated CSV file
    Export {
        #[arg(long, env = "EDLP_DB_PATH", default_value = "edlp_db.duckdb")]
        db_path: String,

        /// Directory the CSV is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// File name prefix, the date is appended
        #[arg(long, default_value = "eDLP_Strategy_Export")]
        prefix: String,
    },

    /// 🧹 Deletes every stored policy (irreversible)
    Clear {
        #[arg(long, env = "EDLP_DB_PATH", default_value = "edlp_db.duckdb")]
        db_path: String,

        /// Confirms the wipe
        #[arg(long)]
        yes: bool,
    },
}
