// src/cli.rs
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Workout load-progression sheet helper", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import exercise names from files (.xlsx, .xls, .csv or .txt)
    Import {
        /// Files to import, processed in order through one registry
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Drop these names from the imported set after the import
        #[arg(long = "exclude", value_name = "NAME")]
        exclude: Vec<String>,

        /// Drop the whole imported set after the import
        #[arg(long, conflicts_with = "exclude")]
        exclude_all: bool,

        /// Only list names matching this query (case-insensitive substring)
        #[arg(short, long)]
        query: Option<String>,

        /// Print the resulting names as CSV instead of a table
        #[arg(long)]
        export_csv: bool,
    },
    /// Import exercise names from a pasted list (argument, or stdin when omitted)
    Paste {
        /// The pasted list; one name per line or comma-separated
        text: Option<String>,

        /// Print the resulting names as CSV instead of a table
        #[arg(long)]
        export_csv: bool,
    },
    /// Compute warm-up (50%) and preparation (70%) loads for working weights
    Loads {
        /// Working-set weights in kg (the 100% "valid" loads)
        #[arg(required = true)]
        weights: Vec<f64>,

        /// Number of warm-up sets
        #[arg(long, default_value_t = 1)]
        warmup_sets: u32,

        /// Number of preparation sets
        #[arg(long, default_value_t = 1)]
        preparation_sets: u32,

        /// Number of valid sets
        #[arg(long, default_value_t = 3)]
        valid_sets: u32,
    },
    /// Generate shell completion scripts
    GenerateCompletion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
