//! # recq CLI
//!
//! Sort JSON record collections and extract nested values from the
//! command line.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use recq_engine::prelude::*;

#[derive(Parser)]
#[command(name = "recq", about = "Dynamic record sorting and extraction")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort a JSON array of records by one or more fields
    Sort {
        /// Input file holding a JSON array of objects
        file: PathBuf,
        /// Comma-separated field names, earlier fields take priority
        #[arg(long, value_delimiter = ',', required = true)]
        by: Vec<String>,
        /// Sort descending (nulls still sort last)
        #[arg(long)]
        desc: bool,
    },
    /// Extract a value from a JSON object by dot-separated path
    Get {
        /// Input file holding a JSON object
        file: PathBuf,
        /// Dot-separated field path, e.g. config.database.host
        #[arg(long)]
        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sort { file, by, desc } => {
            let input = std::fs::read_to_string(&file)?;
            let mut records = decode_records(&input)?;
            let direction = if desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            sort_records(&mut records, &by, direction)?;

            let encoded: Vec<serde_json::Value> =
                records.iter().map(|record| record.to_json()).collect();
            println!("{}", serde_json::to_string_pretty(&encoded)?);
        }
        Command::Get { file, path } => {
            let input = std::fs::read_to_string(&file)?;
            let record = decode_record(&input)?;
            let value = extract_from_record(&record, &FieldPath::parse(&path))?;
            println!("{}", serde_json::to_string_pretty(&value.to_json())?);
        }
    }

    Ok(())
}
