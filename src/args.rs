use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stocklist")]
#[command(about = "Track named inventory items and their quantities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file (overrides the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file
    #[arg(long, global = true, default_value = stocklist::config::CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    Add {
        /// Item name
        name: String,

        /// Quantity (integer)
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// Delete every item with this name
    #[command(alias = "rm")]
    Remove {
        /// Item name
        name: String,
    },

    /// Remove all items
    Clear,

    /// List items
    #[command(alias = "ls")]
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Save the list as an Excel workbook
    Export {
        /// Destination; `.xlsx` is appended when missing
        path: PathBuf,
    },
}
