use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shadowgrid", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path
    #[arg(short, long, value_name = "FILE")]
    pub config_path: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the config file and saves directory
    Init,

    /// Generate a sample configuration
    ConfigSample {
        /// Output path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a new game and store it under a name
    New {
        /// Name for the stored session
        name: String,

        /// Table side length (defaults to config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Number of guards (defaults to config)
        #[arg(short, long)]
        guards: Option<usize>,
    },

    /// List stored sessions, most recent first
    Saves,

    /// Load a stored session and print it
    Show {
        /// Name of the stored session
        name: String,
    },
}
