use clap::{Parser, Subcommand};
use roster::codec::Format;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Keep a small employee roster in a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to read and write (overrides config)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Data file format: text or json (overrides config)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<Format>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Add a person
    #[command(alias = "a")]
    Add {
        name: String,

        /// Employee ID
        #[arg(allow_negative_numbers = true)]
        id: i32,

        salary: f64,

        /// Person type (1 for Employee)
        #[arg(short = 't', long = "type", default_value_t = 1)]
        kind: i64,
    },

    /// Overwrite name, ID and salary of the first employee with ID
    #[command(alias = "u")]
    Update {
        #[arg(allow_negative_numbers = true)]
        id: i32,

        name: String,

        #[arg(allow_negative_numbers = true)]
        new_id: i32,

        salary: f64,
    },

    /// List all persons
    #[command(alias = "ls")]
    List,

    /// Delete the first employee with ID
    #[command(alias = "rm")]
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_format(s: &str) -> Result<Format, String> {
    s.parse().map_err(|e: roster::error::RosterError| e.to_string())
}
