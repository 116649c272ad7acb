//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the
//! mavetools binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MaveDB API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "mavetools", about = "MaveDB API CLI", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a model instance by ID and print it as JSON.
    Get {
        /// The resource collection, e.g. "experiments" or "scoresets".
        endpoint: String,

        /// The instance ID, typically a URN.
        id: String,
    },

    /// Submit a model instance read from a JSON file; prints the assigned URN.
    Post {
        /// The resource collection, e.g. "experiments" or "scoresets".
        endpoint: String,

        /// Path to a JSON file holding the model instance.
        #[arg(long)]
        file: PathBuf,
    },
}
