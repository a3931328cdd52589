pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Seal secrets to any set of GPG keys.
#[derive(Parser, Debug)]
#[command(name = "gpgseal", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to alternative config file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt content to one or more public keys
    Seal {
        /// File to seal (default: stdin)
        file: Option<String>,

        /// Armored public key file. Repeat for multiple recipients.
        #[arg(short, long)]
        key: Vec<String>,

        /// Write the armored message here instead of stdout
        #[arg(short, long)]
        out: Option<String>,

        /// Emit the full state snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the identity of an armored public key
    Inspect {
        /// Public key file to inspect
        key: String,
    },

    /// Print the SHA-256 state digest of a file or stdin
    Hash {
        /// File to hash (default: stdin)
        file: Option<String>,
    },
}
