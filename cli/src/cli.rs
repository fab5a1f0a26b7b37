//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Decode and encode versioned track records.
#[derive(Parser, Debug)]
#[command(name = "trackwire")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Raise the log level (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode base64 payloads and print one record per payload.
    Decode {
        /// Base64 payloads to decode.
        payloads: Vec<String>,

        /// Also decode the raw bytes of a file.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Requester identifier to attach to every record.
        #[arg(short, long)]
        requester: Option<u64>,

        /// Print records as JSON lines.
        #[arg(long)]
        json: bool,
    },

    /// Encode a record and print it as base64.
    Encode {
        /// Format version to encode (0, 2 or 3).
        #[arg(long = "wire-version", default_value_t = 3)]
        version: u8,

        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Duration in milliseconds.
        #[arg(long)]
        length: u64,

        #[arg(long)]
        identifier: String,

        #[arg(long)]
        stream: bool,

        #[arg(long)]
        uri: Option<String>,

        #[arg(long)]
        thumbnail: Option<String>,

        #[arg(long)]
        isrc: Option<String>,

        #[arg(long)]
        source: String,
    },
}
