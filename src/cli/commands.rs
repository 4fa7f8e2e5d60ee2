//! CLI commands and argument parsing

use crate::client::Direction;
use crate::pagination::PolicyKind;
use crate::types::RecordId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relay-style cursor pagination server and tools
#[derive(Parser, Debug)]
#[command(name = "relay-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server mode
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one pagination request against the seeded collection
    Page {
        /// Page-info policy
        #[arg(long, value_enum, default_value = "strict")]
        policy: PolicyKind,

        /// Items from the start of the window
        #[arg(long, allow_hyphen_values = true)]
        first: Option<String>,

        /// Items from the end of the window
        #[arg(long, allow_hyphen_values = true)]
        last: Option<String>,

        /// Exclusive lower bound cursor
        #[arg(long)]
        after: Option<String>,

        /// Exclusive upper bound cursor
        #[arg(long)]
        before: Option<String>,

        /// Relay id filter (best-effort policy only)
        #[arg(long)]
        relay_id: Option<String>,
    },

    /// Walk every page, in-process or against a running server
    Walk {
        /// Page-info policy
        #[arg(long, value_enum, default_value = "strict")]
        policy: PolicyKind,

        /// Walk direction
        #[arg(long, value_enum, default_value = "backward")]
        direction: Direction,

        /// Items per page (defaults to paging.default_page_size)
        #[arg(long)]
        page_size: Option<u32>,

        /// Base URL of a running server, e.g. http://localhost:3000
        #[arg(long)]
        url: Option<String>,

        /// Relay id filter (best-effort policy only)
        #[arg(long)]
        relay_id: Option<String>,
    },

    /// Encode a record id as a cursor
    Encode {
        /// Record id
        #[arg(allow_hyphen_values = true)]
        id: RecordId,
    },

    /// Decode a cursor into a record id
    Decode {
        /// Cursor token
        cursor: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
