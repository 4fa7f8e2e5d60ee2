//! CLI module
//!
//! Command-line interface for the pagination server and tools.
//!
//! # Commands
//!
//! - `serve` - Start HTTP server mode
//! - `page` - Run one pagination request in-process
//! - `walk` - Follow page info across every page
//! - `encode` / `decode` - Cursor utilities

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
