//! CLI command definitions for the `agentchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Relay prompts to a remote agent and render its replies as HTML.
#[derive(Parser)]
#[command(name = "agentchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Read configuration from this file instead of `~/.agentchat/config.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat web server.
    Serve {
        /// Port to listen on (defaults to the configured server port).
        #[arg(long, short)]
        port: Option<u16>,

        /// Host to bind to (defaults to the configured server host).
        #[arg(long)]
        host: Option<String>,
    },

    /// Format agent text from a file or stdin and print the HTML fragment.
    Format {
        /// File to read; stdin when omitted.
        file: Option<PathBuf>,

        /// Print one `kind<TAB>html` row per block instead of the fragment.
        #[arg(long)]
        blocks: bool,
    },

    /// Send one prompt to the agent and print the formatted reply.
    Ask {
        /// Prompt text.
        prompt: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
