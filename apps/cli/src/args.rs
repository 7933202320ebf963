//! # CLI Argument Definitions
//!
//! Subcommands, arguments and flags of the `folio` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Serve and maintain the Folio site")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum AppCommands {
    /// Start the web server
    Serve {
        #[command(flatten)]
        config: ConfigArg,

        /// Override `server.port` from the config file
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Inspect or export the stylesheet generator configuration
    Style {
        #[command(subcommand)]
        action: StyleAction,
    },
    /// Inspect the posts and projects content
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
}

#[derive(Debug, Args)]
pub(crate) struct ConfigArg {
    /// Config file to load (defaults to `folio.*` in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum StyleAction {
    /// Validate the style record and list the files its content globs match
    Check {
        #[command(flatten)]
        config: ConfigArg,
    },
    /// Write the style record for the generator
    Export {
        #[command(flatten)]
        config: ConfigArg,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Cjs)]
        format: ExportFormat,

        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// CommonJS module (`tailwind.config.cjs`)
    Cjs,
    Json,
}

#[derive(Debug, Subcommand)]
pub(crate) enum ContentAction {
    /// Load both indexes and every body file, reporting failures
    Check {
        #[command(flatten)]
        config: ConfigArg,
    },
}
