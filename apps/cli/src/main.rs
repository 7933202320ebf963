#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{AppCommands, Cli, ContentAction, StyleAction};
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Serve { config, port } => handlers::serve::run(config.load()?, port).await?,
        AppCommands::Style { action } => match action {
            StyleAction::Check { config } => handlers::style::check(&config.load()?)?,
            StyleAction::Export { config, format, output } => {
                handlers::style::export(&config.load()?, format, output.as_deref())?;
            },
        },
        AppCommands::Content { action } => match action {
            ContentAction::Check { config } => handlers::content::check(&config.load()?)?,
        },
    }

    Ok(())
}
