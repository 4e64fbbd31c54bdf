// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! sabi - passthrough CLI client for the Sensu monitoring API
//!
//! Issues exactly one API request per invocation and renders the outcome:
//! parsed JSON on data paths, a fixed status message on the others.

mod api;
mod cli;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Clients { name } => {
            cli::clients::execute(&config, cli.verbose, name).await?;
        }
        Commands::Checks { name } => {
            cli::checks::execute(&config, cli.verbose, name).await?;
        }
        Commands::Events { client, check } => {
            cli::events::execute(&config, cli.verbose, client, check).await?;
        }
        Commands::Stashes { action } => {
            cli::stashes::execute(&config, cli.verbose, action).await?;
        }
        Commands::Silence {
            client,
            check,
            reason,
            expire,
        } => {
            cli::silence::execute(&config, cli.verbose, client, check, reason, expire).await?;
        }
        Commands::Aggregates { action } => {
            cli::aggregates::execute(&config, cli.verbose, action).await?;
        }
        Commands::Resolve { client, check } => {
            cli::resolve::execute(&config, cli.verbose, client, check).await?;
        }
        Commands::Health => {
            cli::health::execute(&config, cli.verbose).await?;
        }
        Commands::Info => {
            cli::info::execute(&config, cli.verbose).await?;
        }
        Commands::Settings => {
            cli::settings::execute(&config)?;
        }
        Commands::Completions { shell } => {
            cli::completions::execute(shell);
        }
    }

    Ok(())
}
