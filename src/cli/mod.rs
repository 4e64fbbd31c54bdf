// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI module - Command line interface definitions and handlers

pub mod aggregates;
pub mod checks;
pub mod clients;
pub mod completions;
pub mod events;
pub mod health;
pub mod info;
pub mod resolve;
pub mod settings;
pub mod silence;
pub mod stashes;

use crate::api::{self, RequestSpec, SensuClient};
use crate::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sabi - passthrough CLI client for the Sensu monitoring API
#[derive(Parser, Debug)]
#[command(name = "sabi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(short, long, global = true, env = "SABI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List clients, or show a single client
    Clients {
        /// Client name
        name: Option<String>,
    },

    /// List checks, or show a single check
    Checks {
        /// Check name
        name: Option<String>,
    },

    /// List current events, optionally narrowed to a client and check
    Events {
        /// Client name
        client: Option<String>,

        /// Check name
        check: Option<String>,
    },

    /// Manage stashes
    Stashes {
        #[command(subcommand)]
        action: StashAction,
    },

    /// Silence a client, or a single check on a client
    Silence {
        /// Client name
        client: String,

        /// Restrict the silence to one check
        #[arg(short = 'k', long)]
        check: Option<String>,

        /// Reason recorded in the silence stash
        #[arg(short, long)]
        reason: Option<String>,

        /// Expiration in seconds
        #[arg(short, long)]
        expire: Option<u64>,
    },

    /// Manage aggregates
    Aggregates {
        #[command(subcommand)]
        action: AggregateAction,
    },

    /// Resolve an event
    Resolve {
        /// Client name
        client: String,

        /// Check name
        check: String,
    },

    /// Check Sensu health
    Health,

    /// Show Sensu version and transport information
    Info,

    /// Print the loaded configuration
    Settings,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum StashAction {
    /// List stashes
    List,
    /// Create a stash at a path
    Create {
        path: String,

        /// Expiration in seconds
        #[arg(short, long)]
        expire: Option<u64>,
    },
    /// Delete the stash at a path
    Delete { path: String },
}

#[derive(Subcommand, Debug)]
pub enum AggregateAction {
    /// List aggregates, or the aggregate history of a single check
    List {
        /// Check name
        check: Option<String>,
    },
    /// Delete the aggregates for a check
    Delete {
        /// Check name
        check: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Send one request and render what came back. Transport failures
/// propagate; interpreted outcomes never abort on their own.
pub(crate) async fn dispatch(
    config: &Config,
    verbose: bool,
    command: &str,
    spec: RequestSpec,
) -> Result<()> {
    if verbose {
        eprintln!("{} {}", spec.method, config.api.url_for(&spec.path));
    }

    let client = SensuClient::new(config.api.clone());
    let response = client.request(&spec).await?;
    let outcome = api::interpret(response.status, &response.body, Some(command))?;
    crate::output::render(&outcome);

    Ok(())
}
