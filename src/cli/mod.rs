//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the clubhouse binary.

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::config::{ApiVersion, BASE_URL_ENV, TOKEN_ENV, VERSION_ENV};
use crate::error::{ClubhouseError, Result};
use crate::Config;

/// Clubhouse API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "clubhouse", about = "Clubhouse API CLI", version)]
pub struct Cli {
    /// API token.
    #[arg(long, env = TOKEN_ENV, hide_env_values = true)]
    pub token: String,

    /// API version to talk to.
    #[arg(
        long,
        env = VERSION_ENV,
        value_enum,
        ignore_case = true,
        default_value_t = ApiVersion::V2
    )]
    pub api: ApiVersion,

    /// Base URL override (takes precedence over --api).
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Print single-line JSON instead of pretty JSON.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Client configuration described by the global arguments.
    ///
    /// An empty base URL counts as unset, as it does for [`Config::from_env`].
    pub fn config(&self) -> Config {
        Config {
            token: self.token.clone(),
            version: self.api,
            base_url: self.base_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a resource.
    Get {
        /// Resource path, e.g. `stories/42`.
        path: String,
    },

    /// Create a resource.
    Post(WriteArgs),

    /// Update a resource.
    Put(WriteArgs),

    /// Delete a resource.
    Delete {
        /// Resource path, e.g. `stories/42`.
        path: String,
    },
}

/// Arguments shared by the write commands.
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Resource path, e.g. `stories`.
    pub path: String,

    /// JSON request body.
    #[arg(long, short, default_value = "{}")]
    pub data: String,
}

impl WriteArgs {
    /// Parse `--data` into the request parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClubhouseError::InvalidData`] if `--data` is not valid JSON.
    pub fn params(&self) -> Result<Value> {
        serde_json::from_str(&self.data).map_err(|e| ClubhouseError::InvalidData {
            reason: e.to_string(),
        })
    }
}
