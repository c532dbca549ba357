//! Clubhouse API client library.
//!
//! A thin, typed client for the Clubhouse (Shortcut) REST API. The client
//! builds request URLs, sends them through an injected [`Transport`], and
//! translates HTTP status codes into a closed [`ClubhouseError`] family.
//! Response bodies are returned as untyped [`serde_json::Value`]s.
//!
//! # Quick Start
//!
//! ```no_run
//! use clubhouse::{Client, ReqwestTransport};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> clubhouse::Result<()> {
//!     let client = Client::v2(ReqwestTransport::new()?, "your-token");
//!
//!     // Fetch a story
//!     let story = client.get("stories/42").await?;
//!     println!("{story:?}");
//!
//!     // Create one
//!     let created = client
//!         .post("stories", &json!({"name": "Ship it", "project_id": 7}))
//!         .await?;
//!     println!("{created:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every non-2xx response becomes exactly one of
//! [`ClubhouseError::ResourceNotExist`] (404),
//! [`ClubhouseError::SchemaMismatch`] (400),
//! [`ClubhouseError::Unprocessable`] (422),
//! [`ClubhouseError::TooManyRequest`] (429) or
//! [`ClubhouseError::Api`] for any other status.
//!
//! # Configuration
//!
//! [`Config::from_env`] reads:
//!
//! - `CLUBHOUSE_API_TOKEN` (required) - Your API token
//! - `CLUBHOUSE_API_VERSION` (optional) - `v1`, `v2` (default) or `beta`
//! - `CLUBHOUSE_API_URL` (optional) - Base URL override

pub mod cli;
mod client;
mod config;
mod error;
mod response;
pub mod transport;

pub use client::Client;
pub use config::{ApiVersion, Config, BASE_URL_ENV, TOKEN_ENV, VERSION_ENV};
pub use error::{ClubhouseError, Result, DEFAULT_ERROR_MESSAGE};
pub use transport::{BoxError, HttpResponse, ReqwestTransport, Transport};
