//! API versions and environment-based configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::client::Client;
use crate::error::{ClubhouseError, Result};
use crate::transport::Transport;

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "CLUBHOUSE_API_TOKEN";
/// Environment variable selecting the API version (`v1`, `v2` or `beta`).
pub const VERSION_ENV: &str = "CLUBHOUSE_API_VERSION";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "CLUBHOUSE_API_URL";

/// One of the three published API surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ApiVersion {
    V1,
    #[default]
    V2,
    Beta,
}

impl ApiVersion {
    /// The fixed base URL of this API surface.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::V1 => "https://api.clubhouse.io/api/v1",
            Self::V2 => "https://api.clubhouse.io/api/v2",
            Self::Beta => "https://api.clubhouse.io/api/beta",
        }
    }

    /// The name used in `CLUBHOUSE_API_VERSION` and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::Beta => "beta",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ClubhouseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "beta" => Ok(Self::Beta),
            other => Err(ClubhouseError::ConfigMissing(format!(
                "unknown API version '{other}', expected one of: v1, v2, beta"
            ))),
        }
    }
}

/// Settings needed to build a [`Client`].
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// API token sent with every request.
    pub token: String,
    /// API surface used when no base URL override is set.
    pub version: ApiVersion,
    /// Overrides the version's base URL when set.
    pub base_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("version", &self.version)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create a configuration for a published API version.
    pub fn new(token: impl Into<String>, version: ApiVersion) -> Self {
        Self {
            token: token.into(),
            version,
            base_url: None,
        }
    }

    /// Read configuration from the environment.
    ///
    /// Uses `CLUBHOUSE_API_TOKEN` for authentication, `CLUBHOUSE_API_VERSION`
    /// to pick the API surface (defaults to `v2`) and optionally
    /// `CLUBHOUSE_API_URL` to point at another host.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not set or the version is unknown.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(TOKEN_ENV).ok_or_else(|| {
            ClubhouseError::ConfigMissing(format!("{TOKEN_ENV} environment variable not set"))
        })?;

        let version = match lookup(VERSION_ENV) {
            Some(value) => value.parse()?,
            None => ApiVersion::default(),
        };

        Ok(Self {
            token,
            version,
            base_url: lookup(BASE_URL_ENV).filter(|url| !url.is_empty()),
        })
    }

    /// Build a client over the given transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL override is malformed.
    pub fn into_client<T: Transport>(self, transport: T) -> Result<Client<T>> {
        match self.base_url {
            Some(base_url) => Client::new(transport, &base_url, self.token),
            None => Ok(Client::for_version(transport, self.version, self.token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_version_round_trips_through_str() {
        for version in [ApiVersion::V1, ApiVersion::V2, ApiVersion::Beta] {
            assert_eq!(version.to_string().parse::<ApiVersion>().unwrap(), version);
        }
        assert_eq!("BETA".parse::<ApiVersion>().unwrap(), ApiVersion::Beta);
    }

    #[test]
    fn test_unknown_version_is_config_error() {
        let err = "v3".parse::<ApiVersion>().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("v3"));
    }

    #[test]
    fn test_base_urls() {
        assert_eq!(ApiVersion::V1.base_url(), "https://api.clubhouse.io/api/v1");
        assert_eq!(ApiVersion::V2.base_url(), "https://api.clubhouse.io/api/v2");
        assert_eq!(ApiVersion::Beta.base_url(), "https://api.clubhouse.io/api/beta");
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ClubhouseError::ConfigMissing(_)));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(lookup(&[(TOKEN_ENV, "foo")])).unwrap();
        assert_eq!(config, Config::new("foo", ApiVersion::V2));
    }

    #[test]
    fn test_from_lookup_reads_all_vars() {
        let config = Config::from_lookup(lookup(&[
            (TOKEN_ENV, "foo"),
            (VERSION_ENV, "beta"),
            (BASE_URL_ENV, "http://domain.tld"),
        ]))
        .unwrap();
        assert_eq!(config.version, ApiVersion::Beta);
        assert_eq!(config.base_url.as_deref(), Some("http://domain.tld"));
    }

    #[test]
    fn test_debug_hides_token() {
        let debug = format!("{:?}", Config::new("secret-token", ApiVersion::V1));
        assert!(debug.contains("V1"));
        assert!(!debug.contains("secret-token"));
    }
}
