//! Lookup client configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::time::Duration;

use clap::Args;
use ortho_config::{OrthoConfig, OrthoResult};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::postal_pincode::{DEFAULT_ENDPOINT, PostalPincodeHttpOptions};

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured endpoint is not an absolute URL.
    #[error("invalid lookup endpoint '{value}': {source}")]
    InvalidEndpoint {
        /// Endpoint text as configured.
        value: String,
        /// Parser failure.
        source: url::ParseError,
    },
    /// The configured timeout is zero.
    #[error("lookup timeout must be at least one second")]
    ZeroTimeout,
}

const PROGRAM_NAME: &str = "pincode-finder";

/// Command-line overrides for [`LookupSettings`].
///
/// Flattened into the binary's arguments and replayed into the settings
/// loader, where they take precedence over environment and file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct LookupOverrides {
    /// Base URL of the lookup service.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
    /// User-agent sent with each request.
    #[arg(long, value_name = "AGENT")]
    pub user_agent: Option<String>,
    /// Whole-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl LookupOverrides {
    /// Render the overrides as loader arguments, program name first.
    #[must_use]
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from(PROGRAM_NAME)];
        let flags = [
            ("--endpoint", self.endpoint.clone()),
            ("--user-agent", self.user_agent.clone()),
            ("--timeout-secs", self.timeout_secs.map(|secs| secs.to_string())),
        ];
        for (flag, value) in flags {
            if let Some(text) = value {
                args.push(OsString::from(flag));
                args.push(OsString::from(text));
            }
        }
        args
    }
}

/// Settings for the outbound lookup client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PINCODE")]
pub struct LookupSettings {
    /// Base URL of the lookup service.
    #[ortho_config(default = DEFAULT_ENDPOINT.to_owned())]
    pub endpoint: String,
    /// User-agent sent with each request.
    pub user_agent: Option<String>,
    /// Optional whole-request timeout in seconds. Unset waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl LookupSettings {
    /// Load settings from files and `PINCODE_*` variables, then apply
    /// `overrides`.
    ///
    /// # Errors
    ///
    /// Returns the loader error when a layer cannot be read or merged.
    pub fn load_with(overrides: &LookupOverrides) -> OrthoResult<Self> {
        Self::load_from_iter(overrides.to_args())
    }

    /// Return the configured endpoint as a URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value does not
    /// parse as a URL.
    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        Url::parse(&self.endpoint).map_err(|source| SettingsError::InvalidEndpoint {
            value: self.endpoint.clone(),
            source,
        })
    }

    /// Translate the settings into adapter options.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] when a zero timeout is
    /// configured.
    pub fn http_options(&self) -> Result<PostalPincodeHttpOptions, SettingsError> {
        let mut options = PostalPincodeHttpOptions::default();
        if let Some(user_agent) = &self.user_agent {
            options.user_agent.clone_from(user_agent);
        }
        options.timeout = match self.timeout_secs {
            Some(0) => return Err(SettingsError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };
        Ok(options)
    }
}
