//! Reqwest-backed PIN code lookup adapter.
//!
//! This adapter owns transport details only: URL construction, HTTP error
//! mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::LookupEntryDto;
use crate::domain::PostOffices;
use crate::domain::PostalCode;
use crate::domain::ports::{PostalLookupError, PostalLookupSource};

/// Base URL of the public lookup service.
pub const DEFAULT_ENDPOINT: &str = "https://api.postalpincode.in";
const DEFAULT_USER_AGENT: &str = concat!("pincode-finder/", env!("CARGO_PKG_VERSION"));

/// Outbound identity and timeout settings for lookup requests.
#[derive(Debug, Clone)]
pub struct PostalPincodeHttpOptions {
    /// HTTP user-agent sent to the service.
    pub user_agent: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for PostalPincodeHttpOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
        }
    }
}

/// Lookup adapter that performs one HTTP GET per PIN code.
pub struct PostalPincodeHttpSource {
    client: Client,
    endpoint: Url,
}

impl PostalPincodeHttpSource {
    /// Build an adapter with default identity and no timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_options(endpoint, PostalPincodeHttpOptions::default())
    }

    /// Build an adapter with explicit identity and timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_options(
        endpoint: Url,
        options: PostalPincodeHttpOptions,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(options.user_agent);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PostalLookupSource for PostalPincodeHttpSource {
    async fn lookup(&self, code: &PostalCode) -> Result<PostOffices, PostalLookupError> {
        let url = lookup_url(&self.endpoint, code).ok_or_else(|| {
            warn!(endpoint = %self.endpoint, "lookup endpoint cannot carry a path");
            PostalLookupError::transport_or_fallback("")
        })?;
        debug!(%url, "requesting PIN code lookup");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        parse_lookup(body.as_ref())
    }
}

/// Build `{endpoint}/pincode/{code}`, keeping any path prefix on `endpoint`.
fn lookup_url(endpoint: &Url, code: &PostalCode) -> Option<Url> {
    let mut url = endpoint.clone();
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push("pincode")
        .push(code.as_str());
    Some(url)
}

fn parse_lookup(body: &[u8]) -> Result<PostOffices, PostalLookupError> {
    let entries: Vec<LookupEntryDto> = serde_json::from_slice(body).map_err(|error| {
        warn!(%error, "invalid PIN code lookup payload");
        PostalLookupError::transport_or_fallback("")
    })?;
    let Some(entry) = entries.into_iter().next() else {
        warn!("PIN code lookup payload contained no entries");
        return Err(PostalLookupError::transport_or_fallback(""));
    };
    entry.into_domain()
}

fn map_transport_error(error: reqwest::Error) -> PostalLookupError {
    warn!(%error, timeout = error.is_timeout(), "PIN code lookup transport failed");
    PostalLookupError::transport_or_fallback(error.to_string())
}

fn map_status_error(status: StatusCode) -> PostalLookupError {
    warn!(status = status.as_u16(), "PIN code lookup returned an error status");
    PostalLookupError::transport(format!(
        "Request failed with status code {}",
        status.as_u16()
    ))
}
