//! Driven port for resolving a PIN code into post office records.
//!
//! The domain owns the request and response contract so the form controller
//! never sees the upstream wire shape.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{DeliveryStatus, PostOfficeRecord, PostOffices, PostalCode};

/// Message used when the lookup service knows no post office for a code.
pub const NOT_FOUND_MESSAGE: &str = "No post offices found for this PIN code";

/// Message used when a transport failure carries no usable description.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch location data";

define_port_error! {
    /// Errors surfaced while looking up a PIN code.
    ///
    /// The display text of every variant is fit to show to the user as-is.
    pub enum PostalLookupError {
        /// The lookup service reported an explicit error status.
        Upstream {
            /// Message supplied by the lookup service.
            message: String,
        } => "{message}",
        /// The lookup service returned no post offices.
        NotFound => "No post offices found for this PIN code",
        /// The request failed or the response could not be understood.
        Transport {
            /// Description of the failure.
            message: String,
        } => "{message}",
    }
}

impl PostalLookupError {
    /// Build a transport error, substituting [`FETCH_FAILED_MESSAGE`] when
    /// `message` is blank.
    ///
    /// ```
    /// use pincode_finder::domain::ports::PostalLookupError;
    ///
    /// let error = PostalLookupError::transport_or_fallback("  ");
    /// assert_eq!(error.to_string(), "Failed to fetch location data");
    /// ```
    #[must_use]
    pub fn transport_or_fallback(message: impl Into<String>) -> Self {
        let text: String = message.into();
        if text.trim().is_empty() {
            Self::transport(FETCH_FAILED_MESSAGE)
        } else {
            Self::transport(text)
        }
    }

    /// Build an upstream error, substituting [`FETCH_FAILED_MESSAGE`] when the
    /// service flagged an error without a message.
    #[must_use]
    pub fn upstream_or_fallback(message: Option<String>) -> Self {
        match message.filter(|text| !text.trim().is_empty()) {
            Some(text) => Self::upstream(text),
            None => Self::upstream(FETCH_FAILED_MESSAGE),
        }
    }
}

/// Port for resolving a validated PIN code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostalLookupSource: Send + Sync {
    /// Fetch every post office registered for `code`, in upstream order.
    ///
    /// Implementations never return an empty success: an empty result is
    /// [`PostalLookupError::NotFound`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use pincode_finder::domain::PostalCode;
    /// use pincode_finder::domain::ports::{FixturePostalLookupSource, PostalLookupSource};
    ///
    /// # async fn demo() -> Result<(), pincode_finder::domain::ports::PostalLookupError> {
    /// let source = FixturePostalLookupSource;
    /// let code = PostalCode::parse("110001").expect("valid PIN code");
    /// let offices = source.lookup(&code).await?;
    /// assert_eq!(offices.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    async fn lookup(&self, code: &PostalCode) -> Result<PostOffices, PostalLookupError>;
}

/// Fixture implementation returning one canned delivery office for any code.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixturePostalLookupSource;

#[async_trait]
impl PostalLookupSource for FixturePostalLookupSource {
    async fn lookup(&self, _code: &PostalCode) -> Result<PostOffices, PostalLookupError> {
        let record = PostOfficeRecord {
            name: "Fixture Post Office".to_owned(),
            district: "Fixture District".to_owned(),
            state: "Fixture State".to_owned(),
            region: "Fixture Region".to_owned(),
            division: "Fixture Division".to_owned(),
            circle: "Fixture Circle".to_owned(),
            delivery_status: DeliveryStatus::Delivery,
        };
        PostOffices::from_vec(vec![record]).ok_or_else(PostalLookupError::not_found)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for lookup error construction.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::upstream(PostalLookupError::upstream("Invalid Pincode"), "Invalid Pincode")]
    #[case::not_found(PostalLookupError::not_found(), NOT_FOUND_MESSAGE)]
    #[case::transport(PostalLookupError::transport("connection refused"), "connection refused")]
    fn display_is_the_user_facing_message(
        #[case] error: PostalLookupError,
        #[case] expected: &str,
    ) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn upstream_without_message_falls_back(#[case] message: Option<String>) {
        let error = PostalLookupError::upstream_or_fallback(message);
        assert_eq!(error, PostalLookupError::upstream(FETCH_FAILED_MESSAGE));
    }

    #[test]
    fn transport_keeps_non_blank_messages() {
        let error = PostalLookupError::transport_or_fallback("dns error");
        assert_eq!(error, PostalLookupError::transport("dns error"));
    }

    #[tokio::test]
    async fn fixture_source_returns_one_office() {
        let code = PostalCode::parse("560001").expect("valid code");
        let offices = FixturePostalLookupSource
            .lookup(&code)
            .await
            .expect("fixture lookup succeeds");
        assert_eq!(offices.len(), 1);
        assert!(offices.first().delivery_status.is_delivery());
    }
}
