//! Indian postal index number (PIN code) value type.
//!
//! A PIN code is six ASCII digits and never starts with zero. Form input is
//! sanitised on every change with [`sanitize_input`] but only validated when
//! the form is submitted, through [`PostalCode::parse`]. Holding a
//! [`PostalCode`] therefore proves the value is safe to send to the lookup
//! service.

use std::fmt;

use thiserror::Error;

/// Number of digits in a PIN code.
pub const POSTAL_CODE_LEN: usize = 6;

/// Validation errors returned by [`PostalCode::parse`].
///
/// The variants carry enough detail for logs; the form itself always shows
/// the fixed invalid-format message to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostalCodeError {
    /// No characters were supplied.
    #[error("postal code must not be empty")]
    Empty,
    /// The value does not have exactly six characters.
    #[error("postal code must have 6 digits, found {len} characters")]
    WrongLength {
        /// Number of characters supplied.
        len: usize,
    },
    /// The value contains something other than ASCII digits.
    #[error("postal code may only contain digits")]
    NonDigit,
    /// Indian PIN codes never start with zero.
    #[error("postal code must not start with 0")]
    LeadingZero,
}

/// A validated six-digit Indian PIN code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Validate `raw` against the PIN code shape (`[1-9][0-9]{5}`).
    ///
    /// No trimming or sanitisation is applied; callers that accept free-form
    /// input should run it through [`sanitize_input`] first.
    ///
    /// # Examples
    ///
    /// ```
    /// use pincode_finder::domain::{PostalCode, PostalCodeError};
    ///
    /// let code = PostalCode::parse("110001").expect("valid PIN code");
    /// assert_eq!(code.as_str(), "110001");
    /// assert_eq!(PostalCode::parse("010001"), Err(PostalCodeError::LeadingZero));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PostalCodeError`] describing the first rule the value breaks.
    pub fn parse(raw: impl Into<String>) -> Result<Self, PostalCodeError> {
        Self::from_owned(raw.into())
    }

    fn from_owned(raw: String) -> Result<Self, PostalCodeError> {
        if raw.is_empty() {
            return Err(PostalCodeError::Empty);
        }
        if !raw.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(PostalCodeError::NonDigit);
        }
        if raw.len() != POSTAL_CODE_LEN {
            return Err(PostalCodeError::WrongLength { len: raw.len() });
        }
        if raw.starts_with('0') {
            return Err(PostalCodeError::LeadingZero);
        }
        Ok(Self(raw))
    }

    /// Borrow the six-digit code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PostalCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}

/// Strip every non-digit character from `raw` and keep at most six digits.
///
/// This mirrors what the input field accepts while typing. It does not check
/// the leading digit; that happens on submission.
///
/// ```
/// use pincode_finder::domain::sanitize_input;
///
/// assert_eq!(sanitize_input("110 001-99"), "110001");
/// ```
#[must_use]
pub fn sanitize_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(POSTAL_CODE_LEN)
        .collect()
}
