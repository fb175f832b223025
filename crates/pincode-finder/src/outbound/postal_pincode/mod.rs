//! postalpincode.in outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `PostalLookupSource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_ENDPOINT, PostalPincodeHttpOptions, PostalPincodeHttpSource};
