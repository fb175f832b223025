//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod postal_lookup_source;

#[cfg(test)]
pub use postal_lookup_source::MockPostalLookupSource;
pub use postal_lookup_source::{
    FETCH_FAILED_MESSAGE, FixturePostalLookupSource, NOT_FOUND_MESSAGE, PostalLookupError,
    PostalLookupSource,
};
