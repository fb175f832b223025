//! PIN code lookup form for Indian postal codes.
//!
//! The crate validates six-digit PIN codes, resolves them through the public
//! postalpincode.in service and exposes the result as form state plus a pure
//! view model. The layout is hexagonal:
//!
//! - [`domain`] holds the value types, the lookup port, the form controller
//!   and the view model.
//! - [`outbound`] implements the lookup port over HTTP.
//! - [`inbound`] hosts the form in a terminal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pincode_finder::domain::ports::FixturePostalLookupSource;
//! use pincode_finder::domain::{FormPhase, LookupForm};
//!
//! let mut form = LookupForm::new(Arc::new(FixturePostalLookupSource));
//! form.set_input("11000");
//! assert!(form.begin_submit().is_none());
//! assert_eq!(form.phase(), FormPhase::Error);
//! ```

pub mod domain;
pub mod inbound;
pub mod outbound;
