//! Domain primitives, the lookup port and the form controller.
//!
//! Purpose: model the PIN code lookup form independently of any transport or
//! host. Adapters live under `outbound` (lookup service) and `inbound`
//! (terminal host).
//!
//! Public surface:
//! - `PostalCode` / `sanitize_input`: PIN code validation and input cleanup.
//! - `PostOfficeRecord`, `PostOffices`, `LocationDetails`: lookup results.
//! - `LookupForm`, `UiState`, `FormPhase`: the form controller and its state.
//! - `LookupView`: pure view model derived from `UiState`.

pub mod lookup_form;
pub mod ports;
pub mod post_office;
pub mod postal_code;
pub mod view;

pub use self::lookup_form::{FormPhase, INVALID_FORMAT_MESSAGE, LookupForm, Submission, UiState};
pub use self::post_office::{
    COUNTRY, DeliveryStatus, LocationDetails, PostOfficeRecord, PostOffices,
};
pub use self::postal_code::{POSTAL_CODE_LEN, PostalCode, PostalCodeError, sanitize_input};
pub use self::view::{
    BadgeTone, DetailRow, LookupView, OutputRegion, ResultsGrid, StatusBadge, TITLE,
};
