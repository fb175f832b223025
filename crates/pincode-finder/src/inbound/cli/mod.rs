//! Terminal host for the lookup form.
//!
//! Configuration, plain-text rendering and the one-shot and interactive
//! session loops used by the `pincode-finder` binary.

mod config;
mod render;
mod session;

pub use config::{LookupOverrides, LookupSettings, SettingsError};
pub use render::render_view;
pub use session::{run_interactive, run_once};
