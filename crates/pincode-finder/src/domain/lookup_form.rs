//! PIN code lookup form controller.
//!
//! [`LookupForm`] owns the form's [`UiState`], enforces the PIN code rule on
//! submission and drives one lookup per valid submission through the
//! [`PostalLookupSource`] port. Hosts re-render from [`LookupForm::state`]
//! after every call that takes `&mut self`.
//!
//! Submissions are fenced: each valid submission gets a fresh ticket and
//! outcomes for older tickets are discarded, so the state always reflects
//! the most recent submission even if lookups resolve out of order.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::ports::{PostalLookupError, PostalLookupSource};
use crate::domain::{LocationDetails, PostOffices, PostalCode, sanitize_input};

/// Message shown when a submitted value is not a valid PIN code.
pub const INVALID_FORMAT_MESSAGE: &str = "Please enter a valid 6-digit Indian PIN code";

/// Observable form state.
///
/// At most one of [`UiState::error_message`] and [`UiState::result`] is set,
/// and neither is set while a lookup is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    postal_code_input: String,
    is_loading: bool,
    error_message: Option<String>,
    result: Option<LocationDetails>,
}

impl UiState {
    /// Sanitised text currently in the input field.
    #[must_use]
    pub fn postal_code_input(&self) -> &str {
        self.postal_code_input.as_str()
    }

    /// Whether a lookup is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message for the error banner, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Details of the last successful lookup, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&LocationDetails> {
        self.result.as_ref()
    }
}

/// Position of the form in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing has been submitted yet.
    Idle,
    /// A lookup is in flight.
    Submitting,
    /// The last lookup produced a result.
    Success,
    /// The last submission failed, locally or remotely.
    Error,
}

/// A validated submission awaiting its lookup outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    ticket: u64,
    postal_code: PostalCode,
}

impl Submission {
    /// The PIN code to look up.
    #[must_use]
    pub const fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    /// Sequence number of this submission within its form.
    #[must_use]
    pub const fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// Form controller for PIN code lookups.
pub struct LookupForm {
    source: Arc<dyn PostalLookupSource>,
    state: UiState,
    latest_ticket: u64,
}

impl LookupForm {
    /// Build an idle form backed by `source`.
    #[must_use]
    pub fn new(source: Arc<dyn PostalLookupSource>) -> Self {
        Self {
            source,
            state: UiState::default(),
            latest_ticket: 0,
        }
    }

    /// Current state for rendering.
    #[must_use]
    pub const fn state(&self) -> &UiState {
        &self.state
    }

    /// Lifecycle position derived from the current state.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        if self.state.is_loading {
            FormPhase::Submitting
        } else if self.state.result.is_some() {
            FormPhase::Success
        } else if self.state.error_message.is_some() {
            FormPhase::Error
        } else {
            FormPhase::Idle
        }
    }

    /// Lookup port used by [`LookupForm::submit`].
    ///
    /// Hosts that drive lookups themselves (between
    /// [`LookupForm::begin_submit`] and [`LookupForm::complete`]) call the
    /// port through this handle.
    #[must_use]
    pub fn source(&self) -> Arc<dyn PostalLookupSource> {
        Arc::clone(&self.source)
    }

    /// Handle an input change: keep only digits, at most six of them.
    ///
    /// The value is not validated here; that happens on submission.
    pub fn set_input(&mut self, raw: &str) {
        self.state.postal_code_input = sanitize_input(raw);
    }

    /// Handle a submission trigger.
    ///
    /// Returns `None` and shows [`INVALID_FORMAT_MESSAGE`] when the input is
    /// not a valid PIN code; no lookup may be issued in that case. Otherwise
    /// clears the previous outcome, marks the form as loading and returns the
    /// submission to resolve with [`LookupForm::complete`].
    pub fn begin_submit(&mut self) -> Option<Submission> {
        self.latest_ticket += 1;
        match PostalCode::parse(self.state.postal_code_input.as_str()) {
            Ok(postal_code) => {
                self.state.error_message = None;
                self.state.result = None;
                self.state.is_loading = true;
                debug!(
                    postal_code = %postal_code,
                    ticket = self.latest_ticket,
                    "lookup submitted"
                );
                Some(Submission {
                    ticket: self.latest_ticket,
                    postal_code,
                })
            }
            Err(reason) => {
                debug!(%reason, "submission rejected");
                self.state.is_loading = false;
                self.state.result = None;
                self.state.error_message = Some(INVALID_FORMAT_MESSAGE.to_owned());
                None
            }
        }
    }

    /// Apply the outcome of `submission`'s lookup.
    ///
    /// Only the first post office of a successful lookup is shown. Returns
    /// `false` without touching the state when a newer submission has been
    /// made since `submission` began.
    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<PostOffices, PostalLookupError>,
    ) -> bool {
        let Submission {
            ticket,
            postal_code,
        } = submission;
        if ticket != self.latest_ticket {
            debug!(
                postal_code = %postal_code,
                ticket,
                latest = self.latest_ticket,
                "discarding superseded lookup outcome"
            );
            return false;
        }

        self.state.is_loading = false;
        match outcome {
            Ok(offices) => {
                debug!(
                    postal_code = %postal_code,
                    offices = offices.len(),
                    "lookup succeeded"
                );
                self.state.result = Some(LocationDetails::from_record(
                    postal_code,
                    offices.into_first(),
                ));
            }
            Err(error) => {
                warn!(postal_code = %postal_code, %error, "lookup failed");
                self.state.error_message = Some(error.to_string());
            }
        }
        true
    }

    /// Submit the current input and wait for the lookup to resolve.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    ///
    /// use pincode_finder::domain::ports::FixturePostalLookupSource;
    /// use pincode_finder::domain::{FormPhase, LookupForm};
    ///
    /// # async fn demo() {
    /// let mut form = LookupForm::new(Arc::new(FixturePostalLookupSource));
    /// form.set_input("110001");
    /// assert_eq!(form.submit().await, FormPhase::Success);
    /// # }
    /// ```
    pub async fn submit(&mut self) -> FormPhase {
        let Some(submission) = self.begin_submit() else {
            return self.phase();
        };
        let outcome = self.source.lookup(submission.postal_code()).await;
        self.complete(submission, outcome);
        self.phase()
    }
}

#[cfg(test)]
#[path = "lookup_form_tests.rs"]
mod tests;
