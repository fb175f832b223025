//! Pure view model derived from [`UiState`].
//!
//! Hosts call [`LookupView::from_state`] after every state change and draw
//! the result; nothing here holds state of its own.

use super::{DeliveryStatus, LocationDetails, UiState};

/// Fixed title shown above the form.
pub const TITLE: &str = "Indian Postal Code Finder";
/// Hint shown in the empty input field.
pub const INPUT_PLACEHOLDER: &str = "Enter 6-digit PIN code (e.g., 110001)";
/// Text of the loading indicator.
pub const LOADING_MESSAGE: &str = "Fetching location details...";
/// Heading of the results grid.
pub const RESULTS_HEADING: &str = "Location Details";

const SUBMIT_LABEL: &str = "Search";
const SUBMIT_LABEL_BUSY: &str = "Searching...";

/// Visual tone of the delivery-status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// The office delivers mail.
    Positive,
    /// Anything else.
    Negative,
}

/// Delivery-status badge shown at the end of the results grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    /// Badge text.
    pub label: String,
    /// Badge colouring.
    pub tone: BadgeTone,
}

impl StatusBadge {
    fn for_status(status: &DeliveryStatus) -> Self {
        let tone = if status.is_delivery() {
            BadgeTone::Positive
        } else {
            BadgeTone::Negative
        };
        Self {
            label: status.label().to_owned(),
            tone,
        }
    }
}

/// One labelled value in the results grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    /// Field label.
    pub label: &'static str,
    /// Field value.
    pub value: String,
}

/// Results grid for a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsGrid {
    /// Labelled rows in display order.
    pub rows: Vec<DetailRow>,
    /// Delivery-status badge.
    pub badge: StatusBadge,
}

impl ResultsGrid {
    fn from_details(details: &LocationDetails) -> Self {
        let row = |label: &'static str, value: &str| DetailRow {
            label,
            value: value.to_owned(),
        };
        Self {
            rows: vec![
                row("PIN Code", details.postal_code.as_str()),
                row("Post Office", details.post_office.as_str()),
                row("District", details.district.as_str()),
                row("State", details.state.as_str()),
                row("Region", details.region.as_str()),
                row("Division", details.division.as_str()),
                row("Circle", details.circle.as_str()),
            ],
            badge: StatusBadge::for_status(&details.delivery_status),
        }
    }

    /// Value of the row labelled `label`, if present.
    #[must_use]
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

/// The single output region visible below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRegion {
    /// Nothing to show.
    Empty,
    /// Error banner with its message.
    Error(String),
    /// Loading indicator with its text.
    Loading(&'static str),
    /// Results grid.
    Results(ResultsGrid),
}

/// Everything a host needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupView {
    /// Current input field text.
    pub input: String,
    /// Whether the submit control accepts presses.
    pub submit_enabled: bool,
    /// Submit control caption.
    pub submit_label: &'static str,
    /// Output region below the form.
    pub output: OutputRegion,
}

impl LookupView {
    /// Derive the view for `state`.
    ///
    /// An error banner takes precedence over the loading indicator.
    ///
    /// ```
    /// use pincode_finder::domain::{LookupView, OutputRegion, UiState};
    ///
    /// let view = LookupView::from_state(&UiState::default());
    /// assert!(view.submit_enabled);
    /// assert_eq!(view.output, OutputRegion::Empty);
    /// ```
    #[must_use]
    pub fn from_state(state: &UiState) -> Self {
        let output = if let Some(message) = state.error_message() {
            OutputRegion::Error(message.to_owned())
        } else if state.is_loading() {
            OutputRegion::Loading(LOADING_MESSAGE)
        } else if let Some(details) = state.result() {
            OutputRegion::Results(ResultsGrid::from_details(details))
        } else {
            OutputRegion::Empty
        };

        Self {
            input: state.postal_code_input().to_owned(),
            submit_enabled: !state.is_loading(),
            submit_label: if state.is_loading() {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL
            },
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for view derivation.

    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{FixturePostalLookupSource, PostalLookupError};
    use crate::domain::{LookupForm, PostOfficeRecord, PostOffices};

    fn form() -> LookupForm {
        LookupForm::new(Arc::new(FixturePostalLookupSource))
    }

    fn resolved_with(status: &str) -> LookupView {
        let mut form = form();
        form.set_input("110001");
        let submission = form.begin_submit().expect("valid input");
        let record = PostOfficeRecord {
            name: "Test PO".to_owned(),
            district: "D".to_owned(),
            state: "S".to_owned(),
            region: "R".to_owned(),
            division: "Dv".to_owned(),
            circle: "C".to_owned(),
            delivery_status: DeliveryStatus::from_label(status),
        };
        let offices = PostOffices::from_vec(vec![record]).expect("non-empty");
        form.complete(submission, Ok(offices));
        LookupView::from_state(form.state())
    }

    fn grid(view: &LookupView) -> &ResultsGrid {
        match &view.output {
            OutputRegion::Results(grid) => grid,
            other => panic!("expected results, got {other:?}"),
        }
    }

    #[test]
    fn loading_disables_submit_and_shows_indicator() {
        let mut form = form();
        form.set_input("110001");
        let _submission = form.begin_submit().expect("valid input");

        let view = LookupView::from_state(form.state());

        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, "Searching...");
        assert_eq!(view.output, OutputRegion::Loading(LOADING_MESSAGE));
    }

    #[test]
    fn results_grid_lists_fields_in_display_order() {
        let view = resolved_with("Delivery");
        let grid = grid(&view);

        let labels: Vec<_> = grid.rows.iter().map(|row| row.label).collect();
        assert_eq!(
            labels,
            [
                "PIN Code",
                "Post Office",
                "District",
                "State",
                "Region",
                "Division",
                "Circle"
            ]
        );
        assert_eq!(grid.value("PIN Code"), Some("110001"));
        assert_eq!(grid.value("Post Office"), Some("Test PO"));
        assert_eq!(grid.badge.label, "Delivery");
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, "Search");
    }

    #[test]
    fn delivery_badges_differ_by_status() {
        let delivery = resolved_with("Delivery");
        let non_delivery = resolved_with("Non-Delivery");

        assert_eq!(grid(&delivery).badge.tone, BadgeTone::Positive);
        assert_eq!(grid(&non_delivery).badge.tone, BadgeTone::Negative);
        assert_eq!(grid(&non_delivery).badge.label, "Non-Delivery");
    }

    #[test]
    fn error_banner_carries_message() {
        let mut form = form();
        form.set_input("110001");
        let submission = form.begin_submit().expect("valid input");
        form.complete(submission, Err(PostalLookupError::not_found()));

        let view = LookupView::from_state(form.state());

        assert_eq!(
            view.output,
            OutputRegion::Error("No post offices found for this PIN code".to_owned())
        );
    }
}
