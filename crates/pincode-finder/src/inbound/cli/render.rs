//! Plain-text rendering of [`LookupView`].

use std::io::{self, Write};

use crate::domain::view::{INPUT_PLACEHOLDER, RESULTS_HEADING};
use crate::domain::{BadgeTone, LookupView, OutputRegion, ResultsGrid, StatusBadge};

const DELIVERY_STATUS_LABEL: &str = "Delivery Status";

/// Write `view` to `out` as plain text.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_view(view: &LookupView, out: &mut impl Write) -> io::Result<()> {
    let input = if view.input.is_empty() {
        INPUT_PLACEHOLDER
    } else {
        view.input.as_str()
    };
    let button = if view.submit_enabled {
        format!("[{}]", view.submit_label)
    } else {
        format!("[{} (disabled)]", view.submit_label)
    };
    writeln!(out, "PIN code: {input}  {button}")?;

    match &view.output {
        OutputRegion::Empty => Ok(()),
        OutputRegion::Error(message) => writeln!(out, "Error: {message}"),
        OutputRegion::Loading(message) => writeln!(out, "{message}"),
        OutputRegion::Results(grid) => render_grid(grid, out),
    }
}

fn render_grid(grid: &ResultsGrid, out: &mut impl Write) -> io::Result<()> {
    let width = grid
        .rows
        .iter()
        .map(|row| row.label.len())
        .chain(std::iter::once(DELIVERY_STATUS_LABEL.len()))
        .max()
        .unwrap_or_default()
        + 1;

    writeln!(out, "{RESULTS_HEADING}")?;
    for row in &grid.rows {
        let label = format!("{}:", row.label);
        writeln!(out, "  {label:<width$} {}", row.value)?;
    }
    let label = format!("{DELIVERY_STATUS_LABEL}:");
    writeln!(out, "  {label:<width$} {}", badge(&grid.badge))
}

/// Format a badge so the two tones never look alike.
fn badge(badge: &StatusBadge) -> String {
    match badge.tone {
        BadgeTone::Positive => format!("[+ {}]", badge.label),
        BadgeTone::Negative => format!("[- {}]", badge.label),
    }
}
