//! Terminal sessions driving a [`LookupForm`].
//!
//! The terminal plays the host page: each line of input replaces the field
//! contents and submits the form, and the view is redrawn after every state
//! change.

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::render::render_view;
use crate::domain::{FormPhase, LookupForm, LookupView, TITLE};

const PROMPT: &str = "> ";
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Submit `raw` once and write the settled view to `out`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub async fn run_once(
    form: &mut LookupForm,
    raw: &str,
    out: &mut impl Write,
) -> io::Result<FormPhase> {
    form.set_input(raw);
    let phase = form.submit().await;
    draw(form, out)?;
    Ok(phase)
}

/// Read PIN codes line by line from `input` until EOF or `quit`/`exit`.
///
/// The loading state is drawn before each lookup and the settled state
/// after it.
///
/// # Errors
///
/// Propagates read failures from `input` and write failures from `out`.
pub async fn run_interactive<R>(
    form: &mut LookupForm,
    input: R,
    out: &mut impl Write,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    writeln!(out, "{TITLE}")?;
    draw(form, out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        let entry = line.trim();
        if QUIT_COMMANDS.contains(&entry) {
            break;
        }

        form.set_input(entry);
        if let Some(submission) = form.begin_submit() {
            draw(form, out)?;
            let outcome = form.source().lookup(submission.postal_code()).await;
            form.complete(submission, outcome);
        }
        draw(form, out)?;
        debug!(phase = ?form.phase(), "submission settled");
    }
    Ok(())
}

fn draw(form: &LookupForm, out: &mut impl Write) -> io::Result<()> {
    render_view(&LookupView::from_state(form.state()), out)
}
