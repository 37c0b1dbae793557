//! Parser for `tmux list-panes` output.
//!
//! Each line has the shape produced by [`LIST_PANES_FORMAT`]:
//!
//! ```text
//! <window_active><pane_active>:<session_attached>:<session_name>:<pane_title>
//! ```
//!
//! Only the focused pane of each session (active pane in the active window)
//! becomes a [`Session`].
//!
//! [`LIST_PANES_FORMAT`]: crate::LIST_PANES_FORMAT

use tmux_launcher_core::{Error, Result, Session};
use tracing::debug;

/// Combined flags value for "window active and pane active".
const FOCUSED_PANE: &str = "11";

/// Attached count tmux reports when no client is attached.
const NOT_ATTACHED: &str = "0";

/// Parse one list-panes line.
///
/// Returns `Ok(None)` for panes that are not focused and an error when the
/// line has fewer than four fields. Colons after the third separator belong
/// to the pane title.
pub fn parse_list_panes_line(line: &str, socket: Option<&str>) -> Result<Option<Session>> {
    let mut fields = line.splitn(4, ':');
    let (Some(active), Some(attached), Some(session_name), Some(title)) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(Error::MalformedLine(line.to_string()));
    };

    if active != FOCUSED_PANE {
        return Ok(None);
    }

    Ok(Some(Session::new(
        socket.map(str::to_string),
        session_name,
        title,
        attached != NOT_ATTACHED,
    )))
}

/// Parse full list-panes output into sessions, in output order.
///
/// Malformed lines are skipped.
pub fn parse_list_panes_output(output: &str, socket: Option<&str>) -> Vec<Session> {
    let mut sessions = Vec::new();
    for line in output.lines().filter(|line| !line.is_empty()) {
        match parse_list_panes_line(line, socket) {
            Ok(Some(session)) => sessions.push(session),
            Ok(None) => {}
            Err(e) => debug!("Skipping list-panes line: {}", e),
        }
    }
    sessions
}
