//! Building result items and attach commands.

use std::borrow::Cow;

use tmux_launcher_core::{Action, ResultItem, Session};

/// Quote a value for a POSIX shell if it needs quoting.
///
/// Values made only of `[A-Za-z0-9_@%+=:,./-]` are returned unchanged;
/// anything else is wrapped in single quotes.
pub fn shell_quote(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed("''");
    }

    let safe = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));
    if safe {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("'{}'", value.replace('\'', "'\\''")))
    }
}

/// Build the shell command that attaches a terminal to `session`.
///
/// The template is used verbatim, followed by `-L <socket>` when the session
/// lives on a named server and `attach-session -t <session>`.
pub fn attach_command(session: &Session, attach_template: &str) -> String {
    let mut parts: Vec<Cow<'_, str>> = vec![Cow::Borrowed(attach_template)];
    if let Some(socket) = session.socket() {
        parts.push(Cow::Borrowed("-L"));
        parts.push(shell_quote(socket));
    }
    parts.push(Cow::Borrowed("attach-session -t"));
    parts.push(shell_quote(session.session_name()));
    parts.join(" ")
}

/// Map a session to the item shown by the launcher.
pub fn build_result(session: &Session, attach_template: &str, icon: &str) -> ResultItem {
    ResultItem {
        icon: icon.to_string(),
        name: session.title().to_string(),
        description: session.description().to_string(),
        on_enter: Action::run_shell(attach_command(session, attach_template)),
    }
}
