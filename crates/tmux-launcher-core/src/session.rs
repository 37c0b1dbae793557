//! Session records surfaced by the launcher.

/// Prefix added to the title of sessions that no client is attached to.
pub const DETACHED_MARKER: &str = "(Detached) ";

/// One tmux session as seen through its focused pane.
///
/// A `Session` is built from the active pane of the active window of a tmux
/// session. It is immutable once built; a refresh replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    socket: Option<String>,
    session_name: String,
    attached: bool,
    title: String,
    description: String,
    search_key: String,
}

impl Session {
    /// Build a session record from the raw list-panes fields.
    ///
    /// `socket` is the `-L` server name the session was found on (`None` for
    /// the default server). Detached sessions get a `(Detached) ` title prefix.
    pub fn new(
        socket: Option<String>,
        session_name: impl Into<String>,
        pane_title: &str,
        attached: bool,
    ) -> Self {
        let session_name = session_name.into();
        let title = if attached {
            pane_title.to_string()
        } else {
            format!("{DETACHED_MARKER}{pane_title}")
        };
        let description = format!("Session {session_name}");
        let search_key = format!(
            "{} {}",
            title.to_lowercase(),
            session_name.to_lowercase()
        );

        Self {
            socket,
            session_name,
            attached,
            title,
            description,
            search_key,
        }
    }

    /// Server socket name, `None` for the default server.
    pub fn socket(&self) -> Option<&str> {
        self.socket.as_deref()
    }

    /// Session name as known to tmux.
    pub fn session_name(&self) -> &str {
        &self.session_name
    }

    /// Display title (pane title, possibly with the detached marker).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Human readable description, always `Session <name>`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lowercased title and session name used for matching.
    pub fn search_key(&self) -> &str {
        &self.search_key
    }

    /// Whether no client was attached when the session was listed.
    pub fn is_detached(&self) -> bool {
        !self.attached
    }

    /// Check whether an already lowercased needle occurs in the search key.
    pub fn matches(&self, needle: &str) -> bool {
        self.search_key.contains(needle)
    }
}
