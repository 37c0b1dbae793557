//! Listing sessions across tmux servers.

use tmux_launcher_core::Session;
use tracing::{debug, warn};

use crate::parser::parse_list_panes_output;
use crate::runner::TmuxRunner;

/// Lists sessions from the default tmux server and any extra sockets.
#[derive(Debug, Clone)]
pub struct SessionLister<R> {
    runner: R,
}

impl<R: TmuxRunner> SessionLister<R> {
    /// Create a lister on top of a runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// List the sessions of one server.
    ///
    /// Any failure to query tmux (binary missing, no server running, non-zero
    /// exit) yields an empty list.
    pub fn list_sessions(&self, socket: Option<&str>) -> Vec<Session> {
        match self.runner.list_panes(socket) {
            Ok(output) => {
                let sessions = parse_list_panes_output(&output, socket);
                debug!(
                    "Found {} session(s) on {}",
                    sessions.len(),
                    socket.unwrap_or("default server")
                );
                sessions
            }
            Err(e) => {
                warn!(
                    "Could not list tmux panes on {}: {}",
                    socket.unwrap_or("default server"),
                    e
                );
                Vec::new()
            }
        }
    }

    /// List the default server followed by each socket, in order.
    pub fn refresh_all(&self, sockets: &[String]) -> Vec<Session> {
        let mut sessions = self.list_sessions(None);
        for socket in sockets {
            sessions.extend(self.list_sessions(Some(socket)));
        }
        sessions
    }
}
