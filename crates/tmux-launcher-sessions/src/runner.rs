//! Invocation of the tmux command line client.

use std::process::Command;

use tmux_launcher_core::{Error, Result};
use tracing::debug;

/// `list-panes -F` format: active flags, attached count, session name, pane title.
pub const LIST_PANES_FORMAT: &str =
    "#{window_active}#{pane_active}:#{session_attached}:#{session_name}:#{pane_title}";

/// Source of raw `list-panes` output.
///
/// The plugin only ever reads from tmux, so the seam is a single query.
/// Implementations return the raw stdout on success and an error when the
/// server could not be queried.
pub trait TmuxRunner {
    /// List every pane on the server selected by `socket` (`None` for the
    /// default server), formatted with [`LIST_PANES_FORMAT`].
    fn list_panes(&self, socket: Option<&str>) -> Result<String>;
}

impl<T: TmuxRunner + ?Sized> TmuxRunner for &T {
    fn list_panes(&self, socket: Option<&str>) -> Result<String> {
        (**self).list_panes(socket)
    }
}

/// Runs the real tmux binary as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct SystemTmux {
    binary: String,
}

impl SystemTmux {
    /// Create a runner for the given tmux executable.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Build the `list-panes` command for a server.
    pub fn list_panes_command(&self, socket: Option<&str>) -> Command {
        let mut command = Command::new(&self.binary);
        if let Some(socket) = socket {
            command.args(["-L", socket]);
        }
        command.args(["list-panes", "-a", "-F", LIST_PANES_FORMAT]);
        command
    }
}

impl Default for SystemTmux {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxRunner for SystemTmux {
    fn list_panes(&self, socket: Option<&str>) -> Result<String> {
        debug!("Running {} list-panes (socket: {:?})", self.binary, socket);

        let output = self
            .list_panes_command(socket)
            .output()
            .map_err(|source| Error::TmuxSpawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::TmuxFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
