//! Result items returned to the host launcher.

use serde::{Deserialize, Serialize};

/// Action the host performs when the user picks an item.
///
/// The plugin never executes anything itself; it only describes what the
/// host should run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Run a command string through the shell
    #[serde(rename = "run_script")]
    RunShellCommand {
        /// Full command line to execute
        command: String,
    },
}

impl Action {
    /// Create a shell command action.
    pub fn run_shell(command: impl Into<String>) -> Self {
        Action::RunShellCommand {
            command: command.into(),
        }
    }

    /// Command line carried by this action.
    pub fn command(&self) -> &str {
        match self {
            Action::RunShellCommand { command } => command,
        }
    }
}

/// A single selectable entry in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Icon path, relative to the plugin directory
    pub icon: String,
    /// Primary text
    pub name: String,
    /// Secondary text
    pub description: String,
    /// What happens on selection
    pub on_enter: Action,
}
