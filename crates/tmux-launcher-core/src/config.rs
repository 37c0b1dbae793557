//! Configuration types for the tmux launcher plugin.
//!
//! Two layers exist: [`LauncherConfig`] is read from an optional YAML file
//! at startup, and [`PluginConfig`] holds the two host preferences that can
//! change while the plugin runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Host preference key for the attach command template.
pub const PREF_ATTACH_COMMAND: &str = "tmux_attach_cmd";

/// Host preference key for the whitespace-separated socket list.
pub const PREF_SOCKETS: &str = "tmux_sockets";

/// Attach command template used until the host says otherwise.
pub const DEFAULT_ATTACH_COMMAND: &str = "xterm -e tmux";

/// Launcher configuration loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LauncherConfig {
    /// Initial preference values
    pub preferences: PluginConfig,
    /// tmux invocation settings
    pub tmux: TmuxSettings,
    /// Result presentation settings
    pub display: DisplaySettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl LauncherConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> crate::Result<Self> {
        let config: LauncherConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        if self.preferences.attach_command.trim().is_empty() {
            return Err(crate::Error::Config(
                "preferences.attach_command cannot be empty".to_string(),
            ));
        }

        for socket in &self.preferences.sockets {
            if socket.is_empty() || socket.chars().any(char::is_whitespace) {
                return Err(crate::Error::Config(format!(
                    "invalid socket name {socket:?}"
                )));
            }
        }

        if self.tmux.binary.trim().is_empty() {
            return Err(crate::Error::Config(
                "tmux.binary cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// The preferences owned by the host launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Shell command prefix that runs tmux inside a terminal emulator
    pub attach_command: String,
    /// Extra tmux sockets (`-L` names) to list besides the default server
    pub sockets: Vec<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            attach_command: DEFAULT_ATTACH_COMMAND.to_string(),
            sockets: Vec::new(),
        }
    }
}

impl PluginConfig {
    /// Apply every known key of the host's preference bag.
    ///
    /// Keys that are missing keep their current value. Keys this plugin does
    /// not own (the launcher keyword, for instance) are ignored.
    pub fn merge_preferences(&mut self, preferences: &Map<String, Value>) -> crate::Result<()> {
        for (key, value) in preferences {
            self.apply_update(key, value)?;
        }
        Ok(())
    }

    /// Apply a single preference change.
    ///
    /// Returns `Ok(true)` when the key belongs to this plugin and was applied,
    /// `Ok(false)` when the key is not ours. A non-string value for one of
    /// our keys is rejected and leaves the config untouched.
    pub fn apply_update(&mut self, key: &str, value: &Value) -> crate::Result<bool> {
        if key != PREF_ATTACH_COMMAND && key != PREF_SOCKETS {
            return Ok(false);
        }

        let text = value.as_str().ok_or_else(|| {
            crate::Error::InvalidInput(format!("preference '{key}' must be a string, got {value}"))
        })?;

        if key == PREF_ATTACH_COMMAND {
            self.attach_command = text.to_string();
        } else {
            self.sockets = parse_socket_list(text);
        }
        Ok(true)
    }
}

/// Split a whitespace-separated socket list.
pub fn parse_socket_list(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// tmux invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmuxSettings {
    /// tmux executable name or path
    pub binary: String,
}

impl Default for TmuxSettings {
    fn default() -> Self {
        Self {
            binary: "tmux".to_string(),
        }
    }
}

/// Result presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Icon path attached to every result item
    pub icon: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            icon: "images/icon.png".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
