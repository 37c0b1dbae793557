//! Host event and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tmux_launcher_core::ResultItem;

// =============================================================================
// Incoming
// =============================================================================

/// Event delivered by the launcher host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The user typed after the plugin keyword
    Query {
        /// Text after the keyword, absent when nothing was typed
        #[serde(default)]
        argument: Option<String>,
    },

    /// Full preference snapshot, sent once at startup
    Preferences {
        /// Loosely typed preference bag
        preferences: Map<String, Value>,
    },

    /// A single preference changed
    PreferencesUpdate {
        /// Preference key
        id: String,
        /// New value
        new_value: Value,
        /// Previous value, informational only
        #[serde(default)]
        old_value: Option<Value>,
    },
}

// =============================================================================
// Outgoing
// =============================================================================

/// Response written back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostResponse {
    /// Replace the visible result list
    RenderResultList {
        /// Items in display order
        items: Vec<ResultItem>,
    },
}
