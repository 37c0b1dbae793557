//! # tmux-launcher-core
//!
//! Core types for the tmux launcher plugin.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other tmux-launcher crates. It provides:
//!
//! - Session records parsed from `tmux list-panes`
//! - Result items and the actions handed back to the host
//! - Configuration types (file settings and host preferences)
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - the other crates depend on this one,
//! but this crate has no dependencies on other tmux-launcher crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod result;
pub mod session;

// Re-export commonly used types
pub use config::{
    DisplaySettings, LauncherConfig, LoggingSettings, PluginConfig, TmuxSettings,
    DEFAULT_ATTACH_COMMAND, PREF_ATTACH_COMMAND, PREF_SOCKETS,
};
pub use error::{Error, Result};
pub use result::{Action, ResultItem};
pub use session::Session;
