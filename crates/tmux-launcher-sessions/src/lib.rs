//! # tmux-launcher-sessions
//!
//! Session discovery and result shaping for the tmux launcher plugin.
//!
//! This crate provides:
//! - A [`TmuxRunner`] seam and the [`SystemTmux`] runner that shells out to tmux
//! - Parsing of `tmux list-panes` output into [`Session`] records
//! - Per-socket listing and full refreshes via [`SessionLister`]
//! - Case-insensitive query filtering
//! - Result item and attach command building
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends on tmux-launcher-core
//! and is driven by the plugin's query handler.
//!
//! [`Session`]: tmux_launcher_core::Session

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod filter;
pub mod lister;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use builder::{attach_command, build_result, shell_quote};
pub use filter::filter_sessions;
pub use lister::SessionLister;
pub use parser::{parse_list_panes_line, parse_list_panes_output};
pub use runner::{SystemTmux, TmuxRunner, LIST_PANES_FORMAT};
