//! tmux Launcher Plugin Library
//!
//! This library contains the host protocol types, the query handler and the
//! stdio transport. The actual plugin binary is in main.rs.

pub mod protocol;

// Re-export commonly used types
pub use protocol::{serve, HostEvent, HostResponse, Snapshot, TmuxExtension};
