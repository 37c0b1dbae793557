//! Host Protocol Layer
//!
//! The launcher host talks to the plugin with one JSON object per line on
//! stdin and reads rendered result lists from stdout.

pub mod events;
pub mod extension;
pub mod transport;

pub use events::{HostEvent, HostResponse};
pub use extension::{Snapshot, TmuxExtension};
pub use transport::serve;
