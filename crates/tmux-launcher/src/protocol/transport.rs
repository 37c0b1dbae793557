//! Line-delimited JSON transport.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use tmux_launcher_core::Result;
use tmux_launcher_sessions::TmuxRunner;

use super::events::HostEvent;
use super::extension::TmuxExtension;

/// Serve host events from `input` until EOF, writing responses to `output`.
///
/// Events are handled strictly one after another. Lines that are not valid
/// events are logged and skipped.
pub fn serve<R, I, O>(extension: &mut TmuxExtension<R>, input: I, mut output: O) -> Result<()>
where
    R: TmuxRunner,
    I: BufRead,
    O: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: HostEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                warn!("Skipping invalid host event: {}", e);
                continue;
            }
        };
        debug!("Received event: {:?}", event);

        if let Some(response) = extension.handle(event) {
            serde_json::to_writer(&mut output, &response)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
    }

    debug!("Host closed input");
    Ok(())
}
