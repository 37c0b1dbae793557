//! # tmux Launcher Plugin
//!
//! Lists active tmux sessions for a launcher and lets the user jump to one by
//! opening a terminal attached to it.
//!
//! ## Overview
//!
//! The host launcher starts this binary and exchanges one JSON object per
//! line over stdio:
//! - query events are answered with a rendered result list
//! - preference events update the attach command and socket list
//!
//! Logs are written to stderr.
//!
//! ## Usage
//!
//! ```text
//! tmux-launcher [--config <path>]
//! ```

use anyhow::Context;
use tmux_launcher::{serve, TmuxExtension};
use tmux_launcher_core::LauncherConfig;
use tmux_launcher_sessions::SystemTmux;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .map(|i| {
            args.get(i + 1)
                .context("--config requires a path argument")
        })
        .transpose()?;

    let config = match config_path {
        Some(path) => LauncherConfig::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => LauncherConfig::default(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "tmux launcher v{} starting (tmux: {}, sockets: {:?})",
        env!("CARGO_PKG_VERSION"),
        config.tmux.binary,
        config.preferences.sockets
    );

    let runner = SystemTmux::new(config.tmux.binary.clone());
    let mut extension = TmuxExtension::from_config(runner, &config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(&mut extension, stdin.lock(), stdout.lock()).map_err(|e| {
        tracing::error!("Transport error: {}", e);
        e
    })?;

    tracing::info!("tmux launcher shutting down");

    Ok(())
}
