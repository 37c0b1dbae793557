//! Query handling for the tmux launcher plugin.
//!
//! [`TmuxExtension`] owns all per-instance state: the current preferences
//! and the last session snapshot. The host drives it one event at a time.

use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use tmux_launcher_core::{LauncherConfig, PluginConfig, Result, ResultItem, Session};
use tmux_launcher_sessions::{build_result, filter_sessions, SessionLister, TmuxRunner};

use super::events::{HostEvent, HostResponse};

/// Sessions known to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Snapshot {
    /// No refresh has happened yet
    #[default]
    Uninitialized,

    /// Result of the last refresh
    Ready(Vec<Session>),
}

impl Snapshot {
    /// Sessions of a ready snapshot.
    pub fn sessions(&self) -> Option<&[Session]> {
        match self {
            Snapshot::Uninitialized => None,
            Snapshot::Ready(sessions) => Some(sessions),
        }
    }
}

/// The plugin instance.
#[derive(Debug)]
pub struct TmuxExtension<R> {
    config: PluginConfig,
    icon: String,
    lister: SessionLister<R>,
    snapshot: Snapshot,
}

impl<R: TmuxRunner> TmuxExtension<R> {
    /// Create a plugin instance with explicit preferences and icon.
    pub fn new(runner: R, config: PluginConfig, icon: impl Into<String>) -> Self {
        Self {
            config,
            icon: icon.into(),
            lister: SessionLister::new(runner),
            snapshot: Snapshot::Uninitialized,
        }
    }

    /// Create a plugin instance from the launcher configuration file.
    pub fn from_config(runner: R, config: &LauncherConfig) -> Self {
        Self::new(runner, config.preferences.clone(), config.display.icon.clone())
    }

    /// Current preferences.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Dispatch one host event.
    ///
    /// Only queries produce a response. Preference events that carry bad
    /// values are logged and otherwise ignored.
    pub fn handle(&mut self, event: HostEvent) -> Option<HostResponse> {
        match event {
            HostEvent::Query { argument } => Some(HostResponse::RenderResultList {
                items: self.on_query(argument.as_deref()),
            }),
            HostEvent::Preferences { preferences } => {
                if let Err(e) = self.on_preferences(&preferences) {
                    warn!("Ignoring preference snapshot: {}", e);
                }
                None
            }
            HostEvent::PreferencesUpdate { id, new_value, .. } => {
                if let Err(e) = self.on_preferences_update(&id, &new_value) {
                    warn!("Ignoring preference update: {}", e);
                }
                None
            }
        }
    }

    /// Answer a query with the matching sessions.
    ///
    /// The snapshot is refreshed on the first query and on every query that
    /// carries a search term; an empty query reuses the existing snapshot.
    #[instrument(skip_all)]
    pub fn on_query(&mut self, argument: Option<&str>) -> Vec<ResultItem> {
        let query = argument.filter(|arg| !arg.is_empty());

        if query.is_some() || matches!(self.snapshot, Snapshot::Uninitialized) {
            let sessions = self.lister.refresh_all(&self.config.sockets);
            debug!("Refreshed snapshot: {} session(s)", sessions.len());
            self.snapshot = Snapshot::Ready(sessions);
        }

        let sessions = self.snapshot.sessions().unwrap_or_default();
        filter_sessions(sessions, query)
            .iter()
            .map(|session| build_result(session, &self.config.attach_command, &self.icon))
            .collect()
    }

    /// Apply the host's full preference snapshot.
    #[instrument(skip_all)]
    pub fn on_preferences(&mut self, preferences: &Map<String, Value>) -> Result<()> {
        let mut config = self.config.clone();
        config.merge_preferences(preferences)?;
        info!(
            "Preferences loaded: attach_command={:?}, sockets={:?}",
            config.attach_command, config.sockets
        );
        self.config = config;
        Ok(())
    }

    /// Apply one changed preference.
    ///
    /// Takes effect on the next refresh; the snapshot is left alone.
    #[instrument(skip_all)]
    pub fn on_preferences_update(&mut self, id: &str, value: &Value) -> Result<()> {
        if self.config.apply_update(id, value)? {
            info!("Preference {} updated", id);
        } else {
            debug!("Ignoring preference {} (not used by this plugin)", id);
        }
        Ok(())
    }
}
