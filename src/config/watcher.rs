//! Hot reload of the route table from the configuration file.
//!
//! # Responsibilities
//! - Watch the config file for writes
//! - Rebuild the route table from a valid config and publish it
//! - Keep the published table when the new config does not load
//!
//! Every reload attempt is reported as a [`ReloadEvent`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::lifecycle::build_route_table;
use crate::routing::SharedRouteTable;

/// Outcome of one reload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadEvent {
    /// A new table with this many routes was published.
    Applied { routes: usize },
    /// The config failed to load; the previous table stays published.
    Rejected(String),
}

/// Republishes a [`SharedRouteTable`] whenever its config file changes.
pub struct ConfigWatcher {
    path: PathBuf,
    routes: SharedRouteTable,
    events: mpsc::UnboundedSender<ReloadEvent>,
}

impl ConfigWatcher {
    /// Returns the watcher and a receiver of reload outcomes.
    pub fn new(
        path: &Path,
        routes: SharedRouteTable,
    ) -> (Self, mpsc::UnboundedReceiver<ReloadEvent>) {
        let (events, events_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                routes,
                events,
            },
            events_rx,
        )
    }

    /// Loads the config file once and publishes the resulting table if it is valid.
    pub fn reload(&self) -> ReloadEvent {
        let event = match load_config(&self.path) {
            Ok(config) => {
                let table = build_route_table(&config.routes);
                let routes = table.len();
                self.routes.store(table);
                ReloadEvent::Applied { routes }
            }
            Err(e) => {
                tracing::error!(
                    path = ?self.path,
                    error = %e,
                    "Reload rejected, keeping current routes"
                );
                ReloadEvent::Rejected(e.to_string())
            }
        };

        let _ = self.events.send(event.clone());
        event
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    tracing::info!(path = ?self.path, "Config file changed");
                    self.reload();
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = %e, "Watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Config watcher started");
        Ok(watcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteTable;

    #[test]
    fn test_reload_publishes_valid_config() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[routes]\nremove = [\"/log\"]\n").unwrap();

        let shared = SharedRouteTable::new(RouteTable::new());
        let (watcher, mut events) = ConfigWatcher::new(file.path(), shared.clone());

        let event = watcher.reload();
        assert!(matches!(event, ReloadEvent::Applied { .. }));
        assert_eq!(events.try_recv().unwrap(), event);
        assert!(shared.resolve("/status").is_some());
        assert!(shared.resolve("/log").is_none());
    }

    #[test]
    fn test_rejected_reload_keeps_table() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[logging]\nlevel = \"loud\"\n").unwrap();

        let mut table = RouteTable::new();
        table.add::<crate::command::builtin::StatusCommand>("/status");
        let shared = SharedRouteTable::new(table);
        let (watcher, mut events) = ConfigWatcher::new(file.path(), shared.clone());

        let event = watcher.reload();
        assert!(matches!(&event, ReloadEvent::Rejected(msg) if msg.contains("loud")));
        assert_eq!(events.try_recv().unwrap(), event);
        assert_eq!(shared.snapshot().routes(), vec!["/status"]);
    }
}
