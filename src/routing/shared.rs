//! Concurrent access to a route table.
//!
//! `RouteTable` itself is unsynchronized. This wrapper publishes immutable
//! snapshots through `ArcSwap`: readers never block, and writers replace the
//! whole table with a modified copy.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::command::{Command, CommandCreator};
use crate::routing::table::RouteTable;

/// A route table shared between request handlers and a reloader.
#[derive(Clone)]
pub struct SharedRouteTable {
    table: Arc<ArcSwap<RouteTable>>,
}

impl SharedRouteTable {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(ArcSwap::from_pointee(table)),
        }
    }

    /// Current table. Later updates do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<RouteTable> {
        self.table.load_full()
    }

    pub fn resolve(&self, path: &str) -> Option<CommandCreator> {
        self.table.load().resolve(path)
    }

    pub fn create_command(&self, path: &str) -> Option<Box<dyn Command>> {
        self.table.load().create_command(path)
    }

    /// Replaces the whole table.
    pub fn store(&self, table: RouteTable) {
        tracing::info!(routes = table.len(), "Route table replaced");
        self.table.store(Arc::new(table));
    }

    /// Applies `change` to a copy of the current table and publishes it.
    ///
    /// `change` may run more than once if writers race.
    pub fn update<F>(&self, change: F)
    where
        F: Fn(&mut RouteTable),
    {
        self.table.rcu(|current| {
            let mut next = RouteTable::clone(current);
            change(&mut next);
            next
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::builtin::{StatusCommand, TitleCommand};

    #[test]
    fn test_update_leaves_snapshot_untouched() {
        let mut table = RouteTable::new();
        table.add::<StatusCommand>("/status");
        let shared = SharedRouteTable::new(table);

        let before = shared.snapshot();
        shared.update(|t| t.add::<TitleCommand>("/session/*/title"));

        assert_eq!(before.routes(), vec!["/status"]);
        assert_eq!(shared.snapshot().routes(), vec!["/status", "/session/*/title"]);
        assert!(shared.resolve("/session/1/title").is_some());
    }

    #[test]
    fn test_store_replaces_table() {
        let shared = SharedRouteTable::new(RouteTable::new());
        assert!(shared.resolve("/status").is_none());

        let mut table = RouteTable::new();
        table.add::<StatusCommand>("/status");
        shared.store(table);

        assert_eq!(shared.create_command("/status").unwrap().name(), "status");
    }

    #[test]
    fn test_clones_share_table() {
        let shared = SharedRouteTable::new(RouteTable::new());
        let handle = shared.clone();
        handle.update(|t| t.add::<StatusCommand>("/status"));
        assert!(shared.resolve("/status").is_some());
    }
}
