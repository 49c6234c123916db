//! Startup orchestration.
//!
//! # Responsibilities
//! - Assemble the route table from the default set and configuration
//!
//! # Design Decisions
//! - Order: defaults, then removals, then custom routes
//! - A custom route with a standard pattern replaces the built-in factory in place
//! - Unknown commands are skipped here; validation reports them before startup

use crate::command::builtin_creator;
use crate::config::RoutesConfig;
use crate::routing::defaults::register_defaults;
use crate::routing::RouteTable;

/// Build a route table from `config`.
pub fn build_route_table(config: &RoutesConfig) -> RouteTable {
    let mut table = RouteTable::new();

    if config.defaults {
        register_defaults(&mut table);
    }

    for pattern in &config.remove {
        if !table.has_route(pattern) {
            tracing::warn!(pattern = %pattern, "Removal of unregistered route ignored");
        }
        table.remove_route(pattern);
    }

    for route in &config.custom {
        match builtin_creator(&route.command) {
            Some(creator) => table.add_route(&route.pattern, creator),
            None => tracing::error!(
                pattern = %route.pattern,
                command = %route.command,
                "Skipping route with unknown command"
            ),
        }
    }

    tracing::info!(
        routes = table.len(),
        defaults = config.defaults,
        removed = config.remove.len(),
        custom = config.custom.len(),
        "Route table built"
    );

    table
}
