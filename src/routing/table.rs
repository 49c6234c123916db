//! Ordered route table.
//!
//! # Responsibilities
//! - Register patterns against command factories
//! - Replace, remove, list and clear routes
//! - Resolve a request path to the first matching route
//!
//! # Design Decisions
//! - Table order is the only priority signal; first match wins
//! - Re-registering a pattern replaces its factory in place
//! - Not synchronized; see `SharedRouteTable` for concurrent use
//! - O(n) registration and resolution, no prefix index

use std::fmt;

use serde::Serialize;

use crate::command::{creator, BuiltinCommand, Command, CommandContext, CommandCreator};
use crate::routing::matcher::{captures, match_pattern, validate_pattern};
use crate::routing::patterns::CommandRoutes;

/// One pattern bound to one command factory.
#[derive(Clone)]
pub struct RouteEntry {
    pattern: String,
    creator: CommandCreator,
}

impl RouteEntry {
    pub fn new(pattern: impl Into<String>, creator: CommandCreator) -> Self {
        Self {
            pattern: pattern.into(),
            creator,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn creator(&self) -> &CommandCreator {
        &self.creator
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern)
            .field("command", &self.creator.command_name())
            .finish()
    }
}

/// Serializable view of a route, for introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub pattern: String,
    pub command: &'static str,
}

/// Ordered registry of routes.
///
/// `Clone` duplicates the entry sequence; the copies evolve independently.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `creator` for `pattern`.
    ///
    /// An existing route with the same pattern keeps its position and gets the
    /// new factory. Otherwise the route goes before the first existing route it
    /// takes precedence over, or at the end.
    pub fn add_route(&mut self, pattern: &str, creator: CommandCreator) {
        if !CommandRoutes::is_standard(pattern) {
            if let Err(e) = validate_pattern(pattern) {
                tracing::warn!(pattern, error = %e, "Accepting malformed custom route");
            }
        }

        if let Some(route) = self.routes.iter_mut().find(|r| r.pattern == pattern) {
            tracing::debug!(
                pattern,
                previous = route.creator.command_name(),
                command = creator.command_name(),
                "Replacing route"
            );
            *route = RouteEntry::new(pattern, creator);
            return;
        }

        let index = self
            .routes
            .iter()
            .position(|r| precedes(pattern, &r.pattern))
            .unwrap_or(self.routes.len());

        tracing::debug!(pattern, command = creator.command_name(), index, "Adding route");
        self.routes.insert(index, RouteEntry::new(pattern, creator));
    }

    /// Registers the built-in command type `C` for `pattern`.
    pub fn add<C: BuiltinCommand>(&mut self, pattern: &str) {
        self.add_route(pattern, creator::<C>());
    }

    /// Removes the route registered for `pattern`, if any.
    pub fn remove_route(&mut self, pattern: &str) {
        if let Some(index) = self.routes.iter().position(|r| r.pattern == pattern) {
            self.routes.remove(index);
            tracing::debug!(pattern, "Removed route");
        }
    }

    pub fn has_route(&self, pattern: &str) -> bool {
        self.routes.iter().any(|r| r.pattern == pattern)
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    /// Registered patterns in table order.
    pub fn routes(&self) -> Vec<String> {
        self.routes.iter().map(|r| r.pattern.clone()).collect()
    }

    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.routes
            .iter()
            .map(|r| RouteSummary {
                pattern: r.pattern.clone(),
                command: r.creator.command_name(),
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the first route whose pattern matches `path`.
    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|r| match_pattern(path, &r.pattern))
    }

    /// Returns the factory of the first route whose pattern matches `path`,
    /// or `None` if the request is unhandled.
    pub fn resolve(&self, path: &str) -> Option<CommandCreator> {
        self.lookup(path).map(|r| r.creator.clone())
    }

    /// Resolves `path` and builds its command.
    pub fn create_command(&self, path: &str) -> Option<Box<dyn Command>> {
        let route = self.lookup(path)?;
        let captured = captures(path, &route.pattern)?
            .into_iter()
            .map(str::to_string)
            .collect();
        Some(route.creator.create(CommandContext::new(path, captured)))
    }
}

/// Whether `new` should be tried before `existing`.
///
/// Registration order is the only priority signal, so this never reorders.
fn precedes(_new: &str, _existing: &str) -> bool {
    false
}
