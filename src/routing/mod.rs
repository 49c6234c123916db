//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → table.rs (ordered scan)
//!     → matcher.rs (segment-by-segment comparison)
//!     → Return: command factory or no match
//!
//! Table assembly (at startup or reload):
//!     defaults.rs (built-in routes, fixed order)
//!     → config removals and custom routes
//!     → shared.rs (atomic publish)
//! ```
//!
//! # Design Decisions
//! - First match wins, in registration order
//! - Only single-segment `*` wildcards, no regex
//! - Path only; HTTP methods are the command's concern
//! - Unknown paths are an explicit `None`, not an error

pub mod defaults;
pub mod matcher;
pub mod patterns;
pub mod shared;
pub mod table;

pub use defaults::default_route_table;
pub use matcher::match_pattern;
pub use patterns::CommandRoutes;
pub use shared::SharedRouteTable;
pub use table::{RouteEntry, RouteSummary, RouteTable};
