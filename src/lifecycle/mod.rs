//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! DispatchConfig
//!     → startup.rs (assemble RouteTable)
//!     → SharedRouteTable (published to request handlers)
//! ```

pub mod startup;

pub use startup::build_route_table;
