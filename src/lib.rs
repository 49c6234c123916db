//! WebDriver request dispatch core.
//!
//! Maps request paths to the command factories that handle them.

pub mod command;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use command::{Command, CommandContext, CommandCreator, CommandFactory};
pub use config::DispatchConfig;
pub use routing::{RouteTable, SharedRouteTable};
