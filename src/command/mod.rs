//! Command factories and request context.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → RouteTable::resolve (first matching pattern)
//!     → CommandCreator (Arc<dyn CommandFactory>)
//!     → CommandFactory::create(CommandContext)
//!     → Box<dyn Command>, handed to the executor
//! ```
//!
//! # Design Decisions
//! - Factories are opaque capabilities; the route table never inspects them
//! - Commands are created per request and owned by the caller
//! - Executing a command is outside this crate

pub mod builtin;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

pub use builtin::{builtin_creator, BUILTIN_COMMANDS};

/// Shared reference to a command factory, as stored in the route table.
pub type CommandCreator = Arc<dyn CommandFactory>;

/// Per-request data handed to a factory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandContext {
    path: String,
    segments: Vec<String>,
    captures: Vec<String>,
}

impl CommandContext {
    /// Build a context for `path`, with the values captured by the pattern's wildcards.
    pub fn new(path: impl Into<String>, captures: Vec<String>) -> Self {
        let path = path.into();
        let segments = path.split('/').map(str::to_string).collect();
        Self {
            path,
            segments,
            captures,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Values matched by `*` segments, in pattern order.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    pub fn capture(&self, index: usize) -> Option<&str> {
        self.captures.get(index).map(String::as_str)
    }

    /// Returns the segment that follows the first occurrence of `literal`.
    ///
    /// ```
    /// use webdriver_dispatch::command::CommandContext;
    ///
    /// let ctx = CommandContext::new("/session/42/element/7/text", vec![]);
    /// assert_eq!(ctx.variable_after("element"), Some("7"));
    /// ```
    pub fn variable_after(&self, literal: &str) -> Option<&str> {
        self.segments
            .iter()
            .position(|segment| segment == literal)
            .and_then(|index| self.segments.get(index + 1))
            .map(String::as_str)
    }

    pub fn session_id(&self) -> Option<&str> {
        self.variable_after("session")
    }

    pub fn element_id(&self) -> Option<&str> {
        self.variable_after("element")
    }
}

/// A protocol command instance produced for one request.
pub trait Command: Send + fmt::Debug {
    /// Stable command name, e.g. `get_title`.
    fn name(&self) -> &'static str;

    fn context(&self) -> &CommandContext;
}

/// Capability that produces a command for a matched request.
pub trait CommandFactory: Send + Sync {
    /// Name of the command this factory produces.
    fn command_name(&self) -> &'static str;

    fn create(&self, context: CommandContext) -> Box<dyn Command>;
}

/// Commands constructible from a context alone.
pub trait BuiltinCommand: Command + Sized + 'static {
    const NAME: &'static str;

    fn new(context: CommandContext) -> Self;
}

/// Generic factory for a [`BuiltinCommand`] type.
pub struct Creator<C> {
    _command: PhantomData<fn() -> C>,
}

impl<C> Creator<C> {
    pub fn new() -> Self {
        Self {
            _command: PhantomData,
        }
    }
}

impl<C> Default for Creator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: BuiltinCommand> CommandFactory for Creator<C> {
    fn command_name(&self) -> &'static str {
        C::NAME
    }

    fn create(&self, context: CommandContext) -> Box<dyn Command> {
        Box::new(C::new(context))
    }
}

/// Returns a shared factory for the command type `C`.
pub fn creator<C: BuiltinCommand>() -> CommandCreator {
    Arc::new(Creator::<C>::new())
}

/// Factory backed by a closure.
pub struct FnFactory<F> {
    name: &'static str,
    create: F,
}

impl<F> CommandFactory for FnFactory<F>
where
    F: Fn(CommandContext) -> Box<dyn Command> + Send + Sync,
{
    fn command_name(&self) -> &'static str {
        self.name
    }

    fn create(&self, context: CommandContext) -> Box<dyn Command> {
        (self.create)(context)
    }
}

/// Wraps a closure as a shared factory.
pub fn factory_fn<F>(name: &'static str, create: F) -> CommandCreator
where
    F: Fn(CommandContext) -> Box<dyn Command> + Send + Sync + 'static,
{
    Arc::new(FnFactory { name, create })
}
