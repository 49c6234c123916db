//! Shared utilities for integration tests.

use webdriver_dispatch::command::{factory_fn, Command, CommandContext, CommandCreator};

/// A command that only records which factory produced it.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Tagged {
    pub tag: &'static str,
    pub context: CommandContext,
}

impl Command for Tagged {
    fn name(&self) -> &'static str {
        self.tag
    }

    fn context(&self) -> &CommandContext {
        &self.context
    }
}

/// A factory whose commands are named `tag`.
#[allow(dead_code)]
pub fn tagged(tag: &'static str) -> CommandCreator {
    factory_fn(tag, move |context| -> Box<dyn Command> {
        Box::new(Tagged { tag, context })
    })
}

/// The command name a path resolves to, if any.
#[allow(dead_code)]
pub fn resolved(table: &webdriver_dispatch::RouteTable, path: &str) -> Option<&'static str> {
    table.resolve(path).map(|c| c.command_name())
}
