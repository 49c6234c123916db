//! Built-in protocol command types.
//!
//! Each type only carries its [`CommandContext`]; the executor that acts on
//! it lives with the browser session management.

use crate::command::{creator, BuiltinCommand, Command, CommandContext, CommandCreator};

macro_rules! builtin_commands {
    ($($(#[$doc:meta])* $ty:ident => $name:literal,)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone)]
            pub struct $ty {
                context: CommandContext,
            }

            impl Command for $ty {
                fn name(&self) -> &'static str {
                    $name
                }

                fn context(&self) -> &CommandContext {
                    &self.context
                }
            }

            impl BuiltinCommand for $ty {
                const NAME: &'static str = $name;

                fn new(context: CommandContext) -> Self {
                    Self { context }
                }
            }
        )*

        /// Names of all built-in commands.
        pub const BUILTIN_COMMANDS: &[&str] = &[$($name),*];

        /// Looks up the factory of a built-in command by name.
        pub fn builtin_creator(name: &str) -> Option<CommandCreator> {
            match name {
                $($name => Some(creator::<$ty>()),)*
                _ => None,
            }
        }
    };
}

builtin_commands! {
    /// Server build and OS information.
    StatusCommand => "status",
    /// Server-wide log entries.
    GlobalLogCommand => "get_global_log",
    CreateSession => "new_session",
    /// Session capabilities lookup and session deletion.
    SessionWithId => "session",
    Sessions => "get_sessions",
    SetAsyncScriptTimeoutCommand => "set_script_timeout",
    ImplicitWaitCommand => "implicitly_wait",
    LogTypesCommand => "get_available_log_types",
    LogCommand => "get_session_logs",
    WindowSizeCommand => "window_size",
    WindowPositionCommand => "window_position",
    WindowMaximizeCommand => "maximize_window",
    TitleCommand => "get_title",
    ForwardCommand => "go_forward",
    BackCommand => "go_back",
    RefreshCommand => "refresh",
    ScreenshotCommand => "screenshot",
    KeysCommand => "send_keys",
    /// Moves to the element, then clicks it.
    MoveAndClickCommand => "click_element",
    HoverCommand => "hover_over_element",
    ClickCommand => "mouse_click",
    DoubleClickCommand => "mouse_double_click",
    ButtonDownCommand => "mouse_button_down",
    ButtonUpCommand => "mouse_button_up",
    MoveToCommand => "mouse_move_to",
    ElementClearCommand => "clear_element",
    ElementValueCommand => "send_keys_to_element",
    ElementSubmitCommand => "submit_element",
    ElementTextCommand => "get_element_text",
    ElementNameCommand => "get_element_tag_name",
    ElementSelectedCommand => "is_element_selected",
    ElementEnabledCommand => "is_element_enabled",
    ElementDisplayedCommand => "is_element_displayed",
    ElementLocationCommand => "get_element_location",
    ElementLocationInViewCommand => "get_element_location_in_view",
    ElementSizeCommand => "get_element_size",
    ElementAttributeCommand => "get_element_attribute",
    ElementCssCommand => "get_element_value_of_css_property",
    ElementEqualsCommand => "element_equals",
}
