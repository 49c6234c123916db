//! Default route set for the built-in commands.
//!
//! Resolution is first-match in registration order, so routes are listed
//! deliberately: nothing here may shadow a later route of equal segment count.

use crate::command::builtin::*;
use crate::routing::patterns::CommandRoutes;
use crate::routing::table::RouteTable;

/// Registers the built-in routes into `table`.
pub fn register_defaults(table: &mut RouteTable) {
    table.add::<StatusCommand>(CommandRoutes::STATUS);
    table.add::<GlobalLogCommand>(CommandRoutes::GET_LOG);
    table.add::<CreateSession>(CommandRoutes::NEW_SESSION);
    table.add::<SessionWithId>(CommandRoutes::SESSION);
    table.add::<Sessions>(CommandRoutes::SESSIONS);
    table.add::<SetAsyncScriptTimeoutCommand>(CommandRoutes::SET_SCRIPT_TIMEOUT);
    table.add::<ImplicitWaitCommand>(CommandRoutes::IMPLICITLY_WAIT);
    table.add::<LogTypesCommand>(CommandRoutes::GET_AVAILABLE_LOG_TYPES);
    table.add::<LogCommand>(CommandRoutes::GET_SESSION_LOGS);
    table.add::<WindowSizeCommand>(CommandRoutes::WINDOW_SIZE);
    table.add::<WindowPositionCommand>(CommandRoutes::WINDOW_POSITION);
    table.add::<WindowMaximizeCommand>(CommandRoutes::MAXIMIZE_WINDOW);
    table.add::<TitleCommand>(CommandRoutes::GET_TITLE);
    table.add::<ForwardCommand>(CommandRoutes::GO_FORWARD);
    table.add::<BackCommand>(CommandRoutes::GO_BACK);
    table.add::<RefreshCommand>(CommandRoutes::REFRESH);
    table.add::<ScreenshotCommand>(CommandRoutes::SCREENSHOT);
    table.add::<KeysCommand>(CommandRoutes::SEND_KEYS);
    table.add::<MoveAndClickCommand>(CommandRoutes::CLICK_ELEMENT);
    table.add::<HoverCommand>(CommandRoutes::HOVER_OVER_ELEMENT);
    table.add::<ClickCommand>(CommandRoutes::MOUSE_CLICK);
    table.add::<DoubleClickCommand>(CommandRoutes::MOUSE_DOUBLE_CLICK);
    table.add::<ButtonDownCommand>(CommandRoutes::MOUSE_BUTTON_DOWN);
    table.add::<ButtonUpCommand>(CommandRoutes::MOUSE_BUTTON_UP);
    table.add::<MoveToCommand>(CommandRoutes::MOUSE_MOVE_TO);

    table.add::<ElementClearCommand>(CommandRoutes::CLEAR_ELEMENT);
    table.add::<ElementValueCommand>(CommandRoutes::SEND_KEYS_TO_ELEMENT);
    table.add::<ElementSubmitCommand>(CommandRoutes::SUBMIT_ELEMENT);
    table.add::<ElementTextCommand>(CommandRoutes::GET_ELEMENT_TEXT);
    table.add::<ElementNameCommand>(CommandRoutes::GET_ELEMENT_TAG_NAME);
    table.add::<ElementSelectedCommand>(CommandRoutes::IS_ELEMENT_SELECTED);
    table.add::<ElementEnabledCommand>(CommandRoutes::IS_ELEMENT_ENABLED);
    table.add::<ElementDisplayedCommand>(CommandRoutes::IS_ELEMENT_DISPLAYED);
    table.add::<ElementLocationCommand>(CommandRoutes::GET_ELEMENT_LOCATION);
    table.add::<ElementLocationInViewCommand>(CommandRoutes::GET_ELEMENT_LOCATION_IN_VIEW);
    table.add::<ElementSizeCommand>(CommandRoutes::GET_ELEMENT_SIZE);
    table.add::<ElementAttributeCommand>(CommandRoutes::GET_ELEMENT_ATTRIBUTE);
    table.add::<ElementCssCommand>(CommandRoutes::GET_ELEMENT_VALUE_OF_CSS_PROPERTY);
    table.add::<ElementEqualsCommand>(CommandRoutes::ELEMENT_EQUALS);
}

/// Returns a table holding only the default route set.
pub fn default_route_table() -> RouteTable {
    let mut table = RouteTable::new();
    register_defaults(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved_name(table: &RouteTable, path: &str) -> Option<&'static str> {
        table.resolve(path).map(|c| c.command_name())
    }

    #[test]
    fn test_every_standard_route_registered() {
        let table = default_route_table();
        assert_eq!(table.len(), CommandRoutes::ALL.len());
        for pattern in CommandRoutes::ALL {
            assert!(table.has_route(pattern), "missing {}", pattern);
        }
    }

    #[test]
    fn test_default_resolution() {
        let table = default_route_table();

        assert_eq!(resolved_name(&table, "/status"), Some("status"));
        assert_eq!(resolved_name(&table, "/session"), Some("new_session"));
        assert_eq!(resolved_name(&table, "/session/abc"), Some("session"));
        assert_eq!(resolved_name(&table, "/sessions"), Some("get_sessions"));
        assert_eq!(resolved_name(&table, "/session/abc/title"), Some("get_title"));
        assert_eq!(resolved_name(&table, "/session/abc/log"), Some("get_session_logs"));
        assert_eq!(
            resolved_name(&table, "/session/abc/log/types"),
            Some("get_available_log_types")
        );
        assert_eq!(
            resolved_name(&table, "/session/abc/window/current/size"),
            Some("window_size")
        );
        assert_eq!(resolved_name(&table, "/session/abc/unknown"), None);
    }

    #[test]
    fn test_element_routes_not_shadowed() {
        let table = default_route_table();

        assert_eq!(
            resolved_name(&table, "/session/abc/element/def/attribute/title"),
            Some("get_element_attribute")
        );
        assert_eq!(
            resolved_name(&table, "/session/abc/element/def/css/color"),
            Some("get_element_value_of_css_property")
        );
        assert_eq!(
            resolved_name(&table, "/session/abc/element/def/click"),
            Some("click_element")
        );
        assert_eq!(resolved_name(&table, "/session/abc/click"), Some("mouse_click"));
    }
}
