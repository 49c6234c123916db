//! Standard protocol route patterns.

/// URI patterns of the standard wire-protocol commands.
pub struct CommandRoutes;

impl CommandRoutes {
    pub const STATUS: &'static str = "/status";
    pub const GET_LOG: &'static str = "/log";
    pub const NEW_SESSION: &'static str = "/session";
    pub const SESSION: &'static str = "/session/*";
    pub const SESSIONS: &'static str = "/sessions";
    pub const SET_SCRIPT_TIMEOUT: &'static str = "/session/*/timeouts/async_script";
    pub const IMPLICITLY_WAIT: &'static str = "/session/*/timeouts/implicit_wait";
    pub const GET_AVAILABLE_LOG_TYPES: &'static str = "/session/*/log/types";
    pub const GET_SESSION_LOGS: &'static str = "/session/*/log";
    pub const WINDOW_SIZE: &'static str = "/session/*/window/*/size";
    pub const WINDOW_POSITION: &'static str = "/session/*/window/*/position";
    pub const MAXIMIZE_WINDOW: &'static str = "/session/*/window/*/maximize";
    pub const GET_TITLE: &'static str = "/session/*/title";
    pub const GO_FORWARD: &'static str = "/session/*/forward";
    pub const GO_BACK: &'static str = "/session/*/back";
    pub const REFRESH: &'static str = "/session/*/refresh";
    pub const SCREENSHOT: &'static str = "/session/*/screenshot";
    pub const SEND_KEYS: &'static str = "/session/*/keys";
    pub const CLICK_ELEMENT: &'static str = "/session/*/element/*/click";
    pub const HOVER_OVER_ELEMENT: &'static str = "/session/*/element/*/hover";
    pub const MOUSE_CLICK: &'static str = "/session/*/click";
    pub const MOUSE_DOUBLE_CLICK: &'static str = "/session/*/doubleclick";
    pub const MOUSE_BUTTON_DOWN: &'static str = "/session/*/buttondown";
    pub const MOUSE_BUTTON_UP: &'static str = "/session/*/buttonup";
    pub const MOUSE_MOVE_TO: &'static str = "/session/*/moveto";
    pub const CLEAR_ELEMENT: &'static str = "/session/*/element/*/clear";
    pub const SEND_KEYS_TO_ELEMENT: &'static str = "/session/*/element/*/value";
    pub const SUBMIT_ELEMENT: &'static str = "/session/*/element/*/submit";
    pub const GET_ELEMENT_TEXT: &'static str = "/session/*/element/*/text";
    pub const GET_ELEMENT_TAG_NAME: &'static str = "/session/*/element/*/name";
    pub const IS_ELEMENT_SELECTED: &'static str = "/session/*/element/*/selected";
    pub const IS_ELEMENT_ENABLED: &'static str = "/session/*/element/*/enabled";
    pub const IS_ELEMENT_DISPLAYED: &'static str = "/session/*/element/*/displayed";
    pub const GET_ELEMENT_LOCATION: &'static str = "/session/*/element/*/location";
    pub const GET_ELEMENT_LOCATION_IN_VIEW: &'static str = "/session/*/element/*/location_in_view";
    pub const GET_ELEMENT_SIZE: &'static str = "/session/*/element/*/size";
    pub const GET_ELEMENT_ATTRIBUTE: &'static str = "/session/*/element/*/attribute/*";
    pub const GET_ELEMENT_VALUE_OF_CSS_PROPERTY: &'static str = "/session/*/element/*/css/*";
    pub const ELEMENT_EQUALS: &'static str = "/session/*/element/*/equals/*";

    pub const ALL: &'static [&'static str] = &[
        Self::STATUS,
        Self::GET_LOG,
        Self::NEW_SESSION,
        Self::SESSION,
        Self::SESSIONS,
        Self::SET_SCRIPT_TIMEOUT,
        Self::IMPLICITLY_WAIT,
        Self::GET_AVAILABLE_LOG_TYPES,
        Self::GET_SESSION_LOGS,
        Self::WINDOW_SIZE,
        Self::WINDOW_POSITION,
        Self::MAXIMIZE_WINDOW,
        Self::GET_TITLE,
        Self::GO_FORWARD,
        Self::GO_BACK,
        Self::REFRESH,
        Self::SCREENSHOT,
        Self::SEND_KEYS,
        Self::CLICK_ELEMENT,
        Self::HOVER_OVER_ELEMENT,
        Self::MOUSE_CLICK,
        Self::MOUSE_DOUBLE_CLICK,
        Self::MOUSE_BUTTON_DOWN,
        Self::MOUSE_BUTTON_UP,
        Self::MOUSE_MOVE_TO,
        Self::CLEAR_ELEMENT,
        Self::SEND_KEYS_TO_ELEMENT,
        Self::SUBMIT_ELEMENT,
        Self::GET_ELEMENT_TEXT,
        Self::GET_ELEMENT_TAG_NAME,
        Self::IS_ELEMENT_SELECTED,
        Self::IS_ELEMENT_ENABLED,
        Self::IS_ELEMENT_DISPLAYED,
        Self::GET_ELEMENT_LOCATION,
        Self::GET_ELEMENT_LOCATION_IN_VIEW,
        Self::GET_ELEMENT_SIZE,
        Self::GET_ELEMENT_ATTRIBUTE,
        Self::GET_ELEMENT_VALUE_OF_CSS_PROPERTY,
        Self::ELEMENT_EQUALS,
    ];

    /// Returns true if `pattern` is one of the standard protocol routes.
    pub fn is_standard(pattern: &str) -> bool {
        Self::ALL.contains(&pattern)
    }
}
