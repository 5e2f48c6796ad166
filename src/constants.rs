// DOM wiring constants for the web front-end.
// Kept free of `web_sys` types so host-side tests can include this file.

// Element the animation mounts on automatically at startup
pub const CANVAS_ELEMENT_ID: &str = "canvas";

// Canvas attributes prefixed with this override `Params` fields,
// e.g. `data-ribbon-trails="40"`
pub const PARAM_ATTR_PREFIX: &str = "data-ribbon-";

// Marks a canvas the page mounts itself via `render_canvas`; skips auto-mount
pub const MANUAL_ATTR: &str = "data-ribbon-manual";

// Console log level
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Events on `document`
pub const EV_MOUSE_MOVE: &str = "mousemove";
pub const EV_TOUCH_START: &str = "touchstart";
pub const EV_TOUCH_MOVE: &str = "touchmove";

// Events on `window`
pub const EV_RESIZE: &str = "resize";
pub const EV_FOCUS: &str = "focus";
pub const EV_BLUR: &str = "blur";

// Event on `document.body`
pub const EV_ORIENTATION_CHANGE: &str = "orientationchange";

/// Strip the override prefix from an attribute name, if present.
#[inline]
pub fn param_key(attr_name: &str) -> Option<&str> {
    if attr_name == MANUAL_ATTR {
        return None;
    }
    attr_name
        .strip_prefix(PARAM_ATTR_PREFIX)
        .filter(|key| !key.is_empty())
}
