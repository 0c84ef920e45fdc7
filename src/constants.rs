//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Console panel height
pub const CONSOLE_PANEL_HEIGHT: f32 = 160.0;

/// Most recent console lines drawn in the panel
pub const CONSOLE_VISIBLE_LINES: usize = 50;

/// Console ring buffer capacity
pub const CONSOLE_LOG_CAPACITY: usize = 500;

/// Heart icon edge length
pub const LIKE_ICON_SIZE: f32 = 40.0;

/// Label shown on the gallery button when none is given
pub const DEFAULT_BUTTON_LABEL: &str = "Do a Fart!";

/// Alert body shown by the gallery
pub const ALERT_MESSAGE: &str = "🍑💨";

/// ListGroup heading used by the gallery
pub const PLACES_HEADING: &str = "Places";

/// Placeholder row for an empty ListGroup
pub const EMPTY_LIST_MESSAGE: &str = "No item found";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "gallery.toml";
