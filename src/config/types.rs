//! Configuration type definitions.

use super::enums::{ColorSpec, StatusPosition};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the selection the canvas starts with. Users can change these
/// values at runtime using keybindings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initially selected tool (line, rectangle, oval, pencil, eraser)
    #[serde(default)]
    pub default_tool: Tool,

    /// Initial stroke color - either a palette name (black, red, blue, green, yellow,
    /// orange, cyan, magenta, pink, gray) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Start in dotted mode instead of solid
    #[serde(default)]
    pub default_dashed: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: default_color(),
            default_dashed: false,
        }
    }
}

/// Canvas settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Background fill, also used by the eraser
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,

    /// Rendered width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Rendered height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// UI display preferences.
///
/// Controls the visibility and positioning of on-canvas UI elements.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Show the status bar displaying the current tool, color and mode
    #[serde(default = "default_show_status")]
    pub show_status_bar: bool,

    /// Status bar position (top-left, top-right, bottom-left, bottom-right)
    #[serde(default = "default_status_position")]
    pub status_bar_position: StatusPosition,

    /// Status bar styling options
    #[serde(default)]
    pub status_bar_style: StatusBarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status(),
            status_bar_position: default_status_position(),
            status_bar_style: StatusBarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Status bar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StatusBarStyle {
    /// Font size for status bar text
    #[serde(default = "default_status_font_size")]
    pub font_size: f64,

    /// Padding around status bar text
    #[serde(default = "default_status_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_bg_color")]
    pub bg_color: [f64; 4],

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_status_text_color")]
    pub text_color: [f64; 4],

    /// Color swatch radius
    #[serde(default = "default_status_dot_radius")]
    pub dot_radius: f64,
}

impl Default for StatusBarStyle {
    fn default() -> Self {
        Self {
            font_size: default_status_font_size(),
            padding: default_status_padding(),
            bg_color: default_status_bg_color(),
            text_color: default_status_text_color(),
            dot_radius: default_status_dot_radius(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

pub(crate) fn default_canvas_width() -> u32 {
    800
}

pub(crate) fn default_canvas_height() -> u32 {
    500
}

fn default_show_status() -> bool {
    true
}

fn default_status_position() -> StatusPosition {
    StatusPosition::BottomLeft
}

// Status bar style defaults
fn default_status_font_size() -> f64 {
    14.0
}

fn default_status_padding() -> f64 {
    8.0
}

fn default_status_bg_color() -> [f64; 4] {
    [0.93, 0.93, 0.93, 0.95]
}

fn default_status_text_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_status_dot_radius() -> f64 {
    5.0
}

// Help overlay style defaults
fn default_help_font_size() -> f64 {
    14.0
}

fn default_help_line_height() -> f64 {
    20.0
}

fn default_help_padding() -> f64 {
    16.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
