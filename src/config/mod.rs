//! Configuration file support for paintbrush.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintbrush/config.toml`. Settings include the initial tool,
//! color and stroke mode, the canvas background and size, UI preferences and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StatusPosition};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, HelpOverlayStyle, StatusBarStyle, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest accepted canvas edge in pixels.
pub const MIN_CANVAS_SIZE: u32 = 16;
/// Largest accepted canvas edge in pixels.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "pencil"
/// default_color = "black"
/// default_dashed = false
///
/// [canvas]
/// background_color = "white"
/// width = 800
/// height = 500
///
/// [ui]
/// show_status_bar = true
/// status_bar_position = "bottom-left"
///
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial tool, color and stroke mode
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas background and size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced with the nearest valid value (or the default,
    /// for unknown color names) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - style colors: 0.0 - 1.0 per channel
    /// - style sizes: positive
    pub fn validate_and_clamp(&mut self) {
        let size_range = MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE;
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !size_range.contains(&*value) {
                warn!(
                    "Invalid canvas {} {}, clamping to {}-{} range",
                    name, value, MIN_CANVAS_SIZE, MAX_CANVAS_SIZE
                );
                *value = (*value).clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
            }
        }

        if self.drawing.default_color.try_to_color().is_none() {
            warn!(
                "Invalid default_color {:?}, falling back to 'black'",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("black".to_string());
        }

        if self.canvas.background_color.try_to_color().is_none() {
            warn!(
                "Invalid background_color {:?}, falling back to 'white'",
                self.canvas.background_color
            );
            self.canvas.background_color = ColorSpec::Name("white".to_string());
        }

        let status = &mut self.ui.status_bar_style;
        clamp_positive("status_bar_style.font_size", &mut status.font_size, 14.0);
        clamp_positive("status_bar_style.dot_radius", &mut status.dot_radius, 5.0);
        clamp_rgba("status_bar_style.bg_color", &mut status.bg_color);
        clamp_rgba("status_bar_style.text_color", &mut status.text_color);

        let help = &mut self.ui.help_overlay_style;
        clamp_positive("help_overlay_style.font_size", &mut help.font_size, 14.0);
        clamp_positive("help_overlay_style.line_height", &mut help.line_height, 20.0);
        clamp_rgba("help_overlay_style.bg_color", &mut help.bg_color);
        clamp_rgba("help_overlay_style.border_color", &mut help.border_color);
        clamp_rgba("help_overlay_style.text_color", &mut help.text_color);
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintbrush/config.toml`
    /// (`$XDG_CONFIG_HOME` is honored).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintbrush");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn parse(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();
        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        fs::write(config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

fn clamp_positive(name: &str, value: &mut f64, fallback: f64) {
    if !(value.is_finite() && *value > 0.0) {
        warn!("Invalid {} {:.1}, falling back to {:.1}", name, value, fallback);
        *value = fallback;
    }
}

fn clamp_rgba(name: &str, rgba: &mut [f64; 4]) {
    for (i, channel) in rgba.iter_mut().enumerate() {
        if !(0.0..=1.0).contains(&*channel) {
            warn!("Invalid {}[{}] = {:.3}, clamping to 0.0-1.0", name, i, channel);
            *channel = channel.clamp(0.0, 1.0);
        }
    }
}
