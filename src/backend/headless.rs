//! Offscreen backend: replays input into an image surface and saves a PNG.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::input::InputState;
use crate::replay::Script;
use crate::ui;

/// Filename template for images saved without an explicit `--output`.
const FILENAME_TEMPLATE: &str = "paintbrush_%Y-%m-%d_%H%M%S";

/// Drives an [`InputState`] without a window and paints it into a Cairo
/// image surface.
pub struct HeadlessBackend {
    config: Config,
    pub input_state: InputState,
}

impl HeadlessBackend {
    /// Creates a backend with an idle input state built from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let input_state = InputState::from_config(&config)?;
        log::info!(
            "Headless canvas {}x{}",
            input_state.screen_width,
            input_state.screen_height
        );
        Ok(Self {
            config,
            input_state,
        })
    }

    /// Replays every event in `script`.
    pub fn replay(&mut self, script: &Script) -> Result<()> {
        script
            .apply(&mut self.input_state)
            .context("Failed to replay script")?;
        log::info!(
            "Replayed {} event(s); {} shape(s) on canvas",
            script.events.len(),
            self.input_state.canvas.len()
        );
        Ok(())
    }

    /// Paints the canvas and any enabled overlays into a fresh surface.
    pub fn render(&mut self) -> Result<cairo::ImageSurface> {
        let width = self.input_state.screen_width;
        let height = self.input_state.screen_height;

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
            .context("Failed to create image surface")?;
        let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;

        // Background, committed shapes, then the in-progress shape
        self.input_state.render(&ctx);

        if self.input_state.show_status_bar {
            ui::render_status_bar(
                &ctx,
                &self.input_state,
                self.config.ui.status_bar_position,
                &self.config.ui.status_bar_style,
                width,
                height,
            );
        }

        if self.input_state.show_help {
            ui::render_help_overlay(
                &ctx,
                &self.config.ui.help_overlay_style,
                &self.config.keybindings,
                width,
                height,
            );
        }

        // Release the context before handing the surface out
        drop(ctx);
        surface.flush();
        Ok(surface)
    }

    /// Renders and writes the result to `path` as PNG.
    pub fn save_png(&mut self, path: &Path) -> Result<()> {
        let surface = self.render()?;
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        surface
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to encode PNG to {}", path.display()))?;
        log::info!("Saved canvas to {}", path.display());
        Ok(())
    }
}

/// Default directory for rendered images.
pub fn default_output_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Paintbrush")
}

/// Generates a timestamped PNG filename.
pub fn generate_filename() -> String {
    format!("{}.png", Local::now().format(FILENAME_TEMPLATE))
}

/// Resolves where the image goes, creating parent directories as needed.
pub fn resolve_output_path(output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_dir().join(generate_filename()),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            log::info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(path)
}
