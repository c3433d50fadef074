use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::Config;
use crate::replay::Script;

pub mod headless;

pub use headless::HeadlessBackend;

/// Options for a headless render, usually filled from the command line.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Gesture script to replay
    pub script: PathBuf,
    /// PNG target; a timestamped file in the pictures directory when unset
    pub output: Option<PathBuf>,
    /// Overrides `canvas.width`
    pub width: Option<u32>,
    /// Overrides `canvas.height`
    pub height: Option<u32>,
    /// Forces the status bar off
    pub hide_status_bar: bool,
}

/// What a headless run produced.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub output: PathBuf,
    /// Final status line, e.g. `Tool: Pencil | Color: Black | Mode: Solid`
    pub status: String,
    pub shape_count: usize,
    pub drawing: bool,
}

/// Replays a script against `config` and writes the resulting canvas as PNG.
///
/// # Arguments
/// * `config` - Loaded configuration; size overrides from `options` are applied and clamped
/// * `options` - Script, output and override settings
pub fn run_headless(mut config: Config, options: &HeadlessOptions) -> Result<RenderSummary> {
    if let Some(width) = options.width {
        config.canvas.width = width;
    }
    if let Some(height) = options.height {
        config.canvas.height = height;
    }
    if options.hide_status_bar {
        config.ui.show_status_bar = false;
    }
    config.validate_and_clamp();

    let script = Script::load(&options.script)
        .with_context(|| format!("Failed to load script {}", options.script.display()))?;

    let mut backend = HeadlessBackend::new(config)?;
    backend.replay(&script)?;

    let output = headless::resolve_output_path(options.output.as_deref())?;
    backend.save_png(&output)?;

    let state = &backend.input_state;
    Ok(RenderSummary {
        output,
        status: state.describe_state().to_string(),
        shape_count: state.canvas.len(),
        drawing: state.is_drawing(),
    })
}
