use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use paintbrush::Config;
use paintbrush::backend::{self, HeadlessOptions};

#[derive(Parser, Debug)]
#[command(name = "paintbrush")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PAINTBRUSH_GIT_HASH"), ")"),
    about = "Paint canvas with line, rectangle, oval, pencil and eraser tools"
)]
struct Cli {
    /// Gesture script to replay onto the canvas
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// PNG file to write (defaults to a timestamped file in your pictures directory)
    #[arg(long, short = 'o', value_name = "FILE", requires = "script")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/paintbrush/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// Leave the status bar out of the image
    #[arg(long, action = ArgAction::SetTrue)]
    hide_status_bar: bool,

    /// Print the final tool selection and shape count
    #[arg(long, action = ArgAction::SetTrue, requires = "script")]
    print_state: bool,

    /// Write a documented example config and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let Some(script) = cli.script else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load config")?,
    };

    let options = HeadlessOptions {
        script,
        output: cli.output,
        width: cli.width,
        height: cli.height,
        hide_status_bar: cli.hide_status_bar,
    };
    let summary = backend::run_headless(config, &options)?;

    if cli.print_state {
        println!("{}", summary.status);
        println!("Shapes: {}", summary.shape_count);
        if summary.drawing {
            println!("Gesture still in progress");
        }
    }
    println!("Saved {}", summary.output.display());

    Ok(())
}

fn print_usage() {
    println!("paintbrush: Paint canvas with line, rectangle, oval, pencil and eraser tools");
    println!();
    println!("Usage:");
    println!("  paintbrush --script FILE [--output FILE]   Replay gestures and save a PNG");
    println!("  paintbrush --init-config                   Write an example config file");
    println!("  paintbrush --help                          Show all options");
    println!();
    println!("Script events ([[event]] tables in TOML):");
    println!("  select-tool, select-color, select-dash, pointer-down, pointer-move,");
    println!("  pointer-up, drag, key, clear, undo");
    println!();
    println!("Config: ~/.config/paintbrush/config.toml");
}
