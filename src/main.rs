//! LoadVis: hexagonal load-map viewer.
//!
//! Reads a load sketch file, places each value on a pointy-top hex lattice
//! colored through a yellow–orange–red gradient, and animates the cells with
//! randomized values behind Draw/Clear buttons.

mod colormap;
mod controls;
mod field;
pub mod math;
mod sketch;

use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use sketch::SketchFormat;

/// Whether the canvas is populated and animating.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum VisState {
    /// Canvas is empty; redraw ticks are no-ops.
    #[default]
    Cleared,
    /// Cells are on the canvas and re-randomized every tick.
    Drawing,
}

/// Hexagonal load-map viewer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Load sketch file to visualize.
    #[arg(default_value = "SKETCH_pow.lst")]
    input: PathBuf,
    /// Read the input as raw rectangular rows instead of the padded core
    /// layout.
    #[arg(long)]
    grid: bool,
    /// Values equal to this are dropped from the map.
    #[arg(long, default_value_t = 0.0)]
    threshold: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let format = if cli.grid {
        SketchFormat::Grid
    } else {
        SketchFormat::Core
    };

    // The sketch is read once, synchronously, before the window appears;
    // any load failure is fatal here.
    let scene = sketch::load(&cli.input, format, cli.threshold)
        .with_context(|| format!("failed to load sketch {}", cli.input.display()))?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "LoadVis".into(),
                resolution: (620.0, 760.0).into(),
                ..default()
            }),
            ..default()
        }))
        .init_state::<VisState>()
        .insert_resource(scene)
        .add_plugins(bevy_egui::EguiPlugin::default())
        .add_plugins(field::FieldPlugin(field::FieldConfig::default()))
        .add_plugins(controls::ControlsPlugin)
        .run();

    Ok(())
}
