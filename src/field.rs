//! Hexagonal load field: cell spawning, randomized redraw, outlines, labels.
//!
//! Owns the canvas side of the window. Cells are spawned from the loaded
//! scene when drawing starts, wiped when it is cleared, and re-randomized by
//! a fixed-rate timer while drawing.

mod entities;
mod systems;

pub use entities::{HexCell, ValueLabel};

use bevy::prelude::*;

use crate::VisState;
use crate::math;

/// Per-plugin configuration for the hex field.
#[derive(Resource, Clone, Debug)]
pub struct FieldConfig {
    /// Hexagon width in world units.
    pub hex_size: f32,
    /// Redraw ticks per second while drawing.
    pub tick_rate: f32,
    /// Cell border color.
    pub outline_color: Color,
    /// Value label color.
    pub label_color: Color,
    /// Value label font size.
    pub label_font_size: f32,
    /// Canvas background color.
    pub clear_color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            hex_size: math::HEX_SIZE,
            tick_rate: 100.0,
            outline_color: Color::WHITE,
            label_color: Color::BLACK,
            label_font_size: 4.0,
            clear_color: Color::BLACK,
        }
    }
}

/// Field plugin: canvas setup at startup, cell lifecycle on state
/// transitions, randomized repaint while drawing.
pub struct FieldPlugin(pub FieldConfig);

impl Plugin for FieldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .insert_resource(entities::RedrawTimer::from_rate(self.0.tick_rate))
            .add_systems(Startup, (systems::setup_canvas, systems::log_scene))
            .add_systems(OnEnter(VisState::Drawing), systems::spawn_cells)
            .add_systems(OnExit(VisState::Drawing), systems::despawn_cells)
            .add_systems(
                Update,
                (
                    systems::randomize_cells,
                    systems::update_labels.after(systems::randomize_cells),
                    systems::draw_outlines,
                )
                    .run_if(in_state(VisState::Drawing)),
            );
    }
}
