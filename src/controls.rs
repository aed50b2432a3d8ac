//! Draw/Clear button panel.
//!
//! A fixed egui panel below the canvas, mirroring the original two-button
//! column: "Draw" populates the canvas and starts the randomized redraw,
//! "Clear" wipes it. Re-pressing the active state's button is a no-op.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::VisState;

const BUTTON_HEIGHT: f32 = 28.0;

/// Button panel plugin.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, button_panel);
    }
}

/// Bottom panel with the Draw and Clear buttons.
fn button_panel(mut contexts: EguiContexts, mut next: ResMut<NextState<VisState>>) -> Result {
    let ctx = contexts.ctx_mut()?;
    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        let width = ui.available_width();
        if ui
            .add_sized([width, BUTTON_HEIGHT], egui::Button::new("Draw"))
            .clicked()
        {
            next.set(VisState::Drawing);
        }
        if ui
            .add_sized([width, BUTTON_HEIGHT], egui::Button::new("Clear"))
            .clicked()
        {
            next.set(VisState::Cleared);
        }
        ui.add_space(4.0);
    });
    Ok(())
}
