use bevy::prelude::*;
use rand::Rng;

use super::FieldConfig;
use super::entities::{CellMesh, HexCell, RedrawTimer, ValueLabel};
use crate::colormap;
use crate::math;
use crate::sketch::LoadScene;

/// Extra view space around the scene bounds when fitting the camera.
const CAMERA_MARGIN: f32 = 1.1;

// ── Startup ────────────────────────────────────────────────────────

/// Builds the shared hexagon mesh and spawns a 2D camera fitted to the
/// scene bounds. Uniform zoom keeps the canvas aspect locked.
pub fn setup_canvas(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    scene: Res<LoadScene>,
    config: Res<FieldConfig>,
    windows: Query<&Window>,
) {
    let circumradius = config.hex_size / 3f32.sqrt();
    commands.insert_resource(CellMesh(meshes.add(RegularPolygon::new(circumradius, 6))));

    let bounds = scene.bounds;
    let zoom = windows
        .single()
        .map(|window| {
            let fit = (bounds.width() / window.width()).max(bounds.height() / window.height());
            (fit * CAMERA_MARGIN).max(f32::EPSILON)
        })
        .unwrap_or(1.0);

    commands.spawn((
        Camera2d,
        Transform::from_translation(bounds.center().extend(0.0)).with_scale(Vec3::splat(zoom)),
    ));
}

/// Reports what the loader produced once the app is up.
pub fn log_scene(scene: Res<LoadScene>) {
    if scene.samples.is_empty() {
        warn!("load sketch has no cells above the threshold; canvas will stay empty");
    } else {
        info!("load sketch ready: {} cells", scene.samples.len());
    }
}

// ── State transitions ──────────────────────────────────────────────

/// Populates the canvas from the loaded scene.
///
/// Cells come up with their file-derived values and colors; the first redraw
/// tick replaces both with randomized data.
pub fn spawn_cells(
    mut commands: Commands,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mesh: Res<CellMesh>,
    scene: Res<LoadScene>,
    config: Res<FieldConfig>,
) {
    for sample in &scene.samples {
        let cell = commands
            .spawn((
                HexCell {
                    value: sample.value,
                },
                Name::new(format!("cell {}:{}", sample.cell.x, sample.cell.y)),
                Mesh2d(mesh.0.clone()),
                MeshMaterial2d(materials.add(ColorMaterial::from(sample.color))),
                Transform::from_translation(sample.center.extend(0.0)),
            ))
            .id();
        commands.spawn((
            ValueLabel { cell },
            Text2d::new(format_value(sample.value)),
            TextFont {
                font_size: config.label_font_size,
                ..default()
            },
            TextColor(config.label_color),
            Transform::from_translation(sample.center.extend(1.0)),
        ));
    }
}

/// Wipes every cell and label from the canvas.
pub fn despawn_cells(
    mut commands: Commands,
    drawn: Query<Entity, Or<(With<HexCell>, With<ValueLabel>)>>,
) {
    for entity in &drawn {
        commands.entity(entity).despawn();
    }
}

// ── Drawing-state update ───────────────────────────────────────────

/// On each timer tick, assigns every cell a fresh uniform value in `[0, 1)`
/// and refreshes its fill color through the load gradient.
pub fn randomize_cells(
    time: Res<Time>,
    mut timer: ResMut<RedrawTimer>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut cells: Query<(&mut HexCell, &MeshMaterial2d<ColorMaterial>)>,
) {
    if !timer.0.tick(time.delta()).just_finished() {
        return;
    }
    let mut rng = rand::thread_rng();
    for (mut cell, material) in &mut cells {
        cell.value = rng.gen_range(0.0..1.0);
        if let Some(material) = materials.get_mut(&material.0) {
            material.color = colormap::load_color(cell.value);
        }
    }
}

/// Rewrites labels whose cell changed this frame.
pub fn update_labels(
    changed: Query<&HexCell, Changed<HexCell>>,
    mut labels: Query<(&ValueLabel, &mut Text2d)>,
) {
    for (label, mut text) in &mut labels {
        if let Ok(cell) = changed.get(label.cell) {
            text.0 = format_value(cell.value);
        }
    }
}

/// Strokes the hexagon borders over the filled cells.
pub fn draw_outlines(
    mut gizmos: Gizmos,
    config: Res<FieldConfig>,
    cells: Query<&Transform, With<HexCell>>,
) {
    for transform in &cells {
        let corners = math::hex_corners(transform.translation.truncate(), config.hex_size);
        let mut ring = corners.to_vec();
        ring.push(corners[0]);
        gizmos.linestrip_2d(ring, config.outline_color);
    }
}

/// Label text for a load value, rounded to two decimals.
pub fn format_value(value: f32) -> String {
    format!("{value:.2}")
}
