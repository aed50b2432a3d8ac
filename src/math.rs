//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` inputs, so the lattice and polygon math can be
//! unit-tested without a window.

use bevy::prelude::Vec2;

/// Width of a hexagon cell in world units (flat-to-flat for pointy-top).
pub const HEX_SIZE: f32 = 10.0;

/// Distance between adjacent cell centers within a row.
pub const LATTICE_STEP: f32 = 10.0;

/// World-space center of lattice cell `(col, row)`.
///
/// Each row shifts half a step to the left of the one above it and rows sit
/// `step·√3/2` apart vertically, producing a tessellating pointy-top hex
/// lattice. Row 1 lies on `y = 0`; rows grow downward (negative `y`).
pub fn lattice_position(col: usize, row: usize, step: f32) -> Vec2 {
    let i = col as f32;
    let j = row as f32;
    Vec2::new(step * (i - j / 2.0), -(j - 1.0) * step * 3f32.sqrt() / 2.0)
}

/// Corner offsets of a pointy-top hexagon of width `size`, clockwise from
/// the top corner.
///
/// The circumradius is `size/√3`, giving corners at `(0, ±size/√3)` and
/// `(±size/2, ±size/(2√3))`.
pub fn hex_corner_offsets(size: f32) -> [Vec2; 6] {
    let major = size / 3f32.sqrt();
    let minor = size / (2.0 * 3f32.sqrt());
    let half = size / 2.0;
    [
        Vec2::new(0.0, major),
        Vec2::new(half, minor),
        Vec2::new(half, -minor),
        Vec2::new(0.0, -major),
        Vec2::new(-half, -minor),
        Vec2::new(-half, minor),
    ]
}

/// The six corners of the hexagon centered at `center`.
pub fn hex_corners(center: Vec2, size: f32) -> [Vec2; 6] {
    hex_corner_offsets(size).map(|offset| center + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── lattice_position ────────────────────────────────────────────

    #[test]
    fn row_one_lies_on_the_x_axis() {
        let p = lattice_position(0, 1, 10.0);
        assert!((p.x - (-5.0)).abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
    }

    #[test]
    fn row_zero_sits_half_a_row_step_above() {
        let p = lattice_position(0, 0, 10.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 10.0 * 3f32.sqrt() / 2.0).abs() < 1e-4);
    }

    #[test]
    fn columns_advance_by_one_step() {
        let a = lattice_position(3, 2, 10.0);
        let b = lattice_position(4, 2, 10.0);
        assert!((b.x - a.x - 10.0).abs() < 1e-5);
        assert!((b.y - a.y).abs() < 1e-6);
    }

    #[test]
    fn successive_rows_shift_left_and_down() {
        let a = lattice_position(5, 3, 10.0);
        let b = lattice_position(5, 4, 10.0);
        assert!((a.x - b.x - 5.0).abs() < 1e-5, "half-step row offset");
        assert!(
            (a.y - b.y - 10.0 * 3f32.sqrt() / 2.0).abs() < 1e-4,
            "rows descend by step·√3/2"
        );
    }

    // ── hex_corner_offsets ──────────────────────────────────────────

    #[test]
    fn corners_match_closed_form() {
        let s = 10.0f32;
        let major = s / 3f32.sqrt();
        let minor = s / (2.0 * 3f32.sqrt());
        let expected = [
            Vec2::new(0.0, major),
            Vec2::new(5.0, minor),
            Vec2::new(5.0, -minor),
            Vec2::new(0.0, -major),
            Vec2::new(-5.0, -minor),
            Vec2::new(-5.0, minor),
        ];
        for (got, want) in hex_corner_offsets(s).iter().zip(expected.iter()) {
            assert!((*got - *want).length() < 1e-5, "got {got:?}, want {want:?}");
        }
    }

    #[test]
    fn all_edges_have_equal_length() {
        let corners = hex_corner_offsets(10.0);
        let edge = 10.0 / 3f32.sqrt();
        for i in 0..6 {
            let len = (corners[(i + 1) % 6] - corners[i]).length();
            assert!((len - edge).abs() < 1e-4, "edge {i} length {len}");
        }
    }

    #[test]
    fn corners_lie_on_the_circumcircle() {
        let radius = 10.0 / 3f32.sqrt();
        for corner in hex_corner_offsets(10.0) {
            assert!((corner.length() - radius).abs() < 1e-4);
        }
    }

    // ── hex_corners ─────────────────────────────────────────────────

    #[test]
    fn corners_translate_with_the_center() {
        let center = Vec2::new(20.0, -8.0);
        let translated = hex_corners(center, 10.0);
        for (got, offset) in translated.iter().zip(hex_corner_offsets(10.0)) {
            assert!((*got - (center + offset)).length() < 1e-6);
        }
    }
}
