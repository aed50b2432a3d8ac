//! Yellow–orange–red load coloring.
//!
//! A piecewise-linear ramp over the sequential YlOrRd scheme, sampled after
//! rescaling raw load values against a fixed normalization domain.

use bevy::prelude::Color;

/// Control stops of the sequential yellow–orange–red scheme, light to dark.
const YL_OR_RD: [[u8; 3]; 9] = [
    [255, 255, 204],
    [255, 237, 160],
    [254, 217, 118],
    [254, 178, 76],
    [253, 141, 60],
    [252, 78, 42],
    [227, 26, 28],
    [189, 0, 38],
    [128, 0, 38],
];

/// Linear rescaling of a raw value against a fixed `[vmin, vmax]` domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalize {
    pub vmin: f32,
    pub vmax: f32,
}

impl Normalize {
    /// Maps `value` to `[0, 1]`, clamping outside the domain.
    pub fn apply(&self, value: f32) -> f32 {
        ((value - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
    }
}

/// Normalization domain for load values.
///
/// Sized for the sketch data (relative load factors around 1.0), not for the
/// animation's random `[0, 1)` draws, which mostly clamp to the yellow end.
pub const LOAD_NORM: Normalize = Normalize {
    vmin: 0.5,
    vmax: 1.5,
};

/// Samples the YlOrRd ramp at `t`, clamped to `[0, 1]`.
pub fn sample_ramp(t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (YL_OR_RD.len() - 1) as f32;
    let idx = (scaled.floor() as usize).min(YL_OR_RD.len() - 2);
    let frac = scaled - idx as f32;
    let lo = YL_OR_RD[idx];
    let hi = YL_OR_RD[idx + 1];
    [
        lerp(lo[0], hi[0], frac),
        lerp(lo[1], hi[1], frac),
        lerp(lo[2], hi[2], frac),
    ]
}

fn lerp(a: u8, b: u8, t: f32) -> f32 {
    let a = a as f32 / 255.0;
    let b = b as f32 / 255.0;
    a + (b - a) * t
}

/// Fill color for a raw load value: normalize, then sample the ramp.
pub fn load_color(value: f32) -> Color {
    let [r, g, b] = sample_ramp(LOAD_NORM.apply(value));
    Color::srgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(i: usize) -> [f32; 3] {
        YL_OR_RD[i].map(|c| c as f32 / 255.0)
    }

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    // ── Normalize ───────────────────────────────────────────────────

    #[test]
    fn domain_endpoints_map_to_zero_and_one() {
        assert_eq!(LOAD_NORM.apply(0.5), 0.0);
        assert_eq!(LOAD_NORM.apply(1.5), 1.0);
    }

    #[test]
    fn domain_midpoint_maps_to_half() {
        assert!((LOAD_NORM.apply(1.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn values_outside_the_domain_clamp() {
        assert_eq!(LOAD_NORM.apply(-3.0), 0.0);
        assert_eq!(LOAD_NORM.apply(0.2), 0.0);
        assert_eq!(LOAD_NORM.apply(7.5), 1.0);
    }

    // ── sample_ramp ─────────────────────────────────────────────────

    #[test]
    fn ramp_starts_at_the_first_stop() {
        assert!(close(sample_ramp(0.0), stop(0)));
    }

    #[test]
    fn ramp_ends_at_the_last_stop() {
        assert!(close(sample_ramp(1.0), stop(8)));
    }

    #[test]
    fn ramp_midpoint_hits_the_middle_stop() {
        // 9 stops: t = 0.5 lands exactly on stop 4.
        assert!(close(sample_ramp(0.5), stop(4)));
    }

    #[test]
    fn ramp_clamps_outside_unit_interval() {
        assert!(close(sample_ramp(-0.7), stop(0)));
        assert!(close(sample_ramp(1.9), stop(8)));
    }

    #[test]
    fn ramp_moves_away_from_yellow_monotonically() {
        // Yellow → red means the green channel never increases.
        let mut prev = f32::MAX;
        for i in 0..=100 {
            let [_, g, _] = sample_ramp(i as f32 / 100.0);
            assert!(g <= prev + 1e-6, "green rose at t = {}", i as f32 / 100.0);
            prev = g;
        }
    }

    // ── load_color ──────────────────────────────────────────────────

    #[test]
    fn values_below_the_domain_share_the_low_endpoint() {
        assert_eq!(load_color(0.1), load_color(0.5));
    }

    #[test]
    fn values_above_the_domain_share_the_high_endpoint() {
        assert_eq!(load_color(1.5), load_color(99.0));
    }

    #[test]
    fn larger_values_map_later_in_the_gradient() {
        // Compare via the green channel, which strictly shrinks toward red.
        let low = sample_ramp(LOAD_NORM.apply(0.6));
        let high = sample_ramp(LOAD_NORM.apply(1.4));
        assert!(high[1] < low[1]);
    }
}
