use bevy::prelude::*;

/// One drawable hexagon of the load map.
#[derive(Component)]
pub struct HexCell {
    /// Load value currently displayed.
    pub value: f32,
}

/// Overlay text mirroring a cell's current value.
#[derive(Component)]
pub struct ValueLabel {
    /// The [`HexCell`] entity this label tracks.
    pub cell: Entity,
}

/// Shared hexagon mesh, built once at startup and reused by every cell.
#[derive(Resource)]
pub struct CellMesh(pub Handle<Mesh>);

/// Fixed-rate clock driving the randomized repaint.
#[derive(Resource)]
pub struct RedrawTimer(pub Timer);

impl RedrawTimer {
    /// Repeating timer firing `rate` times per second.
    pub fn from_rate(rate: f32) -> Self {
        Self(Timer::from_seconds(1.0 / rate, TimerMode::Repeating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_timer_period_matches_the_rate() {
        let timer = RedrawTimer::from_rate(100.0);
        assert!((timer.0.duration().as_secs_f32() - 0.01).abs() < 1e-6);
        assert_eq!(timer.0.mode(), TimerMode::Repeating);
    }
}
