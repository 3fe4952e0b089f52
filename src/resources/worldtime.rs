use bevy_ecs::prelude::Resource;

/// Simulation clock. The patrol physics is frame-stepped and does not scale
/// by `delta`; the clock exists for diagnostics and anything that does care
/// about wall time.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
