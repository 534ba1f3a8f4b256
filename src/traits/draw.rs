use glam::Vec3;

/// Point-primitive draw abstraction the simulation renders through.
///
/// One call per visible particle per frame. Implementations must not
/// assume anything persists between calls; `fade` is the remaining
/// lifespan normalized to `0..=1`.
pub trait PointRenderer {
    fn draw_point(&mut self, position: Vec3, color: Vec3, fade: f32, is_seed: bool);
}

/// Sink that discards every point; used by benches and lifecycle tests
#[derive(Default)]
pub struct NullPointRenderer;

impl PointRenderer for NullPointRenderer {
    fn draw_point(&mut self, _position: Vec3, _color: Vec3, _fade: f32, _is_seed: bool) {}
}
