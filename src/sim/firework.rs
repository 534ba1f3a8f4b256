use glam::Vec3;
use rand::Rng;

use crate::sim::particle::{Particle, MAX_LIFESPAN};
use crate::traits::PointRenderer;

const LAUNCH_X_MIN: f32 = -100.0;
const LAUNCH_X_MAX: f32 = 0.0;
const LAUNCH_Z_MIN: f32 = -150.0;
const LAUNCH_Z_MAX: f32 = 150.0;
/// Shells lift off from ground level of the diorama
const LAUNCH_Y: f32 = -50.0;

/// A single launched firework: one ascending seed shell and, after the
/// apex, the ember cloud it scattered. All embers share the instance color.
pub struct Firework {
    seed: Particle,
    embers: Vec<Particle>,
    color: Vec3,
    burst_size: usize,
}

impl Firework {
    /// Launch from a random spot on the diorama floor with a random hue
    pub fn new(burst_size: usize, rng: &mut impl Rng) -> Self {
        let site = Vec3::new(
            rng.gen_range(LAUNCH_X_MIN..LAUNCH_X_MAX),
            LAUNCH_Y,
            rng.gen_range(LAUNCH_Z_MIN..LAUNCH_Z_MAX),
        );
        let hue = rng.gen_range(0.0..360.0);
        Self {
            seed: Particle::seed(site, rng),
            embers: Vec::new(),
            color: hue_to_rgb(hue),
            burst_size,
        }
    }

    /// Build from an explicit seed particle; lets tests pin the launch
    /// velocity instead of drawing one
    pub fn with_seed(seed: Particle, hue: f32, burst_size: usize) -> Self {
        Self {
            seed,
            embers: Vec::new(),
            color: hue_to_rgb(hue),
            burst_size,
        }
    }

    /// Advance one frame: integrate the seed until it detonates, then the
    /// ember cloud; prune dead embers and draw every surviving point.
    /// Draw is interleaved with stepping because the emitted transforms are
    /// only valid for the current frame's view/projection.
    pub fn step(&mut self, gravity: Vec3, rng: &mut impl Rng, out: &mut impl PointRenderer) {
        if !self.seed.is_dead() {
            self.seed.apply_force(gravity);
            self.seed.update();
            if self.seed.explode() {
                self.embers.reserve(self.burst_size);
                for _ in 0..self.burst_size {
                    self.embers.push(Particle::ember(self.seed.position, rng));
                }
            } else {
                out.draw_point(self.seed.position, self.color, 1.0, true);
            }
        }

        let color = self.color;
        self.embers.retain_mut(|ember| {
            ember.apply_force(gravity);
            ember.update();
            if ember.is_dead() {
                return false;
            }
            out.draw_point(ember.position, color, ember.lifespan / MAX_LIFESPAN, false);
            true
        });
    }

    /// Seed dead and every ember pruned; the simulation drops the instance
    /// once this holds
    pub fn is_complete(&self) -> bool {
        self.seed.is_dead() && self.embers.is_empty()
    }

    pub fn ember_count(&self) -> usize {
        self.embers.len()
    }

    pub fn seed(&self) -> &Particle {
        &self.seed
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }
}

/// Hue (degrees) to fully saturated RGB
fn hue_to_rgb(hue: f32) -> Vec3 {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    match h as u32 {
        0 => Vec3::new(1.0, x, 0.0),
        1 => Vec3::new(x, 1.0, 0.0),
        2 => Vec3::new(0.0, 1.0, x),
        3 => Vec3::new(0.0, x, 1.0),
        4 => Vec3::new(x, 0.0, 1.0),
        _ => Vec3::new(1.0, 0.0, x),
    }
}
