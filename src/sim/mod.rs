mod firework;
mod particle;

pub use firework::Firework;
pub use particle::{Particle, DAMPING, DECAY_RATE, MAX_LIFESPAN};

use glam::Vec3;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::traits::PointRenderer;

/// Per-frame probability of launching a new shell
pub const DEFAULT_SPAWN_CHANCE: f32 = 0.2;
/// Embers scattered per explosion
pub const DEFAULT_BURST_SIZE: usize = 750;
/// Constant downward force applied to every particle each frame
pub const GRAVITY: Vec3 = Vec3::new(0.0, -0.1, 0.0);

/// Owns every active firework and the randomness that drives them.
///
/// The spawn trigger is an independent Bernoulli trial each frame; there is
/// no scheduled next-launch event. One `update` call equals one simulation
/// step (unit time step, no delta-time scaling).
pub struct FireworkSimulation {
    fireworks: Vec<Firework>,
    rng: Pcg64Mcg,
    spawn_chance: f32,
    burst_size: usize,
}

impl FireworkSimulation {
    pub fn new(spawn_chance: f32, burst_size: usize) -> Self {
        Self::with_rng(spawn_chance, burst_size, Pcg64Mcg::from_entropy())
    }

    /// Caller-seeded stream; the deterministic entry point for tests
    pub fn with_rng(spawn_chance: f32, burst_size: usize, rng: Pcg64Mcg) -> Self {
        Self {
            fireworks: Vec::new(),
            rng,
            spawn_chance,
            burst_size,
        }
    }

    /// Spawn-check, step every instance, drop the completed ones
    pub fn update(&mut self, gravity: Vec3, out: &mut impl PointRenderer) {
        if self.rng.gen_range(0.0..1.0) < self.spawn_chance {
            self.fireworks.push(Firework::new(self.burst_size, &mut self.rng));
            debug!("launched a shell ({} active)", self.fireworks.len());
        }

        let rng = &mut self.rng;
        for firework in &mut self.fireworks {
            firework.step(gravity, rng, out);
        }
        self.fireworks.retain(|f| !f.is_complete());
    }

    pub fn active_count(&self) -> usize {
        self.fireworks.len()
    }

    /// Live particle total across all instances (seeds + embers)
    pub fn particle_count(&self) -> usize {
        self.fireworks
            .iter()
            .map(|f| f.ember_count() + usize::from(!f.seed().is_dead()))
            .sum()
    }

    /// Hand a pre-built instance to the simulation; tests use this to run
    /// a single deterministic firework to completion
    pub fn push(&mut self, firework: Firework) {
        self.fireworks.push(firework);
    }
}
