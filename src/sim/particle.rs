use glam::Vec3;
use rand::Rng;

/// Initial lifespan budget for every particle
pub const MAX_LIFESPAN: f32 = 255.0;
/// Lifespan drained per step from an exploded ember
pub const DECAY_RATE: f32 = 5.0;
/// Per-step velocity damping applied to embers
pub const DAMPING: f32 = 0.9;

const LAUNCH_SPEED_MIN: f32 = 3.0;
const LAUNCH_SPEED_MAX: f32 = 5.0;
const BURST_SPEED_MIN: f32 = 4.0;
const BURST_SPEED_MAX: f32 = 8.0;

/// One point of a firework: either the ascending seed shell or one of the
/// embers it scatters at the apex. The two share one integration rule with
/// a branch on the tag; embers additionally decay and damp.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub lifespan: f32,
    pub is_seed: bool,
}

impl Particle {
    /// Unexploded shell launched straight up from `position`
    pub fn seed(position: Vec3, rng: &mut impl Rng) -> Self {
        Self {
            position,
            velocity: Vec3::new(0.0, rng.gen_range(LAUNCH_SPEED_MIN..LAUNCH_SPEED_MAX), 0.0),
            acceleration: Vec3::ZERO,
            lifespan: MAX_LIFESPAN,
            is_seed: true,
        }
    }

    /// Ember scattered at the explosion point with a random radial velocity
    pub fn ember(position: Vec3, rng: &mut impl Rng) -> Self {
        let speed = rng.gen_range(BURST_SPEED_MIN..BURST_SPEED_MAX);
        Self {
            position,
            velocity: random_unit_vector(rng) * speed,
            acceleration: Vec3::ZERO,
            lifespan: MAX_LIFESPAN,
            is_seed: false,
        }
    }

    pub fn apply_force(&mut self, force: Vec3) {
        self.acceleration += force;
    }

    /// One explicit Euler step with a unit time step. Seeds never decay or
    /// damp; they only leave the simulation through `explode`.
    pub fn update(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
        if !self.is_seed {
            self.lifespan -= DECAY_RATE;
            self.velocity *= DAMPING;
        }
        self.acceleration = Vec3::ZERO;
    }

    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }

    /// Apex trigger: a live seed whose vertical velocity has become
    /// non-positive detonates, exactly once. The transition forces the
    /// lifespan to zero, so a second call finds a dead seed and returns
    /// false. Embers never explode.
    pub fn explode(&mut self) -> bool {
        if self.is_seed && !self.is_dead() && self.velocity.y <= 0.0 {
            self.lifespan = 0.0;
            return true;
        }
        false
    }
}

/// Uniform direction on the unit sphere, by rejection sampling in the
/// unit ball
fn random_unit_vector(rng: &mut impl Rng) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..1.0f32),
            rng.gen_range(-1.0..1.0f32),
            rng.gen_range(-1.0..1.0f32),
        );
        let len_sq = v.length_squared();
        if len_sq > 1e-6 && len_sq <= 1.0 {
            return v / len_sq.sqrt();
        }
    }
}
