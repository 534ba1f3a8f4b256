use firework_diorama::sim::{Particle, DECAY_RATE, MAX_LIFESPAN};
use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

const GRAVITY: Vec3 = Vec3::new(0.0, -0.1, 0.0);

#[cfg(test)]
mod seed_tests {
    use super::*;

    #[test]
    fn test_seed_explodes_exactly_once_at_apex() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        let mut seed = Particle::seed(Vec3::new(0.0, -50.0, 0.0), &mut rng);
        assert!(seed.is_seed);
        assert!(seed.velocity.y > 0.0, "seed must launch upward");

        let mut explosions = 0;
        let mut exploded_at_step = None;

        for step in 0..2000 {
            seed.apply_force(GRAVITY);
            seed.update();
            let vy = seed.velocity.y;
            if seed.explode() {
                explosions += 1;
                exploded_at_step = Some(step);
                assert!(vy <= 0.0, "exploded while still ascending (vy = {vy})");
            }
        }

        assert_eq!(explosions, 1, "explode() must fire exactly once");
        assert!(exploded_at_step.is_some(), "seed never reached apex");
    }

    #[test]
    fn test_seed_is_dead_after_explosion() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        let mut seed = Particle::seed(Vec3::ZERO, &mut rng);

        while !seed.explode() {
            seed.apply_force(GRAVITY);
            seed.update();
        }

        assert!(seed.is_dead(), "exploded seed must be dead");
        assert!(!seed.explode(), "dead seed must not explode again");
    }

    #[test]
    fn test_seed_lifespan_does_not_decay() {
        let mut rng = Pcg64Mcg::seed_from_u64(3);
        let mut seed = Particle::seed(Vec3::ZERO, &mut rng);

        // No gravity: the seed keeps ascending and never triggers
        for _ in 0..500 {
            seed.update();
            assert_eq!(seed.lifespan, MAX_LIFESPAN, "seed lifespan decayed");
            assert!(!seed.is_dead());
        }
    }

    #[test]
    fn test_descending_seed_explodes_on_first_check() {
        let mut seed = Particle {
            position: Vec3::ZERO,
            velocity: Vec3::new(0.0, -1.0, 0.0),
            acceleration: Vec3::ZERO,
            lifespan: MAX_LIFESPAN,
            is_seed: true,
        };

        seed.apply_force(GRAVITY);
        seed.update();
        assert!(seed.explode(), "descending seed must detonate immediately");
    }
}

#[cfg(test)]
mod ember_tests {
    use super::*;

    #[test]
    fn test_ember_lifespan_strictly_decreases_until_death() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        let mut ember = Particle::ember(Vec3::ZERO, &mut rng);
        assert!(!ember.is_seed);

        let mut previous = ember.lifespan;
        let mut steps_to_death = 0;
        while !ember.is_dead() {
            ember.apply_force(GRAVITY);
            ember.update();
            assert!(
                ember.lifespan < previous,
                "lifespan did not decrease: {} -> {}",
                previous,
                ember.lifespan
            );
            previous = ember.lifespan;
            steps_to_death += 1;
        }

        let expected = (MAX_LIFESPAN / DECAY_RATE).ceil() as i32;
        assert_eq!(steps_to_death, expected, "death came at the wrong step");

        // Dead stays dead
        for _ in 0..10 {
            ember.update();
            assert!(ember.is_dead());
        }
    }

    #[test]
    fn test_ember_never_explodes() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let mut ember = Particle::ember(Vec3::ZERO, &mut rng);

        for _ in 0..100 {
            ember.apply_force(GRAVITY);
            ember.update();
            assert!(!ember.explode(), "embers must not explode");
        }
    }

    #[test]
    fn test_ember_velocity_damps_each_step() {
        let mut rng = Pcg64Mcg::seed_from_u64(13);
        let mut ember = Particle::ember(Vec3::ZERO, &mut rng);
        let speed_before = ember.velocity.length();

        // No external force: damping alone must shrink the velocity
        ember.update();
        assert!(
            ember.velocity.length() < speed_before,
            "velocity was not damped"
        );
    }

    #[test]
    fn test_force_accumulates_and_clears() {
        let mut rng = Pcg64Mcg::seed_from_u64(17);
        let mut p = Particle::ember(Vec3::ZERO, &mut rng);

        p.apply_force(Vec3::new(0.0, -0.1, 0.0));
        p.apply_force(Vec3::new(0.2, 0.0, 0.0));
        assert_eq!(p.acceleration, Vec3::new(0.2, -0.1, 0.0));

        p.update();
        assert_eq!(p.acceleration, Vec3::ZERO, "acceleration must reset after update");
    }
}
