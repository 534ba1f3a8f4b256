use firework_diorama::camera::{TrackballCamera, MIN_DISTANCE, PITCH_LIMIT};
use glam::Vec3;

const EPSILON: f32 = 1e-5;

#[cfg(test)]
mod clamp_tests {
    use super::*;

    #[test]
    fn test_pitch_stays_inside_open_interval() {
        let mut camera = TrackballCamera::default();

        // Hammer the pitch in both directions with mixed magnitudes
        for i in 0..1000 {
            let delta = if i % 3 == 0 { -2.5 } else { 1.7 };
            camera.rotate_pitch(delta);
            assert!(
                camera.pitch().abs() <= PITCH_LIMIT + EPSILON,
                "pitch escaped clamp range: {}",
                camera.pitch()
            );
        }

        camera.rotate_pitch(f32::MAX / 1e10);
        assert!(camera.pitch() <= PITCH_LIMIT + EPSILON);
        camera.rotate_pitch(-f32::MAX / 1e10);
        assert!(camera.pitch() >= -PITCH_LIMIT - EPSILON);
    }

    #[test]
    fn test_distance_never_drops_below_minimum() {
        let mut camera = TrackballCamera::default();

        for _ in 0..100 {
            camera.zoom(37.5);
            assert!(
                camera.distance() >= MIN_DISTANCE,
                "distance below minimum: {}",
                camera.distance()
            );
        }

        // Zooming back out still works after hitting the floor
        camera.zoom(-10.0);
        assert!((camera.distance() - (MIN_DISTANCE + 10.0)).abs() < EPSILON);
    }

    #[test]
    fn test_view_matrix_is_finite_at_clamp_boundaries() {
        let mut camera = TrackballCamera::default();
        camera.rotate_pitch(100.0);
        camera.zoom(1e9);

        let m = camera.view_matrix();
        assert!(
            m.to_cols_array().iter().all(|v| v.is_finite()),
            "view matrix degenerated at clamp boundary"
        );
    }
}

#[cfg(test)]
mod reset_tests {
    use super::*;

    #[test]
    fn test_reset_is_idempotent() {
        let mut camera = TrackballCamera::default();
        camera.rotate_yaw(1.3);
        camera.rotate_pitch(-0.4);
        camera.zoom(55.0);
        camera.pan(Vec3::new(1.0, -2.0, 3.0));

        camera.reset();
        let once = (
            camera.distance(),
            camera.yaw(),
            camera.pitch(),
            camera.center(),
        );

        camera.reset();
        let twice = (
            camera.distance(),
            camera.yaw(),
            camera.pitch(),
            camera.center(),
        );

        assert_eq!(once, twice, "second reset changed state");
    }

    #[test]
    fn test_reset_restores_view_matrix() {
        let mut reference = TrackballCamera::default();
        reference.reset();
        let expected = reference.view_matrix();

        let mut camera = TrackballCamera::default();
        camera.rotate_yaw(2.0);
        camera.pan(Vec3::Z);
        camera.reset();

        let diff = (camera.view_matrix() - expected).abs();
        assert!(
            diff.to_cols_array().iter().all(|v| *v < EPSILON),
            "reset did not restore the view"
        );
    }
}

#[cfg(test)]
mod orbit_tests {
    use super::*;

    #[test]
    fn test_yaw_round_trip_restores_orientation() {
        let mut camera = TrackballCamera::default();
        camera.reset();
        let yaw_before = camera.yaw();
        let view_before = camera.view_matrix();

        camera.rotate_yaw(0.73);
        camera.rotate_yaw(-0.73);

        assert!(
            (camera.yaw() - yaw_before).abs() < EPSILON,
            "yaw did not return: {} vs {}",
            camera.yaw(),
            yaw_before
        );

        let diff = (camera.view_matrix() - view_before).abs();
        assert!(
            diff.to_cols_array().iter().all(|v| *v < 1e-4),
            "view matrix drifted after round trip"
        );
    }

    #[test]
    fn test_eye_sits_at_distance_from_center() {
        let mut camera = TrackballCamera::default();
        camera.rotate_yaw(0.9);
        camera.rotate_pitch(0.4);
        camera.zoom(30.0);

        let radius = (camera.eye_position() - camera.center()).length();
        assert!(
            (radius - camera.distance()).abs() < 1e-3,
            "eye radius {} != distance {}",
            radius,
            camera.distance()
        );
    }

    #[test]
    fn test_zero_orientation_looks_down_positive_z() {
        let mut camera = TrackballCamera::default();
        camera.reset();

        let offset = (camera.eye_position() - camera.center()) / camera.distance();
        assert!((offset - Vec3::Z).length() < EPSILON, "offset {:?}", offset);
    }
}

#[cfg(test)]
mod pan_tests {
    use super::*;

    #[test]
    fn test_pan_z_moves_center_along_forward_only() {
        let mut camera = TrackballCamera::new(1.0, 2.0);
        camera.reset();
        let before = camera.center();

        camera.pan(Vec3::new(0.0, 0.0, 1.0));
        let moved = camera.center() - before;

        // yaw = pitch = 0 forward is +Z; no sideways or vertical coupling
        assert!(moved.x.abs() < EPSILON, "x coupled into z-pan: {:?}", moved);
        assert!(moved.y.abs() < EPSILON, "y coupled into z-pan: {:?}", moved);
        assert!((moved.z - 1.0).abs() < EPSILON, "wrong forward step: {:?}", moved);
    }

    #[test]
    fn test_pan_x_moves_center_along_right_only() {
        let mut camera = TrackballCamera::new(1.0, 2.0);
        camera.reset();
        let before = camera.center();

        camera.pan(Vec3::new(1.0, 0.0, 0.0));
        let moved = camera.center() - before;

        // right = forward x up = (0,0,1) x (0,1,0) = (-1,0,0)
        assert!((moved.x + 1.0).abs() < EPSILON, "wrong right step: {:?}", moved);
        assert!(moved.y.abs() < EPSILON, "y coupled into x-pan: {:?}", moved);
        assert!(moved.z.abs() < EPSILON, "z coupled into x-pan: {:?}", moved);
    }

    #[test]
    fn test_pan_leaves_orbit_state_untouched() {
        let mut camera = TrackballCamera::default();
        camera.rotate_yaw(0.5);
        camera.rotate_pitch(0.2);
        let (yaw, pitch, distance) = (camera.yaw(), camera.pitch(), camera.distance());

        camera.pan(Vec3::new(3.0, -1.0, 2.0));

        assert_eq!(camera.yaw(), yaw);
        assert_eq!(camera.pitch(), pitch);
        assert_eq!(camera.distance(), distance);
    }

    #[test]
    fn test_pan_y_is_world_up_regardless_of_orientation() {
        let mut camera = TrackballCamera::new(1.0, 2.0);
        camera.rotate_yaw(1.1);
        camera.rotate_pitch(-0.6);
        let before = camera.center();

        camera.pan(Vec3::new(0.0, 1.0, 0.0));
        let moved = camera.center() - before;

        assert!((moved - Vec3::Y).length() < EPSILON, "vertical pan bent: {:?}", moved);
    }
}
