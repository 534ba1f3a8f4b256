use glam::Vec3;
use log::info;

use crate::types::BoxData;

/// Procedural night diorama: a hillside hamlet with a rail line running
/// through it, framed so the default camera looks across the valley the
/// fireworks launch from.
pub fn create_diorama_scene() -> Vec<BoxData> {
    let ground = BoxData::new(
        Vec3::new(-200.0, -52.0, -200.0),
        Vec3::new(200.0, -50.0, 200.0),
        Vec3::new(0.10, 0.12, 0.16),
    );

    // Terraced rock shelves climbing away from the launch field
    let shelves = (0..4).map(|i| {
        let fi = i as f32;
        BoxData::new(
            Vec3::new(20.0 + fi * 30.0, -50.0, -160.0),
            Vec3::new(50.0 + fi * 30.0, -46.0 + fi * 6.0, 160.0),
            Vec3::new(0.16, 0.15, 0.18),
        )
    });

    // Hamlet: a row of small houses with slightly varied footprints
    let houses = (0..6).flat_map(|i| {
        let fx = 40.0 + (i % 3) as f32 * 26.0;
        let fz = -70.0 + (i / 3) as f32 * 120.0 + (i % 3) as f32 * 14.0;
        let h = 10.0 + (i % 2) as f32 * 4.0;
        [
            // walls
            BoxData::new(
                Vec3::new(fx, -44.0, fz),
                Vec3::new(fx + 16.0, -44.0 + h, fz + 14.0),
                Vec3::new(0.35, 0.27, 0.20),
            ),
            // flat dark roof slab
            BoxData::new(
                Vec3::new(fx - 1.5, -44.0 + h, fz - 1.5),
                Vec3::new(fx + 17.5, -42.0 + h, fz + 15.5),
                Vec3::new(0.12, 0.10, 0.10),
            ),
        ]
    });

    // Rail line crossing the valley floor on low sleepers
    let rails = (-8..8).flat_map(|i| {
        let fz = i as f32 * 20.0;
        [
            BoxData::new(
                Vec3::new(-110.0, -49.8, fz),
                Vec3::new(10.0, -49.2, fz + 2.0),
                Vec3::new(0.25, 0.22, 0.20),
            ),
            BoxData::new(
                Vec3::new(-110.0, -49.2, fz + 0.2),
                Vec3::new(10.0, -48.9, fz + 0.6),
                Vec3::new(0.45, 0.45, 0.50),
            ),
        ]
    });

    // Lantern pillars along the rail line
    let pillars = (-3..4).map(|i| {
        let fz = i as f32 * 45.0;
        BoxData::new(
            Vec3::new(12.0, -50.0, fz),
            Vec3::new(14.0, -30.0, fz + 2.0),
            Vec3::new(0.30, 0.28, 0.24),
        )
    });

    // Moon block high above the hamlet
    let moon = BoxData::new(
        Vec3::new(-10.0, 74.0, -16.0),
        Vec3::new(2.0, 86.0, -4.0),
        Vec3::new(0.95, 0.93, 0.82),
    );

    let boxes: Vec<BoxData> = std::iter::once(ground)
        .chain(shelves)
        .chain(houses)
        .chain(rails)
        .chain(pillars)
        .chain(std::iter::once(moon))
        .collect();

    info!("diorama built: {} blocks", boxes.len());
    boxes
}
