use std::f32::consts::PI;

use backdrop::math::Color;
use backdrop::scene::{Content, Geometry, SceneObject};
use backdrop::scenes::{build_compound, BuildError, CompoundClass, CompoundDescriptor};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn count_named(object: &SceneObject, name: &str) -> usize {
    object.children.iter().filter(|c| c.name == name).count()
}

// ============================================================================
// Castle Composition Tests
// ============================================================================

#[test]
fn test_castle_has_22_primitives() {
    let descriptor = CompoundDescriptor::castle(Vec3::new(0.0, 0.0, -5.0), 2.5, 0.0, Color(0x8b5cf6));
    let castle = build_compound(&descriptor, &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(count_named(&castle, "tower"), 1, "one main tower");
    assert_eq!(count_named(&castle, "side_tower"), 4, "four side towers");
    assert_eq!(count_named(&castle, "roof"), 5, "main roof plus four small roofs");
    assert_eq!(count_named(&castle, "window"), 12, "3 rows x 4 sides");
    assert_eq!(castle.primitive_count(), 22);
}

#[test]
fn test_castle_main_tower_geometry() {
    let descriptor = CompoundDescriptor::castle(Vec3::ZERO, 2.5, 0.0, Color(0x8b5cf6));
    let castle = build_compound(&descriptor, &mut StdRng::seed_from_u64(0)).unwrap();
    let tower = castle.find("tower").unwrap();

    assert_eq!(tower.transform.position, Vec3::new(0.0, 2.5, 0.0));
    match &tower.content {
        Content::Mesh {
            geometry: Geometry::Box { height, .. },
            ..
        } => assert!((height - 5.0).abs() < 1e-6),
        other => panic!("tower should be a box, got {:?}", other),
    }
}

#[test]
fn test_window_rows_rise_by_scale() {
    let descriptor = CompoundDescriptor::castle(Vec3::ZERO, 2.0, 0.0, Color::WHITE);
    let castle = build_compound(&descriptor, &mut StdRng::seed_from_u64(0)).unwrap();

    let mut heights: Vec<f32> = castle
        .children
        .iter()
        .filter(|c| c.name == "window")
        .map(|c| c.transform.position.y)
        .collect();
    heights.sort_by(|a, b| a.partial_cmp(b).unwrap());
    heights.dedup_by(|a, b| (*a - *b).abs() < 1e-5);

    assert_eq!(heights.len(), 3);
    assert!((heights[0] - 1.0).abs() < 1e-5);
    assert!((heights[1] - 2.2).abs() < 1e-5);
    assert!((heights[2] - 3.4).abs() < 1e-5);
}

// ============================================================================
// Root Transform Property
// ============================================================================

#[test]
fn test_root_transform_matches_descriptor_exactly() {
    let mut rng = StdRng::seed_from_u64(1234);
    let classes = [CompoundClass::Castle, CompoundClass::Cloud, CompoundClass::CloudLayer];

    for i in 0..200 {
        let descriptor = CompoundDescriptor {
            class: classes[i % classes.len()],
            position: Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-10.0..40.0),
                rng.gen_range(-100.0..100.0),
            ),
            scale: rng.gen_range(0.1..4.0),
            rotation_y: rng.gen_range(-PI..PI),
            color_primary: Color(rng.gen_range(0..0xffffff)),
            color_secondary: None,
        };

        let object = build_compound(&descriptor, &mut rng).unwrap();
        assert_eq!(object.transform.position, descriptor.position);
        assert_eq!(object.transform.rotation.y, descriptor.rotation_y);
    }
}

// ============================================================================
// Cloud Randomized Properties
// ============================================================================

#[test]
fn test_cloud_puffs_within_ranges() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let descriptor = CompoundDescriptor::cloud(Vec3::new(0.0, 20.0, -40.0), Color::WHITE, Some(Color(0xe0e7ff)));
        let cloud = build_compound(&descriptor, &mut rng).unwrap();

        assert!((6..12).contains(&cloud.children.len()), "seed {}: {} puffs", seed, cloud.children.len());
        for puff in &cloud.children {
            let offset = puff.transform.position;
            assert!(offset.x.abs() <= 2.5 && offset.y.abs() <= 1.25 && offset.z.abs() <= 2.5);

            let Content::Mesh {
                geometry: Geometry::Sphere { radius, .. },
                material,
            } = &puff.content
            else {
                panic!("puff should be a sphere");
            };
            assert!((1.8..4.8).contains(radius));
            assert!((0.5..0.9).contains(&material.opacity));
            assert!(material.color == Color::WHITE || material.color == Color(0xe0e7ff));
        }
    }
}

#[test]
fn test_same_seed_same_cloud() {
    let descriptor = CompoundDescriptor::cloud(Vec3::ZERO, Color::WHITE, None);
    let first = build_compound(&descriptor, &mut StdRng::seed_from_u64(77)).unwrap();
    let second = build_compound(&descriptor, &mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Precondition Violations
// ============================================================================

#[test]
fn test_negative_scale_is_descriptor_error() {
    let descriptor = CompoundDescriptor::castle(Vec3::ZERO, -1.0, 0.0, Color::WHITE);
    let err = build_compound(&descriptor, &mut StdRng::seed_from_u64(0)).unwrap_err();

    assert!(matches!(err, BuildError::InvalidDescriptor { .. }));
    assert!(err.to_string().contains("scale"));
}

#[test]
fn test_non_finite_position_rejected() {
    let descriptor = CompoundDescriptor::castle(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0, 0.0, Color::WHITE);
    assert!(build_compound(&descriptor, &mut StdRng::seed_from_u64(0)).is_err());
}
