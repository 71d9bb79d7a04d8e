use glam::Vec3;
use rand::RngCore;

use super::assembler::{Assembled, SceneAssembler};
use super::primitives;
use crate::camera::{Camera, CameraRig, Sway};
use crate::core::Behavior;
use crate::math::{Bounds, Color};
use crate::scene::{Light, SceneObject};
use crate::sky::NIGHT_SKY;
use crate::traits::{DisplayContext, SceneProvider};
use crate::types::Transform;

pub const AMBIENT_STEP: f32 = 0.016;
pub const AMBIENT_STARS: usize = 50;

struct PlanetSpec {
    radius: f32,
    segments: u32,
    color: u32,
    emissive: u32,
    shininess: f32,
    opacity: f32,
    z: f32,
    spin: Vec3,
    x: Sway,
    y: Sway,
}

const PLANETS: [PlanetSpec; 3] = [
    // Large purple
    PlanetSpec {
        radius: 4.5,
        segments: 64,
        color: 0x8b5cf6,
        emissive: 0x4c1d95,
        shininess: 120.0,
        opacity: 0.9,
        z: -3.0,
        spin: Vec3::new(0.004, 0.008, 0.0),
        x: Sway::cos(-6.0, 0.8, 0.6),
        y: Sway::sin(2.0, 1.2, 0.8),
    },
    // Large blue
    PlanetSpec {
        radius: 3.8,
        segments: 64,
        color: 0x6366f1,
        emissive: 0x312e81,
        shininess: 120.0,
        opacity: 0.85,
        z: -6.0,
        spin: Vec3::new(0.005, -0.01, 0.0),
        x: Sway::sin(8.0, 1.0, 0.5),
        y: Sway::cos(-3.0, 1.5, 1.0),
    },
    // Medium teal
    PlanetSpec {
        radius: 2.5,
        segments: 48,
        color: 0x14b8a6,
        emissive: 0x0f766e,
        shininess: 100.0,
        opacity: 0.8,
        z: -8.0,
        spin: Vec3::new(-0.003, 0.012, 0.0),
        x: Sway::cos(-3.0, 0.6, 0.9),
        y: Sway::sin(-5.0, 1.0, 1.2),
    },
];

/// Night sky with three floating planets and scattered stars
#[derive(Debug, Default)]
pub struct AmbientScene;

impl SceneProvider for AmbientScene {
    fn assemble(&self, context: &DisplayContext, rng: &mut dyn RngCore) -> Assembled {
        let mut assembler = SceneAssembler::new(NIGHT_SKY, AMBIENT_STEP, rng);

        assembler.add_light(Light::ambient(Color(0x404040), 1.5));
        assembler.add_light(Light::point(Color(0x6366f1), 2.0, 50.0, Vec3::new(10.0, 10.0, 10.0)));

        let mut stars = SceneObject::group("stars");
        let field = Bounds::centered(Vec3::ZERO, Vec3::splat(50.0));
        for _ in 0..AMBIENT_STARS {
            let position = field.sample(assembler.rng());
            match primitives::star(0.05) {
                Ok(star) => stars.add(star.with_transform(Transform::at(position))),
                Err(err) => log::warn!("skipping star: {}", err),
            }
        }
        assembler.add_static("stars", Ok(stars));

        for orbit in &PLANETS {
            let planet = primitives::planet(
                orbit.radius,
                orbit.segments,
                Color(orbit.color),
                Color(orbit.emissive),
                orbit.shininess,
                orbit.opacity,
            )
            .map(|p| p.with_transform(Transform::at(Vec3::new(orbit.x.base, orbit.y.base, orbit.z))));
            assembler.add_animated(
                "planet",
                planet,
                Behavior::Planet {
                    spin: orbit.spin,
                    x: orbit.x,
                    y: orbit.y,
                },
            );
        }

        let rig = CameraRig {
            x: Sway::sin(0.0, 1.5, 0.3),
            y: Sway::cos(0.0, 0.8, 0.25),
            z: Sway::fixed(15.0),
            target: None,
        };
        assembler.finish(Camera::new(rig, 75.0, context.aspect()))
    }

    fn name(&self) -> &str {
        "ambient"
    }
}
