use glam::Vec3;
use rand::RngCore;

use super::assembler::{Assembled, SceneAssembler};
use super::compound::CompoundDescriptor;
use super::layout::{cloud_layout, default_castles};
use super::primitives;
use crate::camera::{Camera, CameraRig, Sway};
use crate::core::{Behavior, ParticleBounds};
use crate::math::{Bounds, Color};
use crate::scene::{Fog, Light, Material};
use crate::sky::{current_hour, sky_color};
use crate::traits::{DisplayContext, SceneProvider};

pub const CLOUDY_STEP: f32 = 0.01;
pub const CLOUD_LAYERS: usize = 3;
pub const CLOUDS_PER_LAYER: usize = 12;
pub const PARTICLE_COUNT: usize = 300;
pub const SPARKLE_COUNT: usize = 150;
pub const STAR_COUNT: usize = 400;

pub const PARTICLE_BOUNDS: ParticleBounds = ParticleBounds {
    floor: 0.0,
    ceiling: 45.0,
    limit_x: 60.0,
    limit_z: 30.0,
};

/// Landscape with layered clouds, drifting particles, castles and a
/// sky colored by the time of day
#[derive(Debug)]
pub struct CloudyScene {
    /// Hour used for the sky color; local time when unset
    pub hour: Option<u32>,
    pub castles: Vec<CompoundDescriptor>,
    pub terrain_jitter: bool,
}

impl Default for CloudyScene {
    fn default() -> Self {
        Self {
            hour: None,
            castles: default_castles(),
            terrain_jitter: true,
        }
    }
}

pub fn cloudy_rig() -> CameraRig {
    CameraRig {
        x: Sway::sin(0.0, 3.5, 0.12),
        y: Sway::sin(8.0, 2.5, 0.18),
        z: Sway::cos(22.0, 2.5, 0.12),
        target: Some(Vec3::new(0.0, 5.0, 0.0)),
    }
}

impl CloudyScene {
    fn add_lights(assembler: &mut SceneAssembler<'_>) {
        assembler.add_light(Light::ambient(Color::WHITE, 0.45));
        assembler.add_light(Light::directional(Color(0xffd700), 1.3, Vec3::new(30.0, 50.0, 30.0)).with_shadows());

        assembler.add_pulsing_light(
            Light::point(Color(0x9333ea), 1.6, 45.0, Vec3::new(-18.0, 12.0, -8.0)),
            Sway::sin(1.6, 0.4, 2.2),
        );
        assembler.add_pulsing_light(
            Light::point(Color(0x3b82f6), 1.6, 45.0, Vec3::new(18.0, 12.0, -8.0)),
            Sway::cos(1.6, 0.4, 2.7),
        );
        assembler.add_pulsing_light(
            Light::point(Color(0xf59e0b), 1.3, 40.0, Vec3::new(0.0, 18.0, 8.0)),
            Sway::sin(1.3, 0.3, 2.0),
        );

        // Rim light
        assembler.add_light(Light::point(Color::WHITE, 0.8, 35.0, Vec3::new(0.0, 5.0, 25.0)));
    }

    fn add_atmosphere(assembler: &mut SceneAssembler<'_>) {
        assembler.add_particles(
            PARTICLE_COUNT,
            Bounds::new(Vec3::new(-60.0, 0.0, -30.0), Vec3::new(60.0, 35.0, 30.0)),
            PARTICLE_BOUNDS,
            0.35,
            Material::new(Color::WHITE).translucent(0.85).additive(),
        );

        assembler.add_sparkles(
            SPARKLE_COUNT,
            Bounds::new(Vec3::new(-50.0, 5.0, -25.0), Vec3::new(50.0, 30.0, 25.0)),
            Sway::sin(0.7, 0.3, 2.0),
            0.2,
            Material::new(Color(0xffd700)).translucent(1.0).additive(),
        );

        let sky = Bounds::new(Vec3::new(-125.0, 35.0, -125.0), Vec3::new(125.0, 95.0, 125.0));
        let stars = primitives::point_cluster(
            "stars",
            STAR_COUNT,
            sky,
            0.12,
            Material::new(Color::WHITE).translucent(0.7),
            assembler.rng(),
        );
        assembler.add_animated(
            "stars",
            stars,
            Behavior::Spin {
                rate: Vec3::new(0.0, 0.0003, 0.0),
            },
        );
    }
}

impl SceneProvider for CloudyScene {
    fn assemble(&self, context: &DisplayContext, rng: &mut dyn RngCore) -> Assembled {
        let hour = self.hour.unwrap_or_else(current_hour);
        let sky = sky_color(hour);
        log::debug!("cloudy scene sky for hour {}: {:06x}", hour, sky.0);

        let mut assembler = SceneAssembler::new(sky, CLOUDY_STEP, rng);
        assembler.scene_mut().fog = Some(Fog {
            color: sky,
            density: 0.012,
        });

        Self::add_lights(&mut assembler);

        let clouds = cloud_layout(CLOUD_LAYERS, CLOUDS_PER_LAYER, assembler.rng());
        assembler.add_compounds(&clouds);

        Self::add_atmosphere(&mut assembler);

        let castles = assembler.add_compounds(&self.castles);
        log::info!("Castles loaded: {} of {}", castles, self.castles.len());

        let ground = primitives::ground_plane(220.0, 60, self.terrain_jitter, assembler.rng());
        assembler.add_static("ground", ground);

        assembler.finish(Camera::new(cloudy_rig(), 75.0, context.aspect()))
    }

    fn with_layout(&mut self, layout: Vec<CompoundDescriptor>) {
        self.castles = layout;
    }

    fn name(&self) -> &str {
        "cloudy"
    }
}
