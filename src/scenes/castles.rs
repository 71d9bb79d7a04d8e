use glam::Vec3;
use rand::RngCore;

use super::assembler::{Assembled, SceneAssembler};
use super::compound::CompoundDescriptor;
use super::layout::default_castles;
use crate::camera::{Camera, CameraRig, Sway};
use crate::math::Color;
use crate::scene::Light;
use crate::traits::{DisplayContext, SceneProvider};

pub const CASTLES_STEP: f32 = 0.01;

/// Castles over a transparent clear color, composited on top of a
/// static background image by the host
#[derive(Debug)]
pub struct CastleScene {
    pub layout: Vec<CompoundDescriptor>,
}

impl Default for CastleScene {
    fn default() -> Self {
        Self {
            layout: default_castles(),
        }
    }
}

pub fn castle_rig() -> CameraRig {
    CameraRig {
        x: Sway::sin(0.0, 3.5, 0.12),
        y: Sway::sin(6.0, 1.5, 0.18),
        z: Sway::cos(20.0, 1.5, 0.12),
        target: Some(Vec3::new(0.0, 3.0, 0.0)),
    }
}

impl SceneProvider for CastleScene {
    fn assemble(&self, context: &DisplayContext, rng: &mut dyn RngCore) -> Assembled {
        let mut assembler = SceneAssembler::new(Color::BLACK, CASTLES_STEP, rng);
        assembler.scene_mut().clear_alpha = 0.0;

        assembler.add_light(Light::ambient(Color::WHITE, 0.6));
        assembler.add_light(Light::directional(Color::WHITE, 0.8, Vec3::new(10.0, 20.0, 10.0)));

        let built = assembler.add_compounds(&self.layout);
        log::info!("Created {} of {} castles", built, self.layout.len());

        assembler.finish(Camera::new(castle_rig(), 50.0, context.aspect()))
    }

    fn with_layout(&mut self, layout: Vec<CompoundDescriptor>) {
        self.layout = layout;
    }

    fn name(&self) -> &str {
        "castles"
    }
}
