mod ambient;
mod assembler;
mod castles;
mod cloudy;
mod compound;
mod error;
mod layout;
pub mod primitives;

pub use ambient::AmbientScene;
pub use assembler::{Assembled, BuildFailure, BuildReport, SceneAssembler};
pub use castles::{castle_rig, CastleScene};
pub use cloudy::{cloudy_rig, CloudyScene, PARTICLE_BOUNDS};
pub use compound::{build_compound, CompoundClass, CompoundDescriptor, CLOUD_LAYER_PUFFS, CLOUD_PALETTE};
pub use error::BuildError;
pub use layout::{cloud_layout, default_castles, load_layout};

use crate::traits::SceneProvider;

/// Built-in background scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenePreset {
    /// Planets and stars on a night sky
    Ambient,
    /// Clouds, particles and castles over rolling ground
    Cloudy,
    /// Castles alone, over a transparent background
    Castles,
}

impl ScenePreset {
    pub fn provider(self) -> Box<dyn SceneProvider> {
        match self {
            ScenePreset::Ambient => Box::new(AmbientScene),
            ScenePreset::Cloudy => Box::new(CloudyScene::default()),
            ScenePreset::Castles => Box::new(CastleScene::default()),
        }
    }
}
