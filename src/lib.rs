pub mod camera;
pub mod cli;
pub mod core;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod sky;
pub mod traits;
pub mod types;

pub use scenes::{
    build_compound, AmbientScene, Assembled, BuildError, BuildReport, CastleScene, CloudyScene, CompoundDescriptor,
    ScenePreset,
};
