// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::ScenePreset;

#[derive(Parser, Debug, Clone)]
#[command(name = "backdrop")]
#[command(about = "Procedural animated background scenes", long_about = None)]
pub struct Cli {
    /// Scene to assemble
    #[arg(long, value_enum, default_value = "cloudy")]
    pub scene: ScenePreset,

    /// Frames to run before tearing the scene down
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Frame rate of the animation thread
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Seed for the scene's random construction
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// JSON file with compound descriptors replacing the built-in castles
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Hour of day (0-23) for the sky color instead of local time
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,

    /// Surface width in pixels
    #[arg(long, default_value_t = 2340)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
