use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use backdrop::cli::Cli;
use backdrop::core::{AnimationLoop, ThreadScheduler};
use backdrop::renderer::LogSink;
use backdrop::scenes::{load_layout, CloudyScene, ScenePreset};
use backdrop::traits::{DisplayContext, SceneProvider};

// === Constants ===

const LOG_EVERY_FRAMES: u64 = 120;

fn provider(cli: &Cli) -> Result<Box<dyn SceneProvider>> {
    let mut provider: Box<dyn SceneProvider> = match cli.scene {
        ScenePreset::Cloudy => Box::new(CloudyScene {
            hour: cli.hour,
            ..CloudyScene::default()
        }),
        preset => preset.provider(),
    };

    if let Some(path) = &cli.layout {
        provider.with_layout(load_layout(path)?);
    }
    Ok(provider)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let provider = provider(&cli)?;
    let context = DisplayContext::new(cli.width, cli.height);
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let assembled = provider.assemble(&context, &mut rng);
    if !cli.no_ui {
        println!(
            "Scene '{}': {} objects ({} primitives), {} animated, {} failed",
            provider.name(),
            assembled.state.scene.len(),
            assembled.state.scene.primitive_count(),
            assembled.state.animatables.len(),
            assembled.report.failures.len()
        );
        for failure in &assembled.report.failures {
            println!("  skipped {}: {}", failure.what, failure.error);
        }
    }

    let (animation, token) = AnimationLoop::start(assembled.state);
    let scheduler =
        ThreadScheduler::spawn_for(animation, token, LogSink::new(LOG_EVERY_FRAMES), cli.fps, Some(cli.frames))?;
    let (animation, sink) = scheduler.join()?;

    if !cli.no_ui {
        println!(
            "Presented {} frames, scene time {:.2}s",
            sink.frames(),
            animation.state().time()
        );
    }

    Ok(())
}
