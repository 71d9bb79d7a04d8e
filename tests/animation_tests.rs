use backdrop::core::{tick, AnimationLoop, LoopState, SceneState};
use backdrop::renderer::RecordingSink;
use backdrop::scene::{Content, SceneObject};
use backdrop::scenes::{cloudy_rig, CastleScene, CloudyScene, PARTICLE_BOUNDS};
use backdrop::traits::{DisplayContext, SceneProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cloudy_state(seed: u64) -> SceneState {
    let scene = CloudyScene {
        hour: Some(12),
        ..CloudyScene::default()
    };
    scene
        .assemble(&DisplayContext::default(), &mut StdRng::seed_from_u64(seed))
        .state
}

fn points(state: &SceneState, object: backdrop::scene::ObjectId) -> &backdrop::scene::PointCloud {
    match &state.scene.get(object).unwrap().content {
        Content::Points(cloud) => cloud,
        other => panic!("expected points, got {:?}", other),
    }
}

// ============================================================================
// Clock and Camera
// ============================================================================

#[test]
fn test_thousand_ticks_reach_ten_seconds() {
    let mut state = cloudy_state(0);
    let mut sink = RecordingSink::new();
    let bounds = cloudy_rig().bounds();
    let animated = state.animatables.len();

    assert_eq!(state.time(), 0.0);
    for _ in 0..1000 {
        tick(&mut state, &mut sink);
        assert!(bounds.contains(state.camera.position), "camera left orbit at {}", state.camera.position);
    }

    assert!((state.time() - 10.0).abs() < 1e-4, "time was {}", state.time());
    assert_eq!(state.clock.ticks(), 1000);
    assert_eq!(state.animatables.len(), animated);
    assert_eq!(sink.draws, 1000);
    assert!(sink.events_balanced());
}

#[test]
fn test_tick_advances_by_n_steps() {
    let mut state = CastleScene::default()
        .assemble(&DisplayContext::default(), &mut StdRng::seed_from_u64(0))
        .state;
    let mut sink = RecordingSink::new();
    let step = state.clock.step();

    for n in 1..=250u32 {
        tick(&mut state, &mut sink);
        assert!((state.time() - n as f32 * step).abs() < 1e-4);
    }
    assert_eq!(state.animatables.len(), 6);
}

// ============================================================================
// Particles and Sparkles
// ============================================================================

#[test]
fn test_particles_stay_in_bounds_for_any_seed() {
    for seed in 0..8 {
        let mut state = cloudy_state(seed);
        let mut sink = RecordingSink::new();
        let particles = state.particles[0].object;

        for _ in 0..800 {
            tick(&mut state, &mut sink);
            let cloud = points(&state, particles);
            assert!(
                cloud.positions.iter().all(|p| PARTICLE_BOUNDS.contains(*p)),
                "seed {} left particle bounds",
                seed
            );
        }
    }
}

#[test]
fn test_particles_recycle_at_ceiling() {
    let mut state = cloudy_state(1);
    let mut sink = RecordingSink::new();
    let particles = state.particles[0].object;

    // Slowest particles climb 0.015 per tick; 3000 ticks lifts every one past 45
    let mut saw_reset = false;
    let mut previous: Vec<f32> = points(&state, particles).positions.iter().map(|p| p.y).collect();
    for _ in 0..3000 {
        tick(&mut state, &mut sink);
        let current: Vec<f32> = points(&state, particles).positions.iter().map(|p| p.y).collect();
        saw_reset |= current.iter().zip(&previous).any(|(now, before)| now < before);
        previous = current;
    }
    assert!(saw_reset);
}

#[test]
fn test_sparkle_opacity_in_unit_range() {
    let mut state = cloudy_state(2);
    let mut sink = RecordingSink::new();
    let sparkles = state.sparkles[0].object;

    for _ in 0..1000 {
        tick(&mut state, &mut sink);
        let opacity = points(&state, sparkles).material.opacity;
        assert!((0.0..=1.0).contains(&opacity), "opacity {}", opacity);
    }
}

#[test]
fn test_lights_pulse_around_base() {
    let mut state = cloudy_state(0);
    let mut sink = RecordingSink::new();
    for _ in 0..500 {
        tick(&mut state, &mut sink);
        for pulse in &state.pulsing_lights {
            let light = state.scene.lights[pulse.light];
            assert!((light.intensity - pulse.intensity.base).abs() <= pulse.intensity.amplitude + 1e-5);
        }
    }
}

// ============================================================================
// Loop Lifecycle
// ============================================================================

fn snapshot(state: &SceneState) -> Vec<SceneObject> {
    state.scene.objects().to_vec()
}

#[test]
fn test_cancelled_loop_does_not_mutate_or_render() {
    let (mut animation, token) = AnimationLoop::start(cloudy_state(4));
    let mut sink = RecordingSink::new();
    animation.run_for(&mut sink, 10);

    let before = snapshot(animation.state());
    let time = animation.state().time();
    let camera = animation.state().camera.position;

    token.cancel();
    assert_eq!(animation.step(&mut sink), LoopState::Stopped);

    assert_eq!(snapshot(animation.state()), before);
    assert_eq!(animation.state().time(), time);
    assert_eq!(animation.state().camera.position, camera);
    assert_eq!(sink.draws, 10);
    assert_eq!(sink.frames_ended, 10);
}

#[test]
fn test_stopped_state_animates_only_under_new_loop() {
    let (mut animation, token) = AnimationLoop::start(cloudy_state(0));
    let mut sink = RecordingSink::new();
    token.cancel();
    animation.step(&mut sink);

    let state = animation.into_state();
    let (mut restarted, _token) = AnimationLoop::start(state);
    assert_eq!(restarted.step(&mut sink), LoopState::Running);
    assert_eq!(sink.draws, 1);
}
