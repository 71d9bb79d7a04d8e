use crate::camera::Camera;
use crate::scene::Scene;
use crate::traits::FrameSink;

use super::animation::AnimatableSet;
use super::clock::SceneClock;
use super::particles::{ParticleSystem, PulsingLight, SparkleField};

/// Everything one animated scene owns
pub struct SceneState {
    pub scene: Scene,
    pub camera: Camera,
    pub clock: SceneClock,
    pub animatables: AnimatableSet,
    pub particles: Vec<ParticleSystem>,
    pub sparkles: Vec<SparkleField>,
    pub pulsing_lights: Vec<PulsingLight>,
}

impl SceneState {
    pub fn new(scene: Scene, camera: Camera, clock: SceneClock) -> Self {
        Self {
            scene,
            camera,
            clock,
            animatables: AnimatableSet::new(),
            particles: Vec::new(),
            sparkles: Vec::new(),
            pulsing_lights: Vec::new(),
        }
    }

    pub fn time(&self) -> f32 {
        self.clock.time()
    }
}

/// One frame: advance time, move every animated object, move the
/// camera, then draw and close the frame
///
/// Work is linear in the number of animated objects and points.
pub fn tick(state: &mut SceneState, sink: &mut dyn FrameSink) {
    let time = state.clock.advance();
    let scene = &mut state.scene;

    for entry in state.animatables.iter() {
        if let Some(object) = scene.get_mut(entry.object) {
            entry.apply(object, time);
        }
    }

    for system in &state.particles {
        if let Some(cloud) = scene.get_mut(system.object).and_then(|o| o.points_mut()) {
            system.integrate(cloud);
        }
    }

    for field in &state.sparkles {
        if let Some(cloud) = scene.get_mut(field.object).and_then(|o| o.points_mut()) {
            field.twinkle(cloud, time);
        }
    }

    for pulse in &state.pulsing_lights {
        if let Some(light) = scene.lights.get_mut(pulse.light) {
            light.intensity = pulse.intensity.sample(time);
        }
    }

    state.camera.update(time);

    let uniform = state.camera.to_uniform(time);
    sink.draw(&state.scene, &uniform);
    sink.end_frame();
}
