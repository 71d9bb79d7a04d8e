use rand::RngCore;

use super::compound::{build_compound, CompoundClass, CompoundDescriptor};
use super::error::BuildError;
use super::primitives;
use crate::camera::{Camera, Sway};
use crate::core::{
    random_velocity, AnimatableSet, Behavior, ParticleBounds, ParticleSystem, PulsingLight, SceneClock, SceneState,
    SparkleField,
};
use crate::math::{Bounds, Color};
use crate::scene::{Light, Material, ObjectId, Scene, SceneObject};

/// One piece of the scene that could not be built
#[derive(Debug, Clone, PartialEq)]
pub struct BuildFailure {
    pub what: String,
    pub error: BuildError,
}

/// Outcome of assembling a scene: what was built and what was skipped
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub built: usize,
    pub failures: Vec<BuildFailure>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Assembled {
    pub state: SceneState,
    pub report: BuildReport,
}

/// Incremental scene builder that keeps going when a piece fails
///
/// Every failed object is logged and recorded in the [`BuildReport`];
/// the rest of the scene is still assembled.
pub struct SceneAssembler<'r> {
    scene: Scene,
    animatables: AnimatableSet,
    particles: Vec<ParticleSystem>,
    sparkles: Vec<SparkleField>,
    pulsing_lights: Vec<PulsingLight>,
    report: BuildReport,
    step: f32,
    rng: &'r mut dyn RngCore,
}

impl<'r> SceneAssembler<'r> {
    pub fn new(clear_color: Color, step: f32, rng: &'r mut dyn RngCore) -> Self {
        Self {
            scene: Scene::new(clear_color),
            animatables: AnimatableSet::new(),
            particles: Vec::new(),
            sparkles: Vec::new(),
            pulsing_lights: Vec::new(),
            report: BuildReport::default(),
            step,
            rng,
        }
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    pub fn add_light(&mut self, light: Light) -> usize {
        self.scene.add_light(light)
    }

    /// Light whose intensity follows `intensity` every tick
    pub fn add_pulsing_light(&mut self, light: Light, intensity: Sway) -> usize {
        let index = self.scene.add_light(light);
        self.pulsing_lights.push(PulsingLight {
            light: index,
            intensity,
        });
        index
    }

    fn record(&mut self, what: &str, built: Result<SceneObject, BuildError>) -> Option<ObjectId> {
        match built {
            Ok(object) => {
                self.report.built += 1;
                Some(self.scene.spawn(object))
            }
            Err(error) => {
                log::warn!("skipping {}: {}", what, error);
                self.report.failures.push(BuildFailure {
                    what: what.to_string(),
                    error,
                });
                None
            }
        }
    }

    /// Add an object that never moves
    pub fn add_static(&mut self, what: &str, built: Result<SceneObject, BuildError>) -> Option<ObjectId> {
        self.record(what, built)
    }

    pub fn add_animated(
        &mut self,
        what: &str,
        built: Result<SceneObject, BuildError>,
        behavior: Behavior,
    ) -> Option<ObjectId> {
        let id = self.record(what, built)?;
        self.animatables.push(id, behavior);
        Some(id)
    }

    /// Build a compound object and animate it by its class
    pub fn add_compound(&mut self, descriptor: &CompoundDescriptor) -> Option<ObjectId> {
        let built = build_compound(descriptor, &mut *self.rng);
        let behavior = match descriptor.class {
            CompoundClass::Castle => Behavior::Castle,
            CompoundClass::Cloud => Behavior::Cloud,
            CompoundClass::CloudLayer => Behavior::CloudLayer,
        };
        self.add_animated(descriptor.class.name(), built, behavior)
    }

    pub fn add_compounds(&mut self, descriptors: &[CompoundDescriptor]) -> usize {
        descriptors
            .iter()
            .filter_map(|descriptor| self.add_compound(descriptor))
            .count()
    }

    /// Rising particles scattered in `spawn`, recycled inside `bounds`
    pub fn add_particles(
        &mut self,
        count: usize,
        spawn: Bounds,
        bounds: ParticleBounds,
        size: f32,
        material: Material,
    ) -> Option<ObjectId> {
        let built = primitives::point_cluster("particles", count, spawn, size, material, &mut *self.rng);
        let velocities = (0..count).map(|_| random_velocity(&mut *self.rng)).collect();
        let object = self.record("particles", built)?;
        self.particles.push(ParticleSystem {
            object,
            velocities,
            bounds,
        });
        Some(object)
    }

    /// Twinkling points kept within the vertical extent of `spawn`
    pub fn add_sparkles(
        &mut self,
        count: usize,
        spawn: Bounds,
        opacity: Sway,
        size: f32,
        material: Material,
    ) -> Option<ObjectId> {
        let built = primitives::point_cluster("sparkles", count, spawn, size, material, &mut *self.rng);
        let object = self.record("sparkles", built)?;
        self.sparkles.push(SparkleField {
            object,
            band: (spawn.min.y, spawn.max.y),
            opacity,
        });
        Some(object)
    }

    pub fn finish(self, camera: Camera) -> Assembled {
        if !self.report.is_complete() {
            log::warn!(
                "scene assembled with {} of {} objects ({} failed)",
                self.report.built,
                self.report.built + self.report.failures.len(),
                self.report.failures.len()
            );
        } else {
            log::info!(
                "scene assembled: {} objects, {} animated, {} lights",
                self.scene.len(),
                self.animatables.len(),
                self.scene.lights.len()
            );
        }

        let mut state = SceneState::new(self.scene, camera, SceneClock::new(self.step));
        state.animatables = self.animatables;
        state.particles = self.particles;
        state.sparkles = self.sparkles;
        state.pulsing_lights = self.pulsing_lights;

        Assembled {
            state,
            report: self.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraRig;
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn camera() -> Camera {
        let rig = CameraRig {
            x: Sway::fixed(0.0),
            y: Sway::fixed(4.0),
            z: Sway::fixed(20.0),
            target: Some(Vec3::ZERO),
        };
        Camera::new(rig, 50.0, 1.0)
    }

    #[test]
    fn test_failed_compound_is_reported_not_spawned() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut assembler = SceneAssembler::new(Color::BLACK, 0.01, &mut rng);
        let good = CompoundDescriptor::castle(Vec3::ZERO, 1.0, 0.0, Color::WHITE);
        let bad = CompoundDescriptor::castle(Vec3::ZERO, -2.0, 0.0, Color::WHITE);

        assert!(assembler.add_compound(&good).is_some());
        assert!(assembler.add_compound(&bad).is_none());

        let assembled = assembler.finish(camera());
        assert_eq!(assembled.state.scene.len(), 1);
        assert_eq!(assembled.state.animatables.len(), 1);
        assert_eq!(assembled.report.built, 1);
        assert_eq!(assembled.report.failures.len(), 1);
        assert_eq!(assembled.report.failures[0].what, "castle");
    }

    #[test]
    fn test_sparkle_band_follows_spawn_box() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut assembler = SceneAssembler::new(Color::BLACK, 0.01, &mut rng);
        let spawn = Bounds::new(Vec3::new(-50.0, 5.0, -25.0), Vec3::new(50.0, 30.0, 25.0));
        assembler.add_sparkles(10, spawn, Sway::sin(0.7, 0.3, 2.0), 0.2, Material::new(Color(0xffd700)));
        let assembled = assembler.finish(camera());
        assert_eq!(assembled.state.sparkles[0].band, (5.0, 30.0));
    }

    #[test]
    fn test_pulsing_light_registered() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut assembler = SceneAssembler::new(Color::BLACK, 0.01, &mut rng);
        assembler.add_light(Light::ambient(Color::WHITE, 0.45));
        let index = assembler.add_pulsing_light(
            Light::point(Color(0x9333ea), 1.6, 45.0, Vec3::new(-18.0, 12.0, -8.0)),
            Sway::sin(1.6, 0.4, 2.2),
        );
        let assembled = assembler.finish(camera());
        assert_eq!(index, 1);
        assert_eq!(assembled.state.pulsing_lights[0].light, 1);
    }
}
