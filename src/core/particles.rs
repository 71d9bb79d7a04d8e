use glam::Vec3;
use rand::Rng;

use crate::camera::Sway;
use crate::scene::{ObjectId, PointCloud};

/// Box the floating particles live in
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleBounds {
    pub floor: f32,
    pub ceiling: f32,
    /// Half-extent along X
    pub limit_x: f32,
    /// Half-extent along Z
    pub limit_z: f32,
}

impl ParticleBounds {
    pub fn contains(&self, p: Vec3) -> bool {
        p.y >= self.floor
            && p.y <= self.ceiling
            && p.x.abs() <= self.limit_x
            && p.z.abs() <= self.limit_z
    }
}

/// Points rising on their own velocities, recycled at the edges
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    pub object: ObjectId,
    pub velocities: Vec<Vec3>,
    pub bounds: ParticleBounds,
}

/// Random drift velocity: slight sideways wander, always rising
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-0.0125..0.0125),
        rng.gen_range(0.015..0.04),
        rng.gen_range(-0.0125..0.0125),
    )
}

/// Mirror a coordinate that left `[-limit, limit]` to the opposite side
fn flip(value: f32, limit: f32) -> f32 {
    if value.abs() > limit {
        (-value).clamp(-limit, limit)
    } else {
        value
    }
}

impl ParticleSystem {
    /// Integrate one step; points above the ceiling restart at the floor
    pub fn integrate(&self, cloud: &mut PointCloud) {
        let bounds = self.bounds;
        for (position, velocity) in cloud.positions.iter_mut().zip(&self.velocities) {
            *position += *velocity;

            if position.y > bounds.ceiling || position.y < bounds.floor {
                position.y = bounds.floor;
            }
            position.x = flip(position.x, bounds.limit_x);
            position.z = flip(position.z, bounds.limit_z);
        }
    }
}

/// Twinkling points: small vertical shimmer and a pulsing opacity
#[derive(Clone, Debug)]
pub struct SparkleField {
    pub object: ObjectId,
    /// Vertical band the shimmer is kept inside
    pub band: (f32, f32),
    pub opacity: Sway,
}

impl SparkleField {
    pub fn twinkle(&self, cloud: &mut PointCloud, time: f32) {
        let (low, high) = self.band;
        for (i, position) in cloud.positions.iter_mut().enumerate() {
            position.y = (position.y + (time * 3.0 + i as f32).sin() * 0.015).clamp(low, high);
        }
        cloud.material.opacity = self.opacity.sample(time).clamp(0.0, 1.0);
    }
}

/// Light whose intensity follows a wave
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PulsingLight {
    pub light: usize,
    pub intensity: Sway,
}
