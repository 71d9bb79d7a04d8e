use glam::{Mat4, Vec3};

use crate::math::Bounds;
use crate::types::CameraUniform;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Wave {
    Sin,
    Cos,
}

/// One oscillating axis: `base + wave(time * frequency) * amplitude`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sway {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub wave: Wave,
}

impl Sway {
    pub const fn fixed(base: f32) -> Self {
        Self {
            base,
            amplitude: 0.0,
            frequency: 0.0,
            wave: Wave::Sin,
        }
    }

    pub const fn sin(base: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            base,
            amplitude,
            frequency,
            wave: Wave::Sin,
        }
    }

    pub const fn cos(base: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            base,
            amplitude,
            frequency,
            wave: Wave::Cos,
        }
    }

    pub fn sample(&self, time: f32) -> f32 {
        let phase = time * self.frequency;
        let wave = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        self.base + wave * self.amplitude
    }
}

/// Time-driven camera path; position never leaves `bounds()`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub x: Sway,
    pub y: Sway,
    pub z: Sway,
    /// Look-at point; `None` keeps looking down -Z
    pub target: Option<Vec3>,
}

impl CameraRig {
    pub fn position(&self, time: f32) -> Vec3 {
        Vec3::new(self.x.sample(time), self.y.sample(time), self.z.sample(time))
    }

    pub fn bounds(&self) -> Bounds {
        let base = Vec3::new(self.x.base, self.y.base, self.z.base);
        let reach = Vec3::new(self.x.amplitude, self.y.amplitude, self.z.amplitude).abs();
        Bounds::new(base - reach, base + reach)
    }
}

pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub rig: CameraRig,
}

impl Camera {
    pub fn new(rig: CameraRig, fov_degrees: f32, aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            fov_y: fov_degrees.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
            rig,
        };
        camera.update(0.0);
        camera
    }

    /// Move along the rig path and re-aim
    pub fn update(&mut self, time: f32) {
        self.position = self.rig.position(time);
        self.target = self.rig.target.unwrap_or(self.position + Vec3::NEG_Z);
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn to_uniform(&self, time: f32) -> CameraUniform {
        CameraUniform {
            view_proj: (self.projection() * self.view()).to_cols_array_2d(),
            position: self.position.to_array(),
            time,
            forward: self.forward().to_array(),
            _pad1: 0.0,
        }
    }
}
