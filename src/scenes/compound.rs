use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::BuildError;
use super::primitives::{self, ROOF_COLOR};
use crate::math::Color;
use crate::scene::SceneObject;
use crate::types::Transform;

pub const CASTLE_SIDE_TOWERS: usize = 4;
pub const CASTLE_WINDOW_ROWS: usize = 3;
pub const CLOUD_PALETTE: [Color; 4] = [Color(0xffffff), Color(0xe0e7ff), Color(0xfef3c7), Color(0xf0f9ff)];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundClass {
    Castle,
    Cloud,
    CloudLayer,
}

impl CompoundClass {
    pub fn name(self) -> &'static str {
        match self {
            CompoundClass::Castle => "castle",
            CompoundClass::Cloud => "cloud",
            CompoundClass::CloudLayer => "cloud_layer",
        }
    }
}

fn default_scale() -> f32 {
    1.0
}

/// Immutable build recipe for one compound object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompoundDescriptor {
    pub class: CompoundClass,
    pub position: Vec3,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub rotation_y: f32,
    pub color_primary: Color,
    #[serde(default)]
    pub color_secondary: Option<Color>,
}

impl CompoundDescriptor {
    pub fn castle(position: Vec3, scale: f32, rotation_y: f32, color: Color) -> Self {
        Self {
            class: CompoundClass::Castle,
            position,
            scale,
            rotation_y,
            color_primary: color,
            color_secondary: None,
        }
    }

    pub fn cloud(position: Vec3, primary: Color, secondary: Option<Color>) -> Self {
        Self {
            class: CompoundClass::Cloud,
            position,
            scale: 1.0,
            rotation_y: 0.0,
            color_primary: primary,
            color_secondary: secondary,
        }
    }

    fn validate(&self) -> Result<(), BuildError> {
        let name = self.class.name();
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(BuildError::descriptor(name, format!("scale must be positive, got {}", self.scale)));
        }
        if !self.position.is_finite() {
            return Err(BuildError::descriptor(name, format!("position must be finite, got {}", self.position)));
        }
        if !self.rotation_y.is_finite() {
            return Err(BuildError::descriptor(name, "rotation must be finite"));
        }
        Ok(())
    }

    fn root_transform(&self) -> Transform {
        Transform::at(self.position).with_rotation_y(self.rotation_y)
    }
}

/// Build the compound object a descriptor describes
///
/// The root transform carries the descriptor's position and Y rotation
/// unchanged; `scale` only sizes the constituent geometry.
pub fn build_compound<R: Rng + ?Sized>(descriptor: &CompoundDescriptor, rng: &mut R) -> Result<SceneObject, BuildError> {
    descriptor.validate()?;

    let object = match descriptor.class {
        CompoundClass::Castle => build_castle(descriptor)?,
        CompoundClass::Cloud => build_cloud(descriptor, rng)?,
        CompoundClass::CloudLayer => build_cloud_layer(descriptor, rng)?,
    };

    Ok(object.with_transform(descriptor.root_transform()))
}

fn on_circle(angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

fn placed(object: SceneObject, position: Vec3) -> SceneObject {
    object.with_transform(Transform::at(position))
}

/// Keep, roof, four corner towers and three rows of windows
fn build_castle(descriptor: &CompoundDescriptor) -> Result<SceneObject, BuildError> {
    let s = descriptor.scale;
    let stone = primitives::tower_material(descriptor.color_primary);
    let slate = primitives::roof_material(descriptor.color_secondary.unwrap_or(ROOF_COLOR));

    let mut castle = SceneObject::group("castle");

    castle.add(placed(primitives::tower(s, stone)?, Vec3::new(0.0, s, 0.0)));

    let main_roof = primitives::roof(s * 0.5, s * 0.8, 4, slate)?
        .with_transform(Transform::at(Vec3::new(0.0, s * 2.0 + s * 0.4, 0.0)).with_rotation_y(FRAC_PI_4));
    castle.add(main_roof);

    for i in 0..CASTLE_SIDE_TOWERS {
        let angle = FRAC_PI_2 * i as f32;
        castle.add(placed(primitives::side_tower(s, stone)?, on_circle(angle, s * 0.8, s * 0.6)));
        castle.add(placed(
            primitives::roof(s * 0.25, s * 0.4, 8, slate)?,
            on_circle(angle, s * 0.8, s * 1.2 + s * 0.2),
        ));
    }

    // Window count is fixed per castle, independent of scale
    for row in 0..CASTLE_WINDOW_ROWS {
        let y = s * 0.5 + row as f32 * s * 0.6;
        for side in 0..CASTLE_SIDE_TOWERS {
            let angle = FRAC_PI_2 * side as f32;
            let window = primitives::window(s)?
                .with_transform(Transform::at(on_circle(angle, s * 0.35, y)).with_rotation_y(angle));
            castle.add(window);
        }
    }

    Ok(castle)
}

/// 6 to 11 puffs of random size, offset and opacity
fn build_cloud<R: Rng + ?Sized>(descriptor: &CompoundDescriptor, rng: &mut R) -> Result<SceneObject, BuildError> {
    let s = descriptor.scale;
    let colors = [descriptor.color_primary, descriptor.color_secondary.unwrap_or(descriptor.color_primary)];

    let mut cloud = SceneObject::group("cloud");
    let puffs = rng.gen_range(6..12);
    for _ in 0..puffs {
        let radius = rng.gen_range(1.8..4.8) * s;
        let color = colors[rng.gen_range(0..colors.len())];
        let opacity = rng.gen_range(0.5..0.9);
        let offset = Vec3::new(
            rng.gen_range(-2.5..2.5),
            rng.gen_range(-1.25..1.25),
            rng.gen_range(-2.5..2.5),
        ) * s;
        cloud.add(placed(primitives::cloud_puff(radius, color, opacity)?, offset));
    }

    Ok(cloud)
}

pub const CLOUD_LAYER_PUFFS: usize = 15;

/// Wide band of flattened puffs, each drifting on its own
fn build_cloud_layer<R: Rng + ?Sized>(descriptor: &CompoundDescriptor, rng: &mut R) -> Result<SceneObject, BuildError> {
    let s = descriptor.scale;
    let mut layer = SceneObject::group("cloud_layer");

    for _ in 0..CLOUD_LAYER_PUFFS {
        let radius = rng.gen_range(1.5..3.5) * s;
        let position = Vec3::new(
            rng.gen_range(-50.0..50.0),
            rng.gen_range(5.0..20.0),
            rng.gen_range(-50.0..10.0),
        ) * s;
        let squash = Vec3::new(
            rng.gen_range(0.8..1.3),
            rng.gen_range(0.4..0.7),
            rng.gen_range(0.8..1.3),
        );
        let puff = primitives::cloud_puff(radius, descriptor.color_primary, 0.7)?
            .with_transform(Transform::at(position).with_scale(squash));
        layer.add(puff);
    }

    Ok(layer)
}
