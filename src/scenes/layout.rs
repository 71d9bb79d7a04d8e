use std::f32::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use rand::Rng;

use super::compound::{CompoundDescriptor, CLOUD_PALETTE};
use crate::math::Color;

/// The six castles spread across the valley, largest in the middle
pub fn default_castles() -> Vec<CompoundDescriptor> {
    let castle = |x: f32, z: f32, scale: f32, rotation_y: f32, color: u32| {
        CompoundDescriptor::castle(Vec3::new(x, 0.0, z), scale, rotation_y, Color(color))
    };

    vec![
        castle(0.0, -5.0, 2.5, 0.0, 0x8b5cf6),
        castle(-18.0, -8.0, 1.8, PI / 6.0, 0x6366f1),
        castle(-25.0, -12.0, 1.5, PI / 4.0, 0x14b8a6),
        castle(18.0, -8.0, 1.8, -PI / 6.0, 0xf59e0b),
        castle(25.0, -10.0, 1.6, -PI / 5.0, 0xec4899),
        castle(30.0, -14.0, 1.4, -PI / 4.0, 0x10b981),
    ]
}

/// `layers` stacked bands of `per_layer` clouds each, scattered behind the castles
pub fn cloud_layout<R: Rng + ?Sized>(layers: usize, per_layer: usize, rng: &mut R) -> Vec<CompoundDescriptor> {
    let mut clouds = Vec::with_capacity(layers * per_layer);
    for layer in 0..layers {
        for _ in 0..per_layer {
            let position = Vec3::new(
                rng.gen_range(-60.0..60.0),
                14.0 + layer as f32 * 8.0 + rng.gen_range(0.0..12.0),
                -25.0 - rng.gen_range(0.0..40.0),
            );
            let primary = CLOUD_PALETTE[rng.gen_range(0..CLOUD_PALETTE.len())];
            let secondary = CLOUD_PALETTE[rng.gen_range(0..CLOUD_PALETTE.len())];
            clouds.push(CompoundDescriptor::cloud(position, primary, Some(secondary)));
        }
    }
    clouds
}

/// Read a JSON array of compound descriptors
pub fn load_layout(path: &Path) -> Result<Vec<CompoundDescriptor>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
    let layout: Vec<CompoundDescriptor> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))?;

    log::info!("Loaded {} compound descriptors from {}", layout.len(), path.display());
    Ok(layout)
}
