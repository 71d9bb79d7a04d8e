use glam::Vec3;
use rand::Rng;

use super::error::BuildError;
use crate::math::{Bounds, Color};
use crate::scene::{Content, Geometry, Material, PointCloud, SceneObject};
use crate::types::Transform;

pub const WINDOW_COLOR: Color = Color(0xffeb3b);
pub const ROOF_COLOR: Color = Color(0x4a5568);
pub const GROUND_COLOR: Color = Color(0x2d5016);

/// Ground height jitter range, applied per vertex
pub const GROUND_JITTER: (f32, f32) = (-0.1, 0.5);

fn positive(kind: &'static str, what: &str, value: f32) -> Result<(), BuildError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BuildError::geometry(kind, format!("{} must be positive, got {}", what, value)))
    }
}

fn segments(kind: &'static str, what: &str, value: u32, min: u32) -> Result<(), BuildError> {
    if value >= min {
        Ok(())
    } else {
        Err(BuildError::geometry(kind, format!("{} needs at least {}, got {}", what, min, value)))
    }
}

fn validate_geometry(geometry: &Geometry) -> Result<(), BuildError> {
    let kind = geometry.kind();
    match geometry {
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } => {
            positive(kind, "radius", *radius)?;
            segments(kind, "width_segments", *width_segments, 3)?;
            segments(kind, "height_segments", *height_segments, 2)
        }
        Geometry::Box {
            width,
            height,
            depth,
        } => {
            positive(kind, "width", *width)?;
            positive(kind, "height", *height)?;
            positive(kind, "depth", *depth)
        }
        Geometry::Cone {
            radius,
            height,
            radial_segments,
        } => {
            positive(kind, "radius", *radius)?;
            positive(kind, "height", *height)?;
            segments(kind, "radial_segments", *radial_segments, 3)
        }
        Geometry::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
        } => {
            let radii_ok = radius_top.is_finite()
                && radius_bottom.is_finite()
                && *radius_top >= 0.0
                && *radius_bottom >= 0.0
                && (*radius_top > 0.0 || *radius_bottom > 0.0);
            if !radii_ok {
                return Err(BuildError::geometry(
                    kind,
                    format!("radii must be non-negative and not both zero, got {} / {}", radius_top, radius_bottom),
                ));
            }
            positive(kind, "height", *height)?;
            segments(kind, "radial_segments", *radial_segments, 3)
        }
        Geometry::Plane {
            width,
            height,
            width_segments,
            height_segments,
            heights,
        } => {
            positive(kind, "width", *width)?;
            positive(kind, "height", *height)?;
            segments(kind, "width_segments", *width_segments, 1)?;
            segments(kind, "height_segments", *height_segments, 1)?;
            let expected = (*width_segments as usize + 1) * (*height_segments as usize + 1);
            if heights.len() != expected {
                return Err(BuildError::geometry(
                    kind,
                    format!("expected {} vertex heights, got {}", expected, heights.len()),
                ));
            }
            if heights.iter().any(|h| !h.is_finite()) {
                return Err(BuildError::geometry(kind, "vertex heights must be finite"));
            }
            Ok(())
        }
    }
}

fn validate_material(material: &Material) -> Result<(), BuildError> {
    if !(0.0..=1.0).contains(&material.opacity) {
        return Err(BuildError::InvalidMaterial {
            reason: format!("opacity {} outside [0, 1]", material.opacity),
        });
    }
    if !(material.emissive_intensity.is_finite() && material.emissive_intensity >= 0.0) {
        return Err(BuildError::InvalidMaterial {
            reason: format!("emissive intensity {} must be non-negative", material.emissive_intensity),
        });
    }
    if !(material.shininess.is_finite() && material.shininess >= 0.0) {
        return Err(BuildError::InvalidMaterial {
            reason: format!("shininess {} must be non-negative", material.shininess),
        });
    }
    Ok(())
}

/// Build a detached mesh primitive
pub fn create_primitive(
    name: impl Into<String>,
    geometry: Geometry,
    material: Material,
) -> Result<SceneObject, BuildError> {
    validate_geometry(&geometry)?;
    validate_material(&material)?;

    Ok(SceneObject {
        name: name.into(),
        transform: Transform::IDENTITY,
        content: Content::Mesh { geometry, material },
        children: Vec::new(),
    })
}

/// Build a detached point cluster
pub fn create_points(
    name: impl Into<String>,
    positions: Vec<Vec3>,
    size: f32,
    material: Material,
) -> Result<SceneObject, BuildError> {
    if positions.is_empty() {
        return Err(BuildError::geometry("points", "point cluster is empty"));
    }
    if positions.iter().any(|p| !p.is_finite()) {
        return Err(BuildError::geometry("points", "point positions must be finite"));
    }
    positive("points", "size", size)?;
    validate_material(&material)?;

    Ok(SceneObject {
        name: name.into(),
        transform: Transform::IDENTITY,
        content: Content::Points(PointCloud {
            positions,
            size,
            material,
        }),
        children: Vec::new(),
    })
}

// ============================================================================
// Named primitives
// ============================================================================

pub fn planet(
    radius: f32,
    segments: u32,
    color: Color,
    emissive: Color,
    shininess: f32,
    opacity: f32,
) -> Result<SceneObject, BuildError> {
    create_primitive(
        "planet",
        Geometry::Sphere {
            radius,
            width_segments: segments,
            height_segments: segments,
        },
        Material::new(color)
            .emissive(emissive, 1.0)
            .shininess(shininess)
            .translucent(opacity),
    )
}

pub fn star(radius: f32) -> Result<SceneObject, BuildError> {
    create_primitive(
        "star",
        Geometry::Sphere {
            radius,
            width_segments: 8,
            height_segments: 8,
        },
        Material::new(Color::WHITE).emissive(Color::WHITE, 1.0),
    )
}

pub fn cloud_puff(radius: f32, color: Color, opacity: f32) -> Result<SceneObject, BuildError> {
    create_primitive(
        "puff",
        Geometry::Sphere {
            radius,
            width_segments: 16,
            height_segments: 16,
        },
        Material::new(color).translucent(opacity).shininess(15.0).flat(),
    )
}

/// Stone material shared by a castle's towers
pub fn tower_material(color: Color) -> Material {
    Material::new(color)
        .emissive(color, 0.2)
        .shininess(80.0)
        .flat()
        .shadows(true, true)
}

pub fn roof_material(color: Color) -> Material {
    Material::new(color).shininess(60.0).flat().shadows(true, false)
}

pub fn tower(scale: f32, material: Material) -> Result<SceneObject, BuildError> {
    create_primitive(
        "tower",
        Geometry::Box {
            width: scale * 0.6,
            height: scale * 2.0,
            depth: scale * 0.6,
        },
        material,
    )
}

pub fn side_tower(scale: f32, material: Material) -> Result<SceneObject, BuildError> {
    create_primitive(
        "side_tower",
        Geometry::Cylinder {
            radius_top: scale * 0.2,
            radius_bottom: scale * 0.2,
            height: scale * 1.2,
            radial_segments: 8,
        },
        material,
    )
}

pub fn roof(radius: f32, height: f32, radial_segments: u32, material: Material) -> Result<SceneObject, BuildError> {
    create_primitive(
        "roof",
        Geometry::Cone {
            radius,
            height,
            radial_segments,
        },
        material,
    )
}

pub fn window(scale: f32) -> Result<SceneObject, BuildError> {
    create_primitive(
        "window",
        Geometry::Box {
            width: scale * 0.15,
            height: scale * 0.2,
            depth: scale * 0.05,
        },
        Material::new(WINDOW_COLOR).unlit(),
    )
}

/// Ground plane laid flat on XZ with bounded per-vertex height jitter
pub fn ground_plane<R: Rng + ?Sized>(
    size: f32,
    segments: u32,
    jitter: bool,
    rng: &mut R,
) -> Result<SceneObject, BuildError> {
    let vertex_count = (segments as usize + 1) * (segments as usize + 1);
    let heights = if jitter {
        let (low, high) = GROUND_JITTER;
        (0..vertex_count).map(|_| rng.gen_range(low..high)).collect()
    } else {
        vec![0.0; vertex_count]
    };

    let ground = create_primitive(
        "ground",
        Geometry::Plane {
            width: size,
            height: size,
            width_segments: segments,
            height_segments: segments,
            heights,
        },
        Material::new(GROUND_COLOR).flat().shininess(8.0).shadows(false, true),
    )?;

    Ok(ground.with_transform(Transform::IDENTITY.with_rotation_x(-std::f32::consts::FRAC_PI_2)))
}

/// `count` points scattered uniformly inside `bounds`
pub fn point_cluster<R: Rng + ?Sized>(
    name: &str,
    count: usize,
    bounds: Bounds,
    size: f32,
    material: Material,
    rng: &mut R,
) -> Result<SceneObject, BuildError> {
    if !bounds.is_valid() {
        return Err(BuildError::geometry("points", format!("invalid scatter bounds {:?}", bounds)));
    }
    let positions = (0..count).map(|_| bounds.sample(rng)).collect();
    create_points(name, positions, size, material)
}
