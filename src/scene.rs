use glam::{Mat4, Vec3};

use crate::math::Color;
use crate::types::{InstanceData, Transform};

/// Parametric shape of a mesh primitive
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    /// Subdivided XY plane; `heights` holds one z offset per vertex, row-major
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
        heights: Vec<f32>,
    },
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Sphere { .. } => "sphere",
            Geometry::Box { .. } => "box",
            Geometry::Cone { .. } => "cone",
            Geometry::Cylinder { .. } => "cylinder",
            Geometry::Plane { .. } => "plane",
        }
    }
}

/// Surface parameters of a mesh or point cloud
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub transparent: bool,
    pub shininess: f32,
    pub flat_shading: bool,
    /// Unlit materials ignore scene lights (windows, stars)
    pub unlit: bool,
    pub additive: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
            emissive_intensity: 1.0,
            opacity: 1.0,
            transparent: false,
            shininess: 30.0,
            flat_shading: false,
            unlit: false,
            additive: false,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn translucent(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn flat(mut self) -> Self {
        self.flat_shading = true;
        self
    }

    pub fn unlit(mut self) -> Self {
        self.unlit = true;
        self
    }

    pub fn additive(mut self) -> Self {
        self.additive = true;
        self
    }

    pub fn shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }
}

/// Point sprites sharing one material
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub size: f32,
    pub material: Material,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Group,
    Mesh { geometry: Geometry, material: Material },
    Points(PointCloud),
}

/// Node of the scene graph; owns its children
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    pub content: Content,
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            content: Content::Group,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn add(&mut self, child: SceneObject) {
        self.children.push(child);
    }

    /// Number of mesh and point primitives in this subtree, groups excluded
    pub fn primitive_count(&self) -> usize {
        let own = match self.content {
            Content::Group => 0,
            _ => 1,
        };
        own + self.children.iter().map(SceneObject::primitive_count).sum::<usize>()
    }

    /// Depth-first walk with world matrices
    pub fn visit<F>(&self, parent: Mat4, f: &mut F)
    where
        F: FnMut(&SceneObject, Mat4),
    {
        let world = parent * self.transform.matrix();
        f(self, world);
        for child in &self.children {
            child.visit(world, f);
        }
    }

    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    pub fn points_mut(&mut self) -> Option<&mut PointCloud> {
        match &mut self.content {
            Content::Points(cloud) => Some(cloud),
            _ => None,
        }
    }
}

/// Handle to a root object spawned into a [`Scene`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional { position: Vec3, cast_shadow: bool },
    Point { position: Vec3, distance: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
}

impl Light {
    pub fn ambient(color: Color, intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color,
            intensity,
        }
    }

    pub fn directional(color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Directional {
                position,
                cast_shadow: false,
            },
            color,
            intensity,
        }
    }

    pub fn point(color: Color, intensity: f32, distance: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Point { position, distance },
            color,
            intensity,
        }
    }

    pub fn with_shadows(mut self) -> Self {
        if let LightKind::Directional { cast_shadow, .. } = &mut self.kind {
            *cast_shadow = true;
        }
        self
    }
}

/// Exponential-squared fog
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub density: f32,
}

/// Scene graph root: an arena of top-level objects plus lights
///
/// Objects are only ever appended, so an [`ObjectId`] stays valid for
/// as long as the scene lives.
#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<SceneObject>,
    pub lights: Vec<Light>,
    pub clear_color: Color,
    /// Clear alpha, 0.0 for scenes composited over another background
    pub clear_alpha: f32,
    pub fog: Option<Fog>,
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            clear_color,
            clear_alpha: 1.0,
            fog: None,
        }
    }

    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn primitive_count(&self) -> usize {
        self.objects.iter().map(SceneObject::primitive_count).sum()
    }

    /// Flatten every mesh into world-space instance records
    pub fn instances(&self) -> Vec<InstanceData> {
        let mut instances = Vec::new();
        for object in &self.objects {
            object.visit(Mat4::IDENTITY, &mut |node, world| {
                if let Content::Mesh { material, .. } = &node.content {
                    instances.push(InstanceData {
                        model: world.to_cols_array_2d(),
                        color: material.color.to_rgb(),
                        opacity: material.opacity,
                        emissive: material.emissive.to_rgb(),
                        emissive_intensity: material.emissive_intensity,
                    });
                }
            });
        }
        instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(name: &str) -> SceneObject {
        SceneObject {
            name: name.to_string(),
            transform: Transform::IDENTITY,
            content: Content::Mesh {
                geometry: Geometry::Box {
                    width: 1.0,
                    height: 1.0,
                    depth: 1.0,
                },
                material: Material::new(Color::WHITE),
            },
            children: Vec::new(),
        }
    }

    #[test]
    fn test_primitive_count_skips_groups() {
        let mut root = SceneObject::group("root");
        let mut inner = SceneObject::group("inner");
        inner.add(mesh("a"));
        inner.add(mesh("b"));
        root.add(inner);
        root.add(mesh("c"));
        assert_eq!(root.primitive_count(), 3);
    }

    #[test]
    fn test_spawn_returns_stable_ids() {
        let mut scene = Scene::new(Color::BLACK);
        let first = scene.spawn(mesh("first"));
        let second = scene.spawn(mesh("second"));
        assert_eq!(scene.get(first).map(|o| o.name.as_str()), Some("first"));
        assert_eq!(scene.get(second).map(|o| o.name.as_str()), Some("second"));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_instances_use_world_transform() {
        let mut root = SceneObject::group("root").with_transform(Transform::at(Vec3::new(10.0, 0.0, 0.0)));
        let mut child = mesh("child");
        child.transform = Transform::at(Vec3::new(0.0, 2.0, 0.0));
        root.add(child);

        let mut scene = Scene::new(Color::BLACK);
        scene.spawn(root);

        let instances = scene.instances();
        assert_eq!(instances.len(), 1);
        let translation = Mat4::from_cols_array_2d(&instances[0].model).w_axis;
        assert_eq!(translation.truncate(), Vec3::new(10.0, 2.0, 0.0));
    }

    #[test]
    fn test_find_by_name() {
        let mut root = SceneObject::group("castle");
        root.add(mesh("roof"));
        assert!(root.find("roof").is_some());
        assert!(root.find("moat").is_none());
    }
}
