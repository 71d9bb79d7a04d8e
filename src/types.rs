use glam::{EulerRot, Mat4, Quat, Vec3};

/// Local transform of a scene object
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation_y(mut self, angle: f32) -> Self {
        self.rotation.y = angle;
        self
    }

    pub fn with_rotation_x(mut self, angle: f32) -> Self {
        self.rotation.x = angle;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32, // Scene clock, for shader-side effects
    pub forward: [f32; 3],
    pub _pad1: f32,
}

/// Per-mesh instance record handed to a renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Transform::IDENTITY.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_translation_matrix() {
        let transform = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        let point = transform.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(point, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_rotation_y_quarter_turn() {
        let transform = Transform::IDENTITY.with_rotation_y(std::f32::consts::FRAC_PI_2);
        let point = transform.matrix().transform_point3(Vec3::X);
        assert!((point - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_uniform_sizes_are_gpu_aligned() {
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
        assert_eq!(std::mem::size_of::<InstanceData>() % 16, 0);
    }
}
