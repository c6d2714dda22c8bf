//! Math utilities and types
//!
//! Provides the math types used by scene transforms.

pub use nalgebra::{Matrix4, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,
    /// Rotation as Euler angles in radians
    pub rotation: Vec3,
    /// Per-axis scale factors
    pub scale: Vec3,
}

impl Transform {
    /// Create an identity transform at the origin
    pub fn identity() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Create a transform at the given position with identity rotation and scale
    pub fn at_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Calculate the model matrix for this transform
    ///
    /// Transforms are applied in the order: scale, then rotation (X, Y, Z),
    /// then translation.
    pub fn model_matrix(&self) -> Mat4 {
        let translation = Mat4::new_translation(&self.position);
        let rotation = Mat4::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z);
        let scale = Mat4::new_nonuniform_scaling(&self.scale);

        translation * rotation * scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
