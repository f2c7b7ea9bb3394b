//! # Objects and Transforms
//!
//! An [`Object`] places a shared [`Mesh`] in world space. The mapping from
//! local to world space rotates first, then scales per axis, then translates.
//! This differs from a conventional TRS matrix (which scales before rotating)
//! and only agrees with it for uniform scale.

use std::sync::Arc;

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Converts XYZ Euler angles (radians) to a quaternion.
///
/// The rotation is applied about X first, then Y, then Z, all around the
/// fixed world axes.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::object::euler_xyz_to_quat;
/// use glam::DVec3;
///
/// let q = euler_xyz_to_quat(DVec3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2));
/// assert!((q * DVec3::X - DVec3::Y).length() < 1e-12);
/// ```
pub fn euler_xyz_to_quat(euler: DVec3) -> DQuat {
    DQuat::from_euler(EulerRot::ZYX, euler.z, euler.y, euler.x)
}

/// Converts a quaternion to XYZ Euler angles (radians).
///
/// Inverse of [`euler_xyz_to_quat`] for pitch within (-90°, 90°).
pub fn quat_to_euler_xyz(rotation: DQuat) -> DVec3 {
    let (z, y, x) = rotation.to_euler(EulerRot::ZYX);
    DVec3::new(x, y, z)
}

/// World transform of an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Object origin in world space.
    pub location: DVec3,
    /// World rotation.
    pub rotation: DQuat,
    /// Per-axis scale.
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No rotation, unit scale, at the origin.
    pub const IDENTITY: Self = Self {
        location: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
        scale: DVec3::ONE,
    };

    /// Identity transform moved to `location`.
    pub fn from_location(location: DVec3) -> Self {
        Self {
            location,
            ..Self::IDENTITY
        }
    }

    /// Returns a copy with the given rotation.
    pub fn with_rotation(self, rotation: DQuat) -> Self {
        Self { rotation, ..self }
    }

    /// Returns a copy with rotation given as XYZ Euler angles.
    pub fn with_euler_xyz(self, euler: DVec3) -> Self {
        self.with_rotation(euler_xyz_to_quat(euler))
    }

    /// Returns a copy with the given scale.
    pub fn with_scale(self, scale: DVec3) -> Self {
        Self { scale, ..self }
    }

    /// Rotation as XYZ Euler angles.
    pub fn euler_xyz(&self) -> DVec3 {
        quat_to_euler_xyz(self.rotation)
    }

    /// Maps a local point to world space: rotate, scale per axis, translate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_adhesion::Transform;
    /// use glam::DVec3;
    ///
    /// let t = Transform::from_location(DVec3::new(1.0, 0.0, 0.0))
    ///     .with_scale(DVec3::splat(2.0));
    /// assert_eq!(t.transform_point(DVec3::Z), DVec3::new(1.0, 0.0, 2.0));
    /// ```
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        (self.rotation * point) * self.scale + self.location
    }

    /// Maps a local direction to world space. Only the rotation applies.
    #[inline]
    pub fn transform_direction(&self, direction: DVec3) -> DVec3 {
        self.rotation * direction
    }
}

/// A mesh placed in the world.
///
/// The mesh is reference counted so linked duplicates can share it.
/// `delta_location` is a secondary translation kept apart from `transform`
/// so hosts can toggle it independently; it does not take part in
/// [`Object::to_world`].
#[derive(Debug, Clone)]
pub struct Object {
    name: String,
    mesh: Arc<Mesh>,
    /// Primary world transform.
    pub transform: Transform,
    /// Secondary translation added on top of `transform.location`.
    pub delta_location: DVec3,
}

impl Object {
    /// Creates an object with an identity transform.
    pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
        Self::from_shared(name, Arc::new(mesh))
    }

    /// Creates an object around an already shared mesh.
    pub fn from_shared(name: impl Into<String>, mesh: Arc<Mesh>) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform: Transform::IDENTITY,
            delta_location: DVec3::ZERO,
        }
    }

    /// Returns a copy with the given transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Object name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mesh data.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Shared handle to the mesh data.
    pub fn shared_mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    /// Mutable mesh access. Detaches the mesh first if it is shared, which
    /// breaks the link to any linked duplicates.
    pub fn mesh_mut(&mut self) -> &mut Mesh {
        Arc::make_mut(&mut self.mesh)
    }

    /// Returns true if both objects use the same mesh data.
    pub fn shares_mesh_with(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.mesh, &other.mesh)
    }

    /// Maps a local point to world space with this object's transform.
    #[inline]
    pub fn to_world(&self, point: DVec3) -> DVec3 {
        self.transform.transform_point(point)
    }
}
