//! # Placement
//!
//! The solver's output: where to put the source object and how to turn it.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::object::{quat_to_euler_xyz, Object};

/// World rotation and location for an object, plus an optional delta offset.
///
/// The delta is kept apart from `location` so hosts can toggle it
/// independently. It is `None` when no offset was requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// New world rotation.
    pub rotation: DQuat,
    /// New world location of the object origin.
    pub location: DVec3,
    /// Offset already rotated into the new orientation.
    pub delta_location: Option<DVec3>,
}

impl Placement {
    /// Rotation as XYZ Euler angles (radians).
    pub fn rotation_euler(&self) -> DVec3 {
        quat_to_euler_xyz(self.rotation)
    }

    /// Writes the placement onto an object.
    ///
    /// Rotation and location are replaced. The delta location is only
    /// written when the placement carries one; otherwise the object's
    /// existing delta is left alone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mesh_adhesion::{Mesh, Object, Placement};
    /// use glam::{DQuat, DVec3};
    ///
    /// let mut object = Object::new("Plane", Mesh::new());
    /// let placement = Placement {
    ///     rotation: DQuat::IDENTITY,
    ///     location: DVec3::new(1.0, 2.0, 3.0),
    ///     delta_location: None,
    /// };
    /// placement.apply_to(&mut object);
    /// assert_eq!(object.transform.location, DVec3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn apply_to(&self, object: &mut Object) {
        object.transform.rotation = self.rotation;
        object.transform.location = self.location;
        if let Some(delta) = self.delta_location {
            object.delta_location = delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::object::Transform;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn apply_keeps_scale() {
        let mut object = Object::new("Plane", Mesh::new())
            .with_transform(Transform::IDENTITY.with_scale(DVec3::splat(3.0)));
        let placement = Placement {
            rotation: DQuat::from_rotation_z(FRAC_PI_2),
            location: DVec3::X,
            delta_location: Some(DVec3::Y),
        };
        placement.apply_to(&mut object);
        assert_eq!(object.transform.scale, DVec3::splat(3.0));
        assert_eq!(object.transform.location, DVec3::X);
        assert_eq!(object.delta_location, DVec3::Y);
    }

    #[test]
    fn apply_without_delta_preserves_existing_delta() {
        let mut object = Object::new("Plane", Mesh::new());
        object.delta_location = DVec3::new(0.0, 0.0, 4.0);
        let placement = Placement {
            rotation: DQuat::IDENTITY,
            location: DVec3::ZERO,
            delta_location: None,
        };
        placement.apply_to(&mut object);
        assert_eq!(object.delta_location, DVec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn rotation_euler_matches_quaternion() {
        let placement = Placement {
            rotation: DQuat::from_rotation_z(FRAC_PI_2),
            location: DVec3::ZERO,
            delta_location: None,
        };
        assert_relative_eq!(
            placement.rotation_euler(),
            DVec3::new(0.0, 0.0, FRAC_PI_2),
            epsilon = 1e-12
        );
    }
}
