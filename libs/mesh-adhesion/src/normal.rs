//! # Normal Aggregator
//!
//! Summarises the normals of a mesh's selected faces, either as one
//! area-weighted direction or as one direction per face.

use glam::DVec3;
use tracing::trace;

use crate::object::Object;

/// Coordinate space of an aggregated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Space {
    /// The mesh's own coordinates.
    Local,
    /// Rotated by the owning object's world rotation.
    World,
}

/// Sum of the selected faces' unit normals, each scaled by the face area.
///
/// Not normalized; callers decide how to treat a zero-length sum. The result
/// does not depend on face order.
pub fn weighted_normal_sum(object: &Object) -> DVec3 {
    object
        .mesh()
        .selected_samples()
        .map(|sample| sample.normal * sample.area)
        .sum()
}

/// Area-weighted average normal of the selected faces.
///
/// Returns `None` when the weighted sum is shorter than `tolerance`, which
/// happens when the selection is empty, has no area, or its normals cancel.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::normal::{aggregate_normal, Space};
/// use mesh_adhesion::{primitives::create_plane, Object};
/// use glam::DVec3;
///
/// let plane = Object::new("Plane", create_plane(1.0).unwrap());
/// assert_eq!(aggregate_normal(&plane, Space::Local, 1e-9), Some(DVec3::Z));
/// ```
pub fn aggregate_normal(object: &Object, space: Space, tolerance: f64) -> Option<DVec3> {
    let sum = weighted_normal_sum(object);
    let length = sum.length();
    trace!(object = object.name(), ?sum, length, "weighted normal sum");
    if length < tolerance {
        return None;
    }

    let normal = sum / length;
    Some(to_space(object, normal, space))
}

/// Unit normal of every selected face, in face order, without area weighting.
///
/// Faces without area yield `DVec3::ZERO`.
pub fn face_normals(object: &Object, space: Space) -> Vec<DVec3> {
    object
        .mesh()
        .selected_samples()
        .map(|sample| to_space(object, sample.normal.normalize_or_zero(), space))
        .collect()
}

fn to_space(object: &Object, normal: DVec3, space: Space) -> DVec3 {
    match space {
        Space::Local => normal,
        Space::World => object.transform.transform_direction(normal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::object::Transform;
    use crate::primitives::{create_cube, CubeFace};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    fn cube_with(faces: &[CubeFace], size: DVec3) -> Object {
        let mut mesh = create_cube(size).unwrap();
        for face in faces {
            mesh.select_face(face.index(), true);
        }
        Object::new("Cube", mesh)
    }

    #[test]
    fn single_face_normal() {
        let cube = cube_with(&[CubeFace::Top], DVec3::splat(2.0));
        let normal = aggregate_normal(&cube, Space::Local, TOL).unwrap();
        assert_relative_eq!(normal, DVec3::Z);
    }

    #[test]
    fn weighting_follows_face_area() {
        // Right face area 6, top face area 2
        let cube = cube_with(&[CubeFace::Top, CubeFace::Right], DVec3::new(1.0, 2.0, 3.0));
        let normal = aggregate_normal(&cube, Space::Local, TOL).unwrap();
        assert_relative_eq!(normal, DVec3::new(6.0, 0.0, 2.0).normalize(), epsilon = 1e-12);
    }

    #[test]
    fn order_of_faces_does_not_matter() {
        let mut forward = Mesh::new();
        let mut backward = Mesh::new();
        let tris = [
            [DVec3::ZERO, DVec3::X, DVec3::Y],
            [DVec3::ZERO, DVec3::Z * 2.0, DVec3::X * 3.0],
            [DVec3::ZERO, DVec3::Y, DVec3::Z],
        ];
        for (mesh, order) in [(&mut forward, [0, 1, 2]), (&mut backward, [2, 1, 0])] {
            for i in order {
                let base = mesh.vertex_count() as u32;
                for p in tris[i] {
                    mesh.add_vertex(p);
                }
                mesh.add_face(&[base, base + 1, base + 2]);
            }
            mesh.select_all(true);
        }
        let a = aggregate_normal(&Object::new("a", forward), Space::Local, TOL).unwrap();
        let b = aggregate_normal(&Object::new("b", backward), Space::Local, TOL).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn opposite_faces_cancel() {
        let cube = cube_with(&[CubeFace::Top, CubeFace::Bottom], DVec3::ONE);
        assert_eq!(aggregate_normal(&cube, Space::Local, TOL), None);
    }

    #[test]
    fn empty_selection_has_no_normal() {
        let cube = cube_with(&[], DVec3::ONE);
        assert_eq!(aggregate_normal(&cube, Space::World, TOL), None);
        assert!(face_normals(&cube, Space::World).is_empty());
    }

    #[test]
    fn world_space_applies_rotation_only() {
        let cube = cube_with(&[CubeFace::Top], DVec3::ONE).with_transform(
            Transform::from_location(DVec3::splat(7.0))
                .with_euler_xyz(DVec3::new(FRAC_PI_2, 0.0, 0.0))
                .with_scale(DVec3::new(1.0, 5.0, 1.0)),
        );
        let local = aggregate_normal(&cube, Space::Local, TOL).unwrap();
        let world = aggregate_normal(&cube, Space::World, TOL).unwrap();
        assert_relative_eq!(local, DVec3::Z);
        assert_relative_eq!(world, -DVec3::Y, epsilon = 1e-12);
    }

    #[test]
    fn face_normals_are_unweighted_and_ordered() {
        let cube = cube_with(
            &[CubeFace::Right, CubeFace::Top, CubeFace::Front],
            DVec3::new(1.0, 2.0, 3.0),
        );
        let normals = face_normals(&cube, Space::Local);
        // Face order, not selection order
        assert_eq!(normals.len(), 3);
        assert_relative_eq!(normals[0], DVec3::Z);
        assert_relative_eq!(normals[1], -DVec3::Y);
        assert_relative_eq!(normals[2], DVec3::X);
        for n in &normals {
            assert_relative_eq!(n.length(), 1.0);
        }
    }

    #[test]
    fn face_normals_in_world_space() {
        let cube = cube_with(&[CubeFace::Top], DVec3::ONE)
            .with_transform(Transform::IDENTITY.with_euler_xyz(DVec3::new(0.0, FRAC_PI_2, 0.0)));
        let normals = face_normals(&cube, Space::World);
        assert_relative_eq!(normals[0], DVec3::X, epsilon = 1e-12);
    }
}
