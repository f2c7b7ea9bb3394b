//! # Cube Primitive
//!
//! Generates a cube or rectangular prism with one quad per side.

use crate::error::AdhesionError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Face indices of a mesh built by [`create_cube`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    Bottom = 0,
    Top = 1,
    Front = 2,
    Back = 3,
    Left = 4,
    Right = 5,
}

impl CubeFace {
    /// Face index inside the generated mesh.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Creates a cube or rectangular prism mesh centred at the origin.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z]
///
/// # Returns
///
/// A mesh with 8 vertices and 6 outward-facing quads, ordered as
/// [`CubeFace`]. No face is selected.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::primitives::{create_cube, CubeFace};
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::splat(2.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// let top = mesh.sample(&mesh.faces()[CubeFace::Top.index()]);
/// assert_eq!(top.center, DVec3::new(0.0, 0.0, 1.0));
/// ```
pub fn create_cube(size: DVec3) -> Result<Mesh, AdhesionError> {
    if !size.is_finite() || size.cmple(DVec3::ZERO).any() {
        return Err(AdhesionError::degenerate_geometry(format!(
            "Cube size must be positive and finite: {:?}",
            size
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 6);
    let max = size / 2.0;
    let min = -max;

    // Bottom ring (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // left-back-bottom

    // Top ring (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // left-back-top

    // Counter-clockwise seen from outside; order must match CubeFace
    mesh.add_face(&[v0, v3, v2, v1]);
    mesh.add_face(&[v4, v5, v6, v7]);
    mesh.add_face(&[v0, v1, v5, v4]);
    mesh.add_face(&[v2, v3, v7, v6]);
    mesh.add_face(&[v3, v0, v4, v7]);
    mesh.add_face(&[v1, v2, v6, v5]);

    Ok(mesh)
}
