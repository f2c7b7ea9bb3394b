//! # Plane Primitive
//!
//! A single square quad in the XY plane facing +Z.

use crate::error::AdhesionError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a square plane of edge length `size`, centred at the origin.
///
/// The single face is selected so the plane can be used directly as an
/// adhesion source.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::primitives::create_plane;
///
/// let plane = create_plane(2.0).unwrap();
/// assert_eq!(plane.face_count(), 1);
/// assert!(plane.has_selection());
/// ```
pub fn create_plane(size: f64) -> Result<Mesh, AdhesionError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(AdhesionError::degenerate_geometry(format!(
            "Plane size must be positive and finite: {size}"
        )));
    }

    let half = size / 2.0;
    let mut mesh = Mesh::with_capacity(4, 1);
    let v0 = mesh.add_vertex(DVec3::new(-half, -half, 0.0));
    let v1 = mesh.add_vertex(DVec3::new(half, -half, 0.0));
    let v2 = mesh.add_vertex(DVec3::new(half, half, 0.0));
    let v3 = mesh.add_vertex(DVec3::new(-half, half, 0.0));
    let face = mesh.add_face(&[v0, v1, v2, v3]);
    mesh.select_face(face, true);

    Ok(mesh)
}
