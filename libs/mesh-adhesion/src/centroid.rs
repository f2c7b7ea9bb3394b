//! # Centroid Aggregator
//!
//! World-space centres of a mesh's selected faces. The single-centre variant
//! is the plain mean of the per-face median centres; it is not area weighted.

use glam::DVec3;

use crate::object::Object;

/// Mean of the selected faces' median centres, in the mesh's local space.
///
/// Returns `None` when no face is selected.
pub fn local_center(object: &Object) -> Option<DVec3> {
    let mut sum = DVec3::ZERO;
    let mut count = 0usize;
    for sample in object.mesh().selected_samples() {
        sum += sample.center;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// [`local_center`] mapped to world space with the object's transform.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::centroid::global_center;
/// use mesh_adhesion::{primitives::create_plane, Object, Transform};
/// use glam::DVec3;
///
/// let plane = Object::new("Plane", create_plane(1.0).unwrap())
///     .with_transform(Transform::from_location(DVec3::new(0.0, 0.0, 3.0)));
/// assert_eq!(global_center(&plane), Some(DVec3::new(0.0, 0.0, 3.0)));
/// ```
pub fn global_center(object: &Object) -> Option<DVec3> {
    local_center(object).map(|center| object.to_world(center))
}

/// World-space median centre of every selected face, in face order.
pub fn face_centers(object: &Object) -> Vec<DVec3> {
    object
        .mesh()
        .selected_samples()
        .map(|sample| object.to_world(sample.center))
        .collect()
}
