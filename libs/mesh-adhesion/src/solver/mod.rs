//! # Placement Solver
//!
//! Computes where a source object has to go so that its selected faces sit
//! on the selected faces of a target object, facing against the target's
//! normal.
//!
//! ## Algorithm
//!
//! 1. Validate both selections (source first)
//! 2. Area-weighted source normal in local space
//! 3. Target normal(s) and centre(s) in world space
//! 4. Rotation: shortest arc from the negated source normal to the target normal
//! 5. Location: target centre plus the drift between the object origin and
//!    its selected-face centre, measured with the new rotation applied
//! 6. Optional offset rotated into the new orientation as a delta location

use config::constants::SolverConfig;
use glam::{DQuat, DVec3};
use tracing::debug;

use crate::centroid::{face_centers, global_center, local_center};
use crate::error::{AdhesionError, MeshRole, SelectionError};
use crate::host::{Duplicate, ObjectId};
use crate::normal::{aggregate_normal, face_normals, Space};
use crate::object::Object;
use crate::placement::Placement;
use crate::selection::validate;

/// Stateless solver for single and per-face placements.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::primitives::{create_cube, create_plane, CubeFace};
/// use mesh_adhesion::{Object, PlacementSolver};
/// use glam::DVec3;
///
/// let mut cube = create_cube(DVec3::splat(2.0)).unwrap();
/// cube.select_face(CubeFace::Top.index(), true);
/// let target = Object::new("Cube", cube);
/// let source = Object::new("Plane", create_plane(1.0).unwrap());
///
/// let placement = PlacementSolver::default()
///     .solve_single(&source, &target, DVec3::ZERO)
///     .unwrap();
/// assert!((placement.location - DVec3::Z).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementSolver {
    config: SolverConfig,
}

impl PlacementSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Places `source` on the centre of the target's selected faces.
    ///
    /// The returned placement is meant to be applied to `source` itself.
    pub fn solve_single(
        &self,
        source: &Object,
        target: &Object,
        offset: DVec3,
    ) -> Result<Placement, AdhesionError> {
        validate(source.mesh(), target.mesh())?;

        let source_normal = self.source_normal(source)?;
        let target_normal = aggregate_normal(target, Space::World, self.config.tolerance)
            .ok_or(AdhesionError::degenerate(MeshRole::Target))?;
        let target_center =
            global_center(target).ok_or(SelectionError::TargetNotSelected)?;

        debug!(
            source = source.name(),
            target = target.name(),
            ?source_normal,
            ?target_normal,
            ?target_center,
            "solving single placement"
        );

        place(source, source_normal, target_normal, target_center, offset)
    }

    /// Places one duplicate of `source` on every selected target face.
    ///
    /// Requests exactly one duplicate per selected target face from `host`
    /// and pairs them with the faces in face order: the first duplicate goes
    /// to the first selected face. Each placement is computed against its
    /// duplicate's current transform. Nothing is duplicated when validation
    /// fails.
    pub fn solve_multiple<H: Duplicate + ?Sized>(
        &self,
        source: &Object,
        target: &Object,
        offset: DVec3,
        linked: bool,
        host: &mut H,
    ) -> Result<Vec<(ObjectId, Placement)>, AdhesionError> {
        validate(source.mesh(), target.mesh())?;

        let source_normal = self.source_normal(source)?;
        let normals = face_normals(target, Space::World);
        let centers = face_centers(target);
        debug_assert_eq!(normals.len(), centers.len());

        if normals
            .iter()
            .any(|normal| normal.length() < self.config.tolerance)
        {
            return Err(AdhesionError::degenerate(MeshRole::Target));
        }

        let count = normals.len();
        if count == 0 {
            return Ok(Vec::new());
        }

        debug!(
            source = source.name(),
            target = target.name(),
            count,
            linked,
            "duplicating source for per-face placement"
        );

        let duplicates = host.duplicate(source, count, linked);
        if duplicates.len() != count {
            return Err(AdhesionError::DuplicateCountMismatch {
                expected: count,
                actual: duplicates.len(),
            });
        }

        duplicates
            .into_iter()
            .zip(normals.into_iter().zip(centers))
            .map(|(id, (normal, center))| -> Result<_, AdhesionError> {
                let duplicate = host.object(id).ok_or(AdhesionError::UnknownObject(id))?;
                let placement = place(duplicate, source_normal, normal, center, offset)?;
                Ok((id, placement))
            })
            .collect()
    }

    fn source_normal(&self, source: &Object) -> Result<DVec3, AdhesionError> {
        aggregate_normal(source, Space::Local, self.config.tolerance)
            .ok_or(AdhesionError::degenerate(MeshRole::Source))
    }
}

/// Rotation that turns the source's selected faces to face against
/// `target_normal`. Both normals must be unit length.
pub fn facing_rotation(source_normal: DVec3, target_normal: DVec3) -> DQuat {
    DQuat::from_rotation_arc(-source_normal, target_normal)
}

fn place(
    object: &Object,
    source_normal: DVec3,
    target_normal: DVec3,
    target_center: DVec3,
    offset: DVec3,
) -> Result<Placement, AdhesionError> {
    let rotation = facing_rotation(source_normal, target_normal);

    // The mesh centre is measured as if the new rotation were already applied
    let rotated = object.transform.with_rotation(rotation);
    let mesh_center = local_center(object)
        .map(|center| rotated.transform_point(center))
        .ok_or(SelectionError::SourceNotSelected)?;
    let drift = rotated.location - mesh_center;

    let delta_location = (offset != DVec3::ZERO).then(|| rotation * offset);

    let placement = Placement {
        rotation,
        location: target_center + drift,
        delta_location,
    };
    debug!(object = object.name(), ?placement, "computed placement");
    Ok(placement)
}
