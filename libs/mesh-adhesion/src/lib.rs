//! # Mesh Adhesion
//!
//! Moves a mesh object so that its selected faces sit on the selected faces
//! of another object, turned to face against the target surface.
//!
//! ## Architecture
//!
//! ```text
//! Scene (host) → Object snapshots → PlacementSolver → Placement(s) → Scene
//! ```
//!
//! ## Modes
//!
//! - **Single**: the source is placed on the centre of all selected target
//!   faces, aligned with their area-weighted normal.
//! - **Multiple**: one duplicate of the source per selected target face,
//!   each aligned with its own face.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_adhesion::primitives::{create_cube, create_plane, CubeFace};
//! use mesh_adhesion::{adhere, AdhesionOptions, Object, Scene};
//! use glam::DVec3;
//!
//! let mut cube = create_cube(DVec3::splat(2.0)).unwrap();
//! cube.select_face(CubeFace::Top.index(), true);
//!
//! let mut scene = Scene::new();
//! let target = scene.add(Object::new("Cube", cube));
//! let source = scene.add(Object::new("Plane", create_plane(1.0).unwrap()));
//!
//! let moved = adhere(&mut scene, target, source, &AdhesionOptions::default()).unwrap();
//! assert_eq!(moved, vec![source]);
//! ```

pub mod centroid;
pub mod error;
pub mod host;
pub mod mesh;
pub mod normal;
pub mod object;
pub mod options;
pub mod placement;
pub mod primitives;
pub mod scene;
pub mod selection;
pub mod solver;

pub use error::{AdhesionError, MeshRole, SelectionError};
pub use host::{Duplicate, ObjectId};
pub use mesh::{Face, FaceSample, Mesh};
pub use object::{Object, Transform};
pub use options::{AdhesionMode, AdhesionOptions, DuplicationKind};
pub use placement::Placement;
pub use scene::Scene;
pub use solver::PlacementSolver;

use tracing::debug;

/// Runs one adhesion with the default solver configuration.
///
/// See [`adhere_with`].
pub fn adhere(
    scene: &mut Scene,
    target: ObjectId,
    source: ObjectId,
    options: &AdhesionOptions,
) -> Result<Vec<ObjectId>, AdhesionError> {
    adhere_with(&PlacementSolver::default(), scene, target, source, options)
}

/// Adheres `source` to the selected faces of `target` and writes the result
/// back into `scene`.
///
/// In [`AdhesionMode::Single`] the source itself is moved. In
/// [`AdhesionMode::Multiple`] the source stays where it is and one duplicate
/// per selected target face is created and placed.
///
/// Returns the handles of the objects that were moved.
pub fn adhere_with(
    solver: &PlacementSolver,
    scene: &mut Scene,
    target: ObjectId,
    source: ObjectId,
    options: &AdhesionOptions,
) -> Result<Vec<ObjectId>, AdhesionError> {
    if target == source {
        return Err(AdhesionError::SourceIsTarget);
    }

    let target_object = scene
        .get(target)
        .ok_or(AdhesionError::UnknownObject(target))?
        .clone();
    let source_object = scene
        .get(source)
        .ok_or(AdhesionError::UnknownObject(source))?
        .clone();
    let offset = options.offset_vector();

    debug!(
        target = target_object.name(),
        source = source_object.name(),
        mode = ?options.mode,
        "adhering"
    );

    match options.mode {
        AdhesionMode::Single => {
            let placement = solver.solve_single(&source_object, &target_object, offset)?;
            scene.apply(source, &placement)?;
            Ok(vec![source])
        }
        AdhesionMode::Multiple => {
            let placements = solver.solve_multiple(
                &source_object,
                &target_object,
                offset,
                options.duplication.is_linked(),
                scene,
            )?;
            placements
                .into_iter()
                .map(|(id, placement)| scene.apply(id, &placement).map(|()| id))
                .collect()
        }
    }
}
