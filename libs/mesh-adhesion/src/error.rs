//! # Adhesion Errors
//!
//! Error types for placement solving. Selection problems are ordinary,
//! user-recoverable outcomes and keep their own enum so hosts can show a
//! dedicated message for each.

use thiserror::Error;

use crate::host::ObjectId;

/// Which side of the adhesion an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshRole {
    /// The object being moved.
    Source,
    /// The object being adhered to.
    Target,
}

impl std::fmt::Display for MeshRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshRole::Source => f.write_str("source"),
            MeshRole::Target => f.write_str("target"),
        }
    }
}

/// Missing face selection on one of the two meshes.
///
/// The source is always checked first, so when neither mesh has a selection
/// the result is [`SelectionError::SourceNotSelected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No face is selected on the mesh to adhere.
    #[error("Mesh To Adhere Not Selected")]
    SourceNotSelected,

    /// No face is selected on the mesh being adhered to.
    #[error("Faces Of Mesh Not Selected")]
    TargetNotSelected,
}

/// Errors that can occur while solving or applying a placement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdhesionError {
    /// One of the meshes has no selected faces.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Selected face normals cancel out or have no area.
    #[error("Degenerate {role} normal: selected faces have no usable direction")]
    DegenerateNormal { role: MeshRole },

    /// Scene lookup failed.
    #[error("Unknown object: {0}")]
    UnknownObject(ObjectId),

    /// Source and target refer to the same object.
    #[error("The Mesh Is Being Editted")]
    SourceIsTarget,

    /// A mesh builder received invalid dimensions.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// The host returned a different number of duplicates than requested.
    #[error("Duplicate count mismatch: expected {expected}, got {actual}")]
    DuplicateCountMismatch { expected: usize, actual: usize },
}

impl AdhesionError {
    /// Creates a degenerate normal error.
    pub fn degenerate(role: MeshRole) -> Self {
        Self::DegenerateNormal { role }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate_geometry(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Returns the selection error, if this is one.
    pub fn as_selection(&self) -> Option<SelectionError> {
        match self {
            Self::Selection(err) => Some(*err),
            _ => None,
        }
    }
}
