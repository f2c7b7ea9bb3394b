//! # Adhesion Options
//!
//! User-chosen settings a host persists between runs.

use config::constants::DEFAULT_OFFSET;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Where the source object ends up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdhesionMode {
    /// Centre of the selected faces; the source itself is moved.
    #[default]
    Single,
    /// Every selected face; one duplicate of the source per face.
    Multiple,
}

/// How duplicates are created in [`AdhesionMode::Multiple`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuplicationKind {
    /// Independent copy of the mesh data.
    #[default]
    Copy,
    /// Linked duplicate sharing the original's mesh data.
    ///
    /// The link lasts only while the mesh is read. The first edit through
    /// [`Object::mesh_mut`](crate::Object::mesh_mut) gives that object its
    /// own copy and detaches it from the others.
    Reference,
}

impl DuplicationKind {
    /// Returns true for linked duplicates.
    pub fn is_linked(self) -> bool {
        matches!(self, DuplicationKind::Reference)
    }
}

/// Settings for one adhesion run.
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::{AdhesionMode, AdhesionOptions};
///
/// let options = AdhesionOptions::default();
/// assert_eq!(options.mode, AdhesionMode::Single);
/// assert_eq!(options.offset, [0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdhesionOptions {
    pub mode: AdhesionMode,
    pub duplication: DuplicationKind,
    /// Offset in the source's local frame, applied as a delta location.
    pub offset: [f64; 3],
}

impl Default for AdhesionOptions {
    fn default() -> Self {
        Self {
            mode: AdhesionMode::default(),
            duplication: DuplicationKind::default(),
            offset: DEFAULT_OFFSET,
        }
    }
}

impl AdhesionOptions {
    /// Offset as a vector.
    pub fn offset_vector(&self) -> DVec3 {
        DVec3::from_array(self.offset)
    }
}
