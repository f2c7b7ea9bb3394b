//! # Selection Validator
//!
//! Checks that both meshes have at least one selected face before any
//! geometry is aggregated.

use crate::error::SelectionError;
use crate::mesh::Mesh;

/// Validates the face selections of the source and target meshes.
///
/// The source is checked first: when neither mesh has a selection the
/// result is [`SelectionError::SourceNotSelected`].
///
/// # Example
///
/// ```rust
/// use mesh_adhesion::{selection::validate, Mesh, SelectionError};
///
/// let empty = Mesh::new();
/// assert_eq!(validate(&empty, &empty), Err(SelectionError::SourceNotSelected));
/// ```
pub fn validate(source: &Mesh, target: &Mesh) -> Result<(), SelectionError> {
    if !source.has_selection() {
        return Err(SelectionError::SourceNotSelected);
    }
    if !target.has_selection() {
        return Err(SelectionError::TargetNotSelected);
    }
    Ok(())
}
