//! # Host Capabilities
//!
//! What the solver needs from the application that owns the objects.
//! The solver never touches selection state; it only asks the host for
//! duplicates and reads their transforms back.

use serde::{Deserialize, Serialize};

use crate::object::Object;

/// Opaque handle to an object owned by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Object duplication provided by the host.
pub trait Duplicate {
    /// Creates `count` duplicates of `original` and returns their handles in
    /// creation order.
    ///
    /// Duplicates start with the original's transform. When `linked` is true
    /// they share the original's mesh data, otherwise each gets its own copy.
    ///
    /// The solver rejects a result whose length differs from `count` and
    /// does not keep or remove the handles it was given. Whatever the host
    /// created for that call stays in the host and is the host's to clean up.
    fn duplicate(&mut self, original: &Object, count: usize, linked: bool) -> Vec<ObjectId>;

    /// Looks up an object by handle.
    fn object(&self, id: ObjectId) -> Option<&Object>;
}
