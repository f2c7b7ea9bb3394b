//! # Primitives
//!
//! Mesh builders for simple shapes used as adhesion sources and targets.

pub mod cube;
pub mod plane;

pub use cube::{create_cube, CubeFace};
pub use plane::create_plane;
