//! # Config Crate
//!
//! Centralized configuration constants for the mesh adhesion solver.
//! Tolerances and user-facing defaults are defined here so the solver
//! crates never carry literals of their own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_OFFSET, EPSILON_TOLERANCE};
//!
//! // A normal shorter than the tolerance cannot be normalized.
//! let length: f64 = 1.0e-12;
//! assert!(length < EPSILON_TOLERANCE);
//!
//! // Offsets default to the zero vector.
//! assert_eq!(DEFAULT_OFFSET, [0.0, 0.0, 0.0]);
//! ```

pub mod constants;
