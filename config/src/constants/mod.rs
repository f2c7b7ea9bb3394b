//! Centralized configuration values shared by the mesh adhesion crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Numerical tolerance below which an aggregated normal is treated as
/// degenerate (its face normals cancel out or its faces have no area).
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Offset applied to placed objects when the user has not chosen one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OFFSET;
/// assert!(DEFAULT_OFFSET.iter().all(|c| *c == 0.0));
/// ```
pub const DEFAULT_OFFSET: [f64; 3] = [0.0, 0.0, 0.0];

/// Width of the numeric suffix appended to duplicated object names
/// (`Plane` becomes `Plane.001`).
///
/// # Examples
/// ```
/// use config::constants::DUPLICATE_SUFFIX_DIGITS;
/// assert_eq!(format!("{:0width$}", 7, width = DUPLICATE_SUFFIX_DIGITS), "007");
/// ```
pub const DUPLICATE_SUFFIX_DIGITS: usize = 3;

/// Immutable snapshot of solver settings that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::SolverConfig;
/// let config = SolverConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Minimum length an aggregated normal must have before it is normalized.
    pub tolerance: f64,
}

impl SolverConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SolverConfig;
    /// let cfg = SolverConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
