//! Array configuration parameters.

use std::error::Error;
use std::fmt;

/// Configuration for a [`DynArray`](crate::DynArray).
///
/// Only the starting slot count is tunable. Growth always doubles the
/// current capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynArrayConfig {
    /// Number of slots allocated at construction.
    ///
    /// Default: 10. Must be at least 1, since doubling zero slots
    /// never makes room.
    pub initial_capacity: usize,
}

impl DynArrayConfig {
    /// Default initial capacity, in elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check the structural invariants of this config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroInitialCapacity`] if `initial_capacity`
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        Ok(())
    }
}

impl Default for DynArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Errors detected while validating a [`DynArrayConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` was zero.
    ZeroInitialCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInitialCapacity => write!(f, "initial capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
