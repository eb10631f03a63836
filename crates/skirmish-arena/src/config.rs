//! Arena configuration and validation.

use crate::boundary::Rectangle;
use skirmish_core::ConfigError;

/// Builder-input for a rectangular [`Arena`](crate::Arena).
///
/// [`validate()`](ArenaConfig::validate) checks the dimensions;
/// [`Arena::new`](crate::Arena::new) calls it before building the
/// boundary policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of columns (x extent). Default: 5.
    pub width: u32,
    /// Number of rows (y extent). Default: 5.
    pub height: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

impl ArenaConfig {
    /// A config for a `width × height` arena.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check structural invariants without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.boundary().map(|_| ())
    }

    /// Build the rectangular boundary policy for this config.
    pub fn boundary(&self) -> Result<Rectangle, ConfigError> {
        Rectangle::new(self.width, self.height)
    }
}
