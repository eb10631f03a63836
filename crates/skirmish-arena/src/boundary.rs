//! The [`BoundaryPolicy`] trait and the rectangular arena shape.

use skirmish_core::{ConfigError, Location};
use std::any::Any;

/// Decides whether a proposed move is legal in a particular arena shape.
///
/// The arena consults its policy for every movement request, passing the
/// agent's current recorded location and the proposed target. Heading
/// changes never reach the policy: rotating in place cannot leave the
/// arena.
///
/// # Object Safety
///
/// Arenas hold the policy as `Box<dyn BoundaryPolicy>`. Use
/// `downcast_ref` to recover the concrete shape.
///
/// # Thread Safety
///
/// `Sync` is required because a single arena arbitrates requests from
/// many threads at once.
pub trait BoundaryPolicy: Any + Send + Sync + 'static {
    /// Whether an agent at `current` may move to `target`.
    fn is_legal_move(&self, current: &Location, target: &Location) -> bool;
}

impl dyn BoundaryPolicy {
    /// Attempt to downcast a trait object to a concrete policy type.
    pub fn downcast_ref<T: BoundaryPolicy>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// A `width × height` rectangle anchored at the origin.
///
/// Legal cells are `0 <= x < width` and `0 <= y < height`. Only the
/// target matters; where the agent comes from and which way it faces are
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new rectangle.
    ///
    /// Returns `Err(ConfigError::EmptyArena)` if either dimension is 0, or
    /// `Err(ConfigError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skirmish_arena::{BoundaryPolicy, Rectangle};
    /// use skirmish_core::{Heading, Location};
    ///
    /// let arena = Rectangle::new(5, 5).unwrap();
    /// let here = Location::new(Heading::North, 0, 4);
    /// assert!(arena.is_legal_move(&here, &Location::new(Heading::North, 0, 3)));
    /// assert!(!arena.is_legal_move(&here, &Location::new(Heading::North, 0, 5)));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyArena);
        }
        if width > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(ConfigError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Extent along x.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Extent along y.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(x, y)` is a cell of this rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }
}

impl BoundaryPolicy for Rectangle {
    fn is_legal_move(&self, _current: &Location, target: &Location) -> bool {
        self.contains(target.x(), target.y())
    }
}
