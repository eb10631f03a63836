//! Immutable `(heading, x, y)` locations.

use crate::heading::Heading;
use std::fmt;

/// Where a robot stands and which way it faces.
///
/// Locations are plain values: every move or turn produces a new one.
/// Bounds are not checked here; legality belongs to the arena's
/// boundary policy.
///
/// # Examples
///
/// ```
/// use skirmish_core::{Heading, Location};
///
/// let start = Location::new(Heading::North, 1, 1);
/// assert_eq!(start.advanced(2), Location::new(Heading::North, 1, 3));
/// assert_eq!(start.with_heading(Heading::East).heading(), Heading::East);
/// assert_eq!(start.to_string(), "1 1 N");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    heading: Heading,
    x: i32,
    y: i32,
}

impl Location {
    /// Create a location facing `heading` at `(x, y)`.
    pub const fn new(heading: Heading, x: i32, y: i32) -> Self {
        Self { heading, x, y }
    }

    /// The heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Position along the x axis.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Position along the y axis.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Same position, different heading.
    pub fn with_heading(self, heading: Heading) -> Self {
        Self { heading, ..self }
    }

    /// Shift by `(dx, dy)` keeping the heading. Saturates at the `i32` range.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            heading: self.heading,
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Move `steps` cells along the current heading.
    ///
    /// North increases y, East increases x, South decreases y, West
    /// decreases x. Negative `steps` moves backwards.
    pub fn advanced(self, steps: i32) -> Self {
        let (dx, dy) = self.heading.offset();
        self.translated(dx.saturating_mul(steps), dy.saturating_mul(steps))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading.symbol())
    }
}
