//! Compass headings and their rotation rules.

use crate::error::InvalidHeading;
use std::fmt;

/// Display symbol used when no heading is known.
pub const UNKNOWN_SYMBOL: char = '?';

/// One of the four cardinal compass directions.
///
/// Rotation is cyclic: North → East → South → West → North.
///
/// # Examples
///
/// ```
/// use skirmish_core::Heading;
///
/// assert_eq!(Heading::West.rotate_clockwise(), Heading::North);
/// assert_eq!(Heading::North.rotate_counter_clockwise(), Heading::West);
/// assert_eq!(Heading::South.symbol(), 'S');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Heading {
    /// Facing +y.
    North = 0,
    /// Facing +x.
    East = 1,
    /// Facing -y.
    South = 2,
    /// Facing -x.
    West = 3,
}

impl Heading {
    /// All headings in clockwise order, starting at North.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// The next heading clockwise. West wraps to North.
    pub fn rotate_clockwise(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The next heading counter-clockwise. North wraps to West.
    pub fn rotate_counter_clockwise(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Single-character display symbol: `N`, `E`, `S` or `W`.
    pub fn symbol(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    /// Parse a display symbol back into a heading. Case-sensitive.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Heading::North),
            'E' => Some(Heading::East),
            'S' => Some(Heading::South),
            'W' => Some(Heading::West),
            _ => None,
        }
    }

    /// Unit `(dx, dy)` displacement of one step along this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }
}

/// Render an optional heading, falling back to [`UNKNOWN_SYMBOL`].
pub fn heading_symbol(heading: Option<Heading>) -> char {
    heading.map_or(UNKNOWN_SYMBOL, Heading::symbol)
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "North",
            Heading::East => "East",
            Heading::South => "South",
            Heading::West => "West",
        };
        f.write_str(name)
    }
}

impl TryFrom<u8> for Heading {
    type Error = InvalidHeading;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Heading::ALL
            .get(value as usize)
            .copied()
            .ok_or(InvalidHeading { value })
    }
}

impl From<Heading> for u8 {
    fn from(heading: Heading) -> Self {
        heading as u8
    }
}
