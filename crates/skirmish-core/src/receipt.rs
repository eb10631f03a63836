//! Request receipts.

use crate::error::Rejection;
use crate::location::Location;

/// Outcome of a movement, heading, or command request.
///
/// On acceptance `location` is the new authoritative location. On
/// rejection `location` is the fallback the caller should trust instead:
/// the unchanged arena location for out-of-bounds moves, the robot's
/// last-known location for local rejections, and `None` when the agent
/// is not registered anywhere.
///
/// # Examples
///
/// ```
/// use skirmish_core::{Heading, Location, Receipt, Rejection};
///
/// let here = Location::new(Heading::North, 0, 4);
/// let receipt = Receipt::reject(Rejection::OutOfBounds, Some(here));
///
/// assert!(!receipt.accepted);
/// assert_eq!(receipt.location, Some(here));
/// assert_eq!(receipt.reason, Some(Rejection::OutOfBounds));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Whether the request was carried out.
    pub accepted: bool,
    /// Resulting location, or the fallback location on rejection.
    pub location: Option<Location>,
    /// The reason the request was rejected, if applicable.
    pub reason: Option<Rejection>,
}

impl Receipt {
    /// An accepted request that left the agent at `location`.
    pub fn accept(location: Location) -> Self {
        Self {
            accepted: true,
            location: Some(location),
            reason: None,
        }
    }

    /// A rejected request with an optional fallback location.
    pub fn reject(reason: Rejection, location: Option<Location>) -> Self {
        Self {
            accepted: false,
            location,
            reason: Some(reason),
        }
    }

    /// Shorthand for an agent that has no arena to talk to.
    pub fn not_registered() -> Self {
        Self::reject(Rejection::NotRegistered, None)
    }
}
