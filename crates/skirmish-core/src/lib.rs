//! Core types for the Skirmish robot arena.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by the arena and the robots that fight in it:
//! compass headings, immutable locations, agent identities, request
//! receipts, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heading;
pub mod id;
pub mod location;
pub mod receipt;

pub use error::{ConfigError, InvalidHeading, RegistrationError, Rejection};
pub use heading::{heading_symbol, Heading, UNKNOWN_SYMBOL};
pub use id::AgentId;
pub use location::Location;
pub use receipt::Receipt;
