//! Arena coordination for Skirmish.
//!
//! The [`Arena`] owns a registry of [`BattleReport`]s, one per registered
//! agent, and arbitrates every movement and heading request against its
//! [`BoundaryPolicy`]. Agents never touch the registry directly: at
//! registration they receive a [`Channel`] bound to their own identity.
//!
//! # Boundary policies
//!
//! - [`Rectangle`]: `[0, width) × [0, height)`, built from an
//!   [`ArenaConfig`]
//!
//! Any other shape can be plugged in through [`Arena::with_policy`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod boundary;
pub mod channel;
pub mod config;
pub mod metrics;
pub mod report;

pub use arena::{Arena, Contender};
pub use boundary::{BoundaryPolicy, Rectangle};
pub use channel::Channel;
pub use config::ArenaConfig;
pub use metrics::ArenaMetrics;
pub use report::BattleReport;
