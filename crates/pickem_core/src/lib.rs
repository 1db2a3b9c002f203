//! Core scoring logic for the survivor + spread pick'em contest.
//!
//! This crate provides:
//! - Game outcome resolution (straight-up winner and against-the-spread winner)
//! - The weekly scoring engine with the survivor gate and the special flag
//! - Exact half-point arithmetic and the contest calendar (weeks, trimesters)
//!
//! Nothing in here performs I/O. Loading picks and games, and persisting the
//! scored weeks, is the job of the `season` crate.

pub mod error;
pub mod game;
pub mod picks;
pub mod points;
pub mod scoring;
pub mod team;
pub mod week;

pub use error::*;
pub use game::*;
pub use picks::*;
pub use points::Points;
pub use scoring::*;
pub use team::Team;
pub use week::*;
