//! Season runner for the DDD Trifecta pick'em contest
//!
//! This crate provides infrastructure for:
//! - Loading weekly picks and the season schedule from CSV
//! - Scoring a week and persisting it as a write-once artifact
//! - Season and trimester standings, player summaries and prize reports
//!
//! # Usage
//!
//! ```bash
//! # Score week 5 once its games are final
//! cargo run -p season -- score --week 5
//!
//! # Season leaderboard, or one trimester of it
//! cargo run -p season -- standings
//! cargo run -p season -- standings --trimester 2
//! ```

pub mod breakdown;
pub mod config;
pub mod matchups;
pub mod prizes;
pub mod remaining;
pub mod runner;
pub mod standings;
pub mod store;
pub mod summary;
pub mod table;

#[cfg(test)]
mod test_support;

pub use breakdown::*;
pub use config::*;
pub use matchups::*;
pub use prizes::*;
pub use remaining::*;
pub use runner::*;
pub use standings::*;
pub use store::*;
pub use summary::*;
pub use table::*;
