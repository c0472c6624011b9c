//! # Crease Tracker
//!
//! A local tracker for an amateur cricket team: squad, match records,
//! tournaments, and a victory wall, with derived statistics on top.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, matches, tournaments, wall posts)
//! - **storage**: Filesystem persistence (JSONL, partitioned per user)
//! - **store**: Data access layer combining reads, writes, and stat folding
//! - **calculate**: Statistics and derived metrics computation
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;
pub mod store;

pub use models::*;
