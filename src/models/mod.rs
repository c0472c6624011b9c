//! Core data models for the cricket tracker.

mod ids;
mod match_record;
mod player;
mod tournament;
mod victory;

pub use ids::*;
pub use match_record::*;
pub use player::*;
pub use tournament::*;
pub use victory::*;
