//! Statistics calculation engine.
//!
//! Pure, stateless functions over in-memory collections:
//! - Career statistic formulas (averages, strike/economy rates)
//! - Leaderboards and top performers
//! - Recent-match trend series
//! - Win rate and team summary aggregation
//! - Tournament standings
//!
//! Every function is total over its input domain: division by zero
//! yields 0, empty collections yield empty results.

mod formulas;
mod leaderboard;
mod standings;
mod summary;
mod trends;

pub use formulas::*;
pub use leaderboard::*;
pub use standings::*;
pub use summary::*;
pub use trends::*;
