//! Leaderboards and top-performer selection.

use crate::models::Player;

/// How many players a leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 5;

/// Metric a leaderboard ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Runs,
    Wickets,
    Catches,
}

impl Metric {
    /// Read this metric's value from a player's career stats.
    pub fn value(&self, player: &Player) -> u32 {
        match self {
            Metric::Runs => player.stats.runs,
            Metric::Wickets => player.stats.wickets,
            Metric::Catches => player.stats.catches,
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "runs" => Ok(Metric::Runs),
            "wickets" => Ok(Metric::Wickets),
            "catches" => Ok(Metric::Catches),
            other => Err(format!("unknown leaderboard metric: {}", other)),
        }
    }
}

/// Top players by a metric, descending.
///
/// Ties keep original relative order (stable sort); the input slice is
/// never reordered. At most [`LEADERBOARD_SIZE`] entries are returned.
pub fn leaderboard<'a>(players: &'a [Player], metric: Metric) -> Vec<&'a Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)));
    ranked.truncate(LEADERBOARD_SIZE);
    ranked
}

/// The single best player by a metric, or None when there are no players.
pub fn top_performer<'a>(players: &'a [Player], metric: Metric) -> Option<&'a Player> {
    leaderboard(players, metric).into_iter().next()
}
