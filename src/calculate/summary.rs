//! Win rate and team summary aggregation.

use serde::{Deserialize, Serialize};

use crate::models::{Match, MatchResult, Player};

/// Aggregate team view across all players and matches.
///
/// Player-derived totals (`total_runs`, `total_wickets`) and
/// match-derived totals (`match_runs`, `match_extras`) come from
/// independently entered data and are reported side by side without
/// reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Integer percentage, rounded half-up
    pub win_rate: u32,
    /// Sum of every player's career runs
    pub total_runs: u32,
    /// Sum of every player's career wickets
    pub total_wickets: u32,
    /// Runs scored across recorded match performances
    pub match_runs: u32,
    /// Wides + no-balls across recorded matches
    pub match_extras: u32,
}

/// Wins as an integer percentage of matches played; 0 with no matches.
pub fn win_rate(matches: &[Match]) -> u32 {
    if matches.is_empty() {
        return 0;
    }
    let wins = matches
        .iter()
        .filter(|m| m.result == MatchResult::Win)
        .count();
    (wins as f64 / matches.len() as f64 * 100.0).round() as u32
}

/// Build the team summary from players and matches.
pub fn summarize(players: &[Player], matches: &[Match]) -> TeamSummary {
    let wins = matches
        .iter()
        .filter(|m| m.result == MatchResult::Win)
        .count() as u32;
    let losses = matches
        .iter()
        .filter(|m| m.result == MatchResult::Loss)
        .count() as u32;
    let draws = matches.len() as u32 - wins - losses;

    TeamSummary {
        matches_played: matches.len() as u32,
        wins,
        losses,
        draws,
        win_rate: win_rate(matches),
        total_runs: players.iter().map(|p| p.stats.runs).sum(),
        total_wickets: players.iter().map(|p| p.stats.wickets).sum(),
        match_runs: matches.iter().map(|m| m.batting_runs()).sum(),
        match_extras: matches.iter().map(|m| m.extras()).sum(),
    }
}
