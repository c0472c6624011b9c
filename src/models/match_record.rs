//! Match record and per-player performance models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, MatchId, PlayerId, TournamentId};

/// Placeholder name for the club's own side when a match does not name it.
pub const HOME_TEAM_PLACEHOLDER: &str = "Our XI";

/// Match outcome, fixed at record time.
///
/// Replaces the legacy free-text result field. Free text still arrives
/// from older data entry paths and is classified once at the ingestion
/// boundary via [`MatchResult::from_free_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// Classify a free-text result string.
    ///
    /// Case-insensitive substring match: anything containing "win" or
    /// "won" is a Win, then anything containing "loss" or "lost" is a
    /// Loss, everything else is a Draw.
    pub fn from_free_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("win") || lower.contains("won") {
            MatchResult::Win
        } else if lower.contains("loss") || lower.contains("lost") {
            MatchResult::Loss
        } else {
            MatchResult::Draw
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Win => write!(f, "Win"),
            MatchResult::Loss => write!(f, "Loss"),
            MatchResult::Draw => write!(f, "Draw"),
        }
    }
}

/// One player's batting/bowling/fielding contribution to a single match.
///
/// All numeric fields are serde-defaulted: a batting-only entry simply
/// omits the bowling and fielding figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub player_id: PlayerId,
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub balls: u32,
    #[serde(default)]
    pub fours: u32,
    #[serde(default)]
    pub sixes: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub overs: f64,
    #[serde(default)]
    pub runs_conceded: u32,
    #[serde(default)]
    pub maidens: u32,
    #[serde(default)]
    pub catches: u32,
    #[serde(default)]
    pub stumpings: u32,
    #[serde(default)]
    pub run_outs: u32,
}

impl Performance {
    /// Create an empty performance for a player.
    pub fn new(player_id: PlayerId, player_name: String) -> Self {
        Self {
            player_id,
            player_name,
            ..Default::default()
        }
    }
}

/// A recorded match. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier (derived from date + opponent)
    pub id: MatchId,

    /// Date the match was played
    pub date: NaiveDate,

    /// Opposing team name
    pub opponent: String,

    /// Where the match was played
    pub venue: Option<String>,

    /// Our side's name; defaults to [`HOME_TEAM_PLACEHOLDER`] when unset
    pub team1: Option<String>,

    /// Tournament this match belongs to, if any
    pub tournament_id: Option<TournamentId>,

    /// Outcome from our side's perspective
    pub result: MatchResult,

    /// Wides conceded
    #[serde(default)]
    pub wides: u32,

    /// No-balls conceded
    #[serde(default)]
    pub no_balls: u32,

    /// Per-player contributions; unique by `player_id`
    #[serde(default)]
    pub performances: Vec<Performance>,

    /// Free-form notes
    pub notes: Option<String>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a new Match with auto-generated ID.
    pub fn new(date: NaiveDate, opponent: String, result: MatchResult) -> Self {
        let id = EntityId::generate(&[&date.to_string(), &opponent]);

        Self {
            id,
            date,
            opponent,
            venue: None,
            team1: None,
            tournament_id: None,
            result,
            wides: 0,
            no_balls: 0,
            performances: Vec::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the venue.
    pub fn with_venue(mut self, venue: String) -> Self {
        self.venue = Some(venue);
        self
    }

    /// Builder method to set our side's name.
    pub fn with_team1(mut self, team1: String) -> Self {
        self.team1 = Some(team1);
        self
    }

    /// Builder method to link the match to a tournament.
    pub fn with_tournament(mut self, tournament_id: TournamentId) -> Self {
        self.tournament_id = Some(tournament_id);
        self
    }

    /// Builder method to set extras.
    pub fn with_extras(mut self, wides: u32, no_balls: u32) -> Self {
        self.wides = wides;
        self.no_balls = no_balls;
        self
    }

    /// Builder method to attach performances.
    ///
    /// Duplicate `player_id` entries are dropped (first occurrence wins)
    /// to preserve the uniqueness invariant.
    pub fn with_performances(mut self, performances: Vec<Performance>) -> Self {
        let mut seen: Vec<&PlayerId> = Vec::new();
        let mut unique = Vec::with_capacity(performances.len());
        for perf in &performances {
            if seen.contains(&&perf.player_id) {
                tracing::warn!(
                    "Dropping duplicate performance for player {} in match {}",
                    perf.player_id,
                    self.id
                );
                continue;
            }
            seen.push(&perf.player_id);
            unique.push(perf.clone());
        }
        self.performances = unique;
        self
    }

    /// Builder method to set notes.
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Our side's name, falling back to the placeholder.
    pub fn home_team(&self) -> &str {
        self.team1.as_deref().unwrap_or(HOME_TEAM_PLACEHOLDER)
    }

    /// Total extras conceded (wides + no-balls).
    pub fn extras(&self) -> u32 {
        self.wides + self.no_balls
    }

    /// Runs scored by our batsmen in this match.
    pub fn batting_runs(&self) -> u32 {
        self.performances.iter().map(|p| p.runs).sum()
    }

    /// Overs bowled by our bowlers in this match.
    pub fn overs_bowled(&self) -> f64 {
        self.performances.iter().map(|p| p.overs).sum()
    }
}
