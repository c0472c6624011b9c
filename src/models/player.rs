//! Player model and career statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, PlayerId};

/// Playing role of a squad member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRole::Batsman => write!(f, "Batsman"),
            PlayerRole::Bowler => write!(f, "Bowler"),
            PlayerRole::AllRounder => write!(f, "All-rounder"),
            PlayerRole::WicketKeeper => write!(f, "Wicket-keeper"),
        }
    }
}

/// Flat career statistics record.
///
/// Every field is serde-defaulted so partially-entered records
/// deserialize with the missing fields at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default)]
    pub matches: u32,
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

/// A squad member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (derived from name + creation timestamp)
    pub id: PlayerId,

    /// Player name
    pub name: String,

    /// Playing role
    pub role: PlayerRole,

    /// Team the player turns out for
    pub team: Option<String>,

    /// Career statistics
    #[serde(default)]
    pub stats: PlayerStats,

    /// When this record was created
    pub created_at: DateTime<Utc>,

    /// When this record was last edited
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a new Player with zeroed stats and auto-generated ID.
    pub fn new(name: String, role: PlayerRole) -> Self {
        let created_at = Utc::now();
        let id = EntityId::generate(&[&name, &created_at.to_rfc3339()]);

        Self {
            id,
            name,
            role,
            team: None,
            stats: PlayerStats::default(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Builder method to set the team.
    pub fn with_team(mut self, team: String) -> Self {
        self.team = Some(team);
        self
    }

    /// Builder method to set initial stats.
    pub fn with_stats(mut self, stats: PlayerStats) -> Self {
        self.stats = stats;
        self
    }

    /// Replace the whole stats record and bump `updated_at`.
    /// Edits are wholesale, there is no partial-field merge.
    pub fn replace_stats(&mut self, stats: PlayerStats) {
        self.stats = stats;
        self.updated_at = Utc::now();
    }
}
