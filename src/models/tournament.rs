//! Tournament model and derived standings rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, TournamentId};

/// Lifecycle state of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentStatus::Upcoming => write!(f, "upcoming"),
            TournamentStatus::Ongoing => write!(f, "ongoing"),
            TournamentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A tournament the club takes part in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    /// Unique identifier (derived from name + format)
    pub id: TournamentId,

    /// Tournament name
    pub name: String,

    /// Format description (e.g. "T20 league", "40-over knockout")
    pub format: String,

    /// Number of participating teams
    #[serde(default)]
    pub teams: u32,

    /// Number of scheduled matches
    #[serde(default)]
    pub matches: u32,

    /// Lifecycle state
    pub status: TournamentStatus,

    /// Completion fraction in [0,1], when tracked
    pub progress: Option<f64>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new Tournament with auto-generated ID.
    pub fn new(name: String, format: String) -> Self {
        let id = EntityId::generate(&[&name, &format]);

        Self {
            id,
            name,
            format,
            teams: 0,
            matches: 0,
            status: TournamentStatus::Upcoming,
            progress: None,
            created_at: Utc::now(),
        }
    }

    /// Builder method to set team and match counts.
    pub fn with_counts(mut self, teams: u32, matches: u32) -> Self {
        self.teams = teams;
        self.matches = matches;
        self
    }

    /// Builder method to set the lifecycle state.
    pub fn with_status(mut self, status: TournamentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder method to set completion progress.
    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress.clamp(0.0, 1.0));
        self
    }
}

/// One row of a tournament table. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub draw: u32,
    pub points: u32,
    /// 1-based table position, assigned after sorting
    pub position: u32,
}
