//! Data-access boundary.
//!
//! The only collaborator the statistics layer and the API see. Every
//! call takes the owning user explicitly. Reads degrade to empty
//! collections on failure (logged, never surfaced); writes return
//! `Result` so the HTTP boundary can report them.

use tracing::warn;
use uuid::Uuid;

use crate::calculate::update_player_stats;
use crate::models::{
    Match, MatchId, Player, PlayerId, Tournament, TournamentId, UserId, VictoryPost,
};
use crate::storage::{
    read_victory_posts, write_victory_posts, EntityType, JsonlReader, JsonlWriter, StorageConfig,
    StorageError,
};

/// Outcome of a victory wall delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallDelete {
    Deleted,
    NotFound,
    /// The post exists but belongs to another user.
    Forbidden,
}

/// Handle to the per-user partitions and the global wall.
#[derive(Debug, Clone)]
pub struct DataStore {
    config: StorageConfig,
}

impl DataStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    // ── Reads (total: empty on failure) ─────────────────────────────

    pub fn players(&self, user: &UserId) -> Vec<Player> {
        JsonlReader::for_entity(&self.config, EntityType::Player, user)
            .read_all()
            .unwrap_or_else(|e| {
                warn!("Failed to read players for {}: {}", user, e);
                Vec::new()
            })
    }

    pub fn matches(&self, user: &UserId) -> Vec<Match> {
        JsonlReader::for_entity(&self.config, EntityType::Match, user)
            .read_all()
            .unwrap_or_else(|e| {
                warn!("Failed to read matches for {}: {}", user, e);
                Vec::new()
            })
    }

    pub fn tournaments(&self, user: &UserId) -> Vec<Tournament> {
        JsonlReader::for_entity(&self.config, EntityType::Tournament, user)
            .read_all()
            .unwrap_or_else(|e| {
                warn!("Failed to read tournaments for {}: {}", user, e);
                Vec::new()
            })
    }

    /// The global wall, readable by everyone.
    pub fn victory_posts(&self) -> Vec<VictoryPost> {
        read_victory_posts(&self.config).unwrap_or_else(|e| {
            warn!("Failed to read victory wall: {}", e);
            Vec::new()
        })
    }

    pub fn tournament(&self, user: &UserId, id: &TournamentId) -> Option<Tournament> {
        self.tournaments(user).into_iter().find(|t| &t.id == id)
    }

    /// Matches belonging to one tournament.
    pub fn tournament_matches(&self, user: &UserId, id: &TournamentId) -> Vec<Match> {
        self.matches(user)
            .into_iter()
            .filter(|m| m.tournament_id.as_ref() == Some(id))
            .collect()
    }

    // ── Players ─────────────────────────────────────────────────────

    pub fn add_player(&self, user: &UserId, player: &Player) -> Result<(), StorageError> {
        JsonlWriter::for_entity(&self.config, EntityType::Player, user).append(player)
    }

    /// Wholesale replacement of an existing player record.
    /// Returns false when no player with that id exists.
    pub fn update_player(&self, user: &UserId, player: &Player) -> Result<bool, StorageError> {
        let mut players = self.players(user);
        let Some(slot) = players.iter_mut().find(|p| p.id == player.id) else {
            return Ok(false);
        };
        *slot = player.clone();
        JsonlWriter::for_entity(&self.config, EntityType::Player, user).write_all(&players)?;
        Ok(true)
    }

    pub fn delete_player(&self, user: &UserId, id: &PlayerId) -> Result<bool, StorageError> {
        let mut players = self.players(user);
        let before = players.len();
        players.retain(|p| &p.id != id);
        if players.len() == before {
            return Ok(false);
        }
        JsonlWriter::for_entity(&self.config, EntityType::Player, user).write_all(&players)?;
        Ok(true)
    }

    // ── Matches ─────────────────────────────────────────────────────

    /// Record a match atomically: deduplicate performances, append the
    /// match, then fold each performance into the owning player's career
    /// stats (wholesale replacement writes).
    pub fn record_match(&self, user: &UserId, m: Match) -> Result<Match, StorageError> {
        let mut m = m;
        let performances = std::mem::take(&mut m.performances);
        let m = m.with_performances(performances);

        JsonlWriter::for_entity(&self.config, EntityType::Match, user).append(&m)?;

        let mut players = self.players(user);
        let mut touched = false;
        for perf in &m.performances {
            if let Some(player) = players.iter_mut().find(|p| p.id == perf.player_id) {
                player.replace_stats(update_player_stats(&player.stats, perf));
                touched = true;
            } else {
                warn!(
                    "Performance for unknown player {} in match {}",
                    perf.player_id, m.id
                );
            }
        }
        if touched {
            JsonlWriter::for_entity(&self.config, EntityType::Player, user).write_all(&players)?;
        }

        Ok(m)
    }

    pub fn delete_match(&self, user: &UserId, id: &MatchId) -> Result<bool, StorageError> {
        let mut matches = self.matches(user);
        let before = matches.len();
        matches.retain(|m| &m.id != id);
        if matches.len() == before {
            return Ok(false);
        }
        JsonlWriter::for_entity(&self.config, EntityType::Match, user).write_all(&matches)?;
        Ok(true)
    }

    // ── Tournaments ─────────────────────────────────────────────────

    pub fn add_tournament(&self, user: &UserId, tournament: &Tournament) -> Result<(), StorageError> {
        JsonlWriter::for_entity(&self.config, EntityType::Tournament, user).append(tournament)
    }

    // ── Victory wall ────────────────────────────────────────────────

    pub fn add_victory_post(&self, post: &VictoryPost) -> Result<(), StorageError> {
        let mut posts = self.victory_posts();
        posts.push(post.clone());
        write_victory_posts(&self.config, &mut posts)?;
        Ok(())
    }

    /// Delete a wall post, refusing when the caller is not its author.
    pub fn delete_victory_post(&self, user: &UserId, id: &Uuid) -> Result<WallDelete, StorageError> {
        let mut posts = self.victory_posts();
        let Some(post) = posts.iter().find(|p| &p.id == id) else {
            return Ok(WallDelete::NotFound);
        };
        if !post.is_owned_by(user) {
            warn!("User {} attempted to delete post {} they do not own", user, id);
            return Ok(WallDelete::Forbidden);
        }
        posts.retain(|p| &p.id != id);
        write_victory_posts(&self.config, &mut posts)?;
        Ok(WallDelete::Deleted)
    }
}
