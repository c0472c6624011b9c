//! Victory wall posts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Match, MatchId, MatchResult, UserId};

/// A celebratory post on the victory wall, created from a completed match.
///
/// Posts are globally readable but only the author may delete them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VictoryPost {
    /// Random identifier (posts are not content-addressed)
    pub id: Uuid,

    /// Match this post celebrates
    pub match_id: MatchId,

    /// Opponent in that match
    pub opponent: String,

    /// Outcome of that match
    pub result: MatchResult,

    /// Date of the match
    pub date: NaiveDate,

    /// User-written caption
    pub caption: String,

    /// Optional attached image
    pub image_uri: Option<String>,

    /// Owner; mutation is restricted to this user
    pub author_id: UserId,

    /// When this post was created
    pub created_at: DateTime<Utc>,
}

impl VictoryPost {
    /// Create a post celebrating the given match.
    pub fn from_match(m: &Match, caption: String, author_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id: m.id.clone(),
            opponent: m.opponent.clone(),
            result: m.result,
            date: m.date,
            caption,
            image_uri: None,
            author_id,
            created_at: Utc::now(),
        }
    }

    /// Builder method to attach an image.
    pub fn with_image(mut self, uri: String) -> Self {
        self.image_uri = Some(uri);
        self
    }

    /// Whether the given user owns this post.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.author_id == user
    }
}
