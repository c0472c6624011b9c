//! JSONL (JSON Lines) storage.
//!
//! Each line is a valid JSON object representing one entity. Malformed
//! lines are skipped with a warning rather than failing the whole read.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::models::{UserId, VictoryPost};

/// Entity types stored in a user's partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Player,
    Match,
    Tournament,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Player => "players.jsonl",
            EntityType::Match => "matches.jsonl",
            EntityType::Tournament => "tournaments.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for an entity type in a user's partition.
    pub fn for_entity(config: &StorageConfig, entity: EntityType, user: &UserId) -> Self {
        Self::new(config.user_dir(user).join(entity.filename()))
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single entity to the file.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entity)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended entity to {:?}", self.path);
        Ok(())
    }

    /// Write entities, replacing the entire file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} entities to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for an entity type in a user's partition.
    pub fn for_entity(config: &StorageConfig, entity: EntityType, user: &UserId) -> Self {
        Self::new(config.user_dir(user).join(entity.filename()))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities from the file. A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        "Failed to parse line {} in {:?}: {}",
                        line_num, self.path, e
                    );
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

/// Read the global victory wall.
pub fn read_victory_posts(config: &StorageConfig) -> Result<Vec<VictoryPost>, StorageError> {
    JsonlReader::new(config.wall_path()).read_all()
}

/// Write the global victory wall, newest first.
pub fn write_victory_posts(
    config: &StorageConfig,
    posts: &mut [VictoryPost],
) -> Result<usize, StorageError> {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    JsonlWriter::new(config.wall_path()).write_all(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, Match, MatchResult};
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestEntity {
        id: String,
        name: String,
        value: u32,
    }

    fn entity(id: &str, name: &str, value: u32) -> TestEntity {
        TestEntity {
            id: id.to_string(),
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_jsonl_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.jsonl");

        let entities = vec![entity("1", "First", 100), entity("2", "Second", 200)];

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        let count = writer.write_all(&entities).unwrap();
        assert_eq!(count, 2);

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let read_entities = reader.read_all().unwrap();

        assert_eq!(read_entities.len(), 2);
        assert_eq!(read_entities[0], entities[0]);
        assert_eq!(read_entities[1], entities[1]);
    }

    #[test]
    fn test_jsonl_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("append.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);

        writer.append(&entity("1", "First", 100)).unwrap();
        writer.append(&entity("2", "Second", 200)).unwrap();

        let entities = reader.read_all().unwrap();
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn test_jsonl_read_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.jsonl");

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert!(reader.read_all().unwrap().is_empty());
        assert!(!reader.exists());
    }

    #[test]
    fn test_write_all_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("overwrite.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);

        writer.write_all(&[entity("1", "Old", 1)]).unwrap();
        writer
            .write_all(&[entity("2", "New1", 2), entity("3", "New2", 3)])
            .unwrap();

        let read = reader.read_all().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].name, "New1");
    }

    #[test]
    fn test_read_all_skips_bad_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad_lines.jsonl");

        std::fs::write(
            &path,
            r#"{"id":"1","name":"Good","value":1}
not-valid-json
{"id":"2","name":"Also Good","value":2}
"#,
        )
        .unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        let entities = reader.read_all().unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Good");
        assert_eq!(entities[1].name, "Also Good");
    }

    #[test]
    fn test_entity_type_filenames() {
        assert_eq!(EntityType::Player.filename(), "players.jsonl");
        assert_eq!(EntityType::Match.filename(), "matches.jsonl");
        assert_eq!(EntityType::Tournament.filename(), "tournaments.jsonl");
    }

    #[test]
    fn test_for_entity_uses_user_partition() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        let user = EntityId::from("u1");

        let writer: JsonlWriter<TestEntity> =
            JsonlWriter::for_entity(&config, EntityType::Player, &user);
        writer.append(&entity("1", "A", 1)).unwrap();

        assert!(config.user_dir(&user).join("players.jsonl").exists());

        // Another user's partition is untouched
        let other: JsonlReader<TestEntity> =
            JsonlReader::for_entity(&config, EntityType::Player, &EntityId::from("u2"));
        assert!(other.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_victory_wall_roundtrip_newest_first() {
        use crate::models::VictoryPost;
        use chrono::NaiveDate;

        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        let m = Match::new(
            NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
            "Riverside CC".to_string(),
            MatchResult::Win,
        );
        let older = VictoryPost {
            created_at: chrono::Utc::now() - chrono::Duration::hours(1),
            ..VictoryPost::from_match(&m, "older".to_string(), EntityId::from("u1"))
        };
        let newer = VictoryPost::from_match(&m, "newer".to_string(), EntityId::from("u2"));

        let mut posts = vec![older, newer];
        write_victory_posts(&config, &mut posts).unwrap();

        let read = read_victory_posts(&config).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].caption, "newer");
        assert_eq!(read[1].caption, "older");
    }

    #[test]
    fn test_victory_wall_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        assert!(read_victory_posts(&config).unwrap().is_empty());
    }
}
