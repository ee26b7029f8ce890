// Database layer - SQLite connection, migrations, queries

use rusqlite::{params, types::Type, Connection, Result};
use std::path::Path;

use crate::listing::TrackRecord;

/// A playlist persisted for a user. Tracks are stored verbatim as a JSON
/// array column; SQL never looks inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlaylist {
    pub id: Option<i64>,
    pub user_id: String,
    pub mood: String,
    pub name: String,
    pub tracks: Vec<TrackRecord>,
    pub created_at: Option<String>,
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new database connection
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Database { conn })
    }

    /// Create an in-memory database (for testing)
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Run migrations to set up the database schema
    pub fn run_migrations(&self) -> Result<()> {
        let migration_001 = include_str!("migrations/001_init.sql");
        self.conn.execute_batch(migration_001)?;
        Ok(())
    }

    fn encode_tracks(tracks: &[TrackRecord]) -> Result<String> {
        serde_json::to_string(tracks)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }

    fn decode_tracks(column: usize, json: &str) -> Result<Vec<TrackRecord>> {
        serde_json::from_str(json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
    }

    fn row_to_playlist(row: &rusqlite::Row<'_>) -> Result<SavedPlaylist> {
        let tracks_json: String = row.get(4)?;
        Ok(SavedPlaylist {
            id: row.get(0)?,
            user_id: row.get(1)?,
            mood: row.get(2)?,
            name: row.get(3)?,
            tracks: Self::decode_tracks(4, &tracks_json)?,
            created_at: row.get(5)?,
        })
    }

    // --- Playlist operations ---

    /// Save a playlist. Returns the new playlist ID.
    pub fn save_playlist(&self, playlist: &SavedPlaylist) -> Result<i64> {
        let tracks_json = Self::encode_tracks(&playlist.tracks)?;
        self.conn.execute(
            "INSERT INTO playlists (user_id, mood, name, tracks) VALUES (?, ?, ?, ?)",
            params![playlist.user_id, playlist.mood, playlist.name, tracks_json],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a single playlist by ID.
    pub fn get_playlist(&self, id: i64) -> Result<SavedPlaylist> {
        self.conn.query_row(
            "SELECT id, user_id, mood, name, tracks, created_at
             FROM playlists WHERE id = ?",
            [id],
            Self::row_to_playlist,
        )
    }

    /// Get all playlists saved by a user, newest first.
    pub fn get_playlists_for_user(&self, user_id: &str) -> Result<Vec<SavedPlaylist>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, mood, name, tracks, created_at
             FROM playlists WHERE user_id = ?
             ORDER BY created_at DESC, id DESC",
        )?;

        let playlists = stmt.query_map([user_id], Self::row_to_playlist)?;
        playlists.collect()
    }

    /// Rename a saved playlist.
    pub fn rename_playlist(&self, id: i64, name: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE playlists SET name = ? WHERE id = ?",
            params![name, id],
        )?;
        Ok(())
    }

    /// Delete a saved playlist.
    pub fn delete_playlist(&self, id: i64) -> Result<()> {
        self.conn.execute("DELETE FROM playlists WHERE id = ?", [id])?;
        Ok(())
    }

    /// Remove one track from a saved playlist by its record id.
    /// Re-serializes the filtered array; records themselves are untouched.
    pub fn remove_track_from_playlist(&self, id: i64, track_id: &str) -> Result<()> {
        let mut playlist = self.get_playlist(id)?;
        playlist.tracks.retain(|track| track.id != track_id);
        let tracks_json = Self::encode_tracks(&playlist.tracks)?;
        self.conn.execute(
            "UPDATE playlists SET tracks = ? WHERE id = ?",
            params![tracks_json, id],
        )?;
        Ok(())
    }

    /// Count playlists saved by a user.
    pub fn count_playlists(&self, user_id: &str) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM playlists WHERE user_id = ?",
            [user_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // --- Settings operations ---

    /// Get a setting value by key. Returns None if the key doesn't exist.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self.conn.prepare("SELECT value FROM settings WHERE key = ?")?;
        let result = stmt.query_row([key], |row| row.get::<_, Option<String>>(0));

        match result {
            Ok(value) => Ok(value),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a setting value (upsert: insert or update if key exists).
    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a setting by key.
    pub fn delete_setting(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM settings WHERE key = ?", [key])?;
        Ok(())
    }
}
