//! Catalog entities and the statistics record.

use serde::{Deserialize, Serialize};

/// A song document in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Document identifier (assigned by the external store)
    pub id: String,
    /// Song title
    pub title: String,
    /// Artist identifier this song belongs to
    pub artist: String,
}

/// An album document in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Document identifier (assigned by the external store)
    pub id: String,
    /// Album title
    pub title: String,
    /// Artist identifier this album belongs to
    pub artist: String,
}

/// A registered user document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Document identifier (assigned by the external store)
    pub id: String,
    /// Display name
    pub name: String,
}

/// The three catalog collections held together.
///
/// The in-memory repository stores one of these; a seeded catalog can be
/// loaded from JSON at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub songs: Vec<Song>,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

/// Aggregate statistics computed per request, never persisted.
///
/// `total_artists` counts distinct artist identifiers across the union of
/// the song and album collections, so `total_artists <= total_songs +
/// total_albums` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_songs: u64,
    pub total_albums: u64,
    pub total_users: u64,
    pub total_artists: u64,
}
