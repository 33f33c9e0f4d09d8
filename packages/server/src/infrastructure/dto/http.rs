//! HTTP response DTOs.

use serde::{Deserialize, Serialize};

/// Wire representation of the statistics record.
///
/// Keys are camelCase on the wire: `{ totalAlbums, totalSongs, totalUsers,
/// totalArtists }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummaryDto {
    pub total_albums: u64,
    pub total_songs: u64,
    pub total_users: u64,
    pub total_artists: u64,
}

/// Error body returned by the centralized error responder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBodyDto {
    pub message: String,
}
