//! Conversion logic between DTOs and domain entities.

use crate::domain::StatsSummary;
use crate::infrastructure::dto::http as dto;

// ========================================
// Domain Entity → DTO
// ========================================

impl From<StatsSummary> for dto::StatsSummaryDto {
    fn from(summary: StatsSummary) -> Self {
        Self {
            total_albums: summary.total_albums,
            total_songs: summary.total_songs,
            total_users: summary.total_users,
            total_artists: summary.total_artists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_stats_summary_to_dto() {
        // テスト項目: ドメインの StatsSummary が DTO に変換される
        // given (前提条件):
        let summary = StatsSummary {
            total_songs: 12,
            total_albums: 3,
            total_users: 7,
            total_artists: 5,
        };

        // when (操作):
        let dto: dto::StatsSummaryDto = summary.into();

        // then (期待する結果):
        assert_eq!(dto.total_songs, 12);
        assert_eq!(dto.total_albums, 3);
        assert_eq!(dto.total_users, 7);
        assert_eq!(dto.total_artists, 5);
    }

    #[test]
    fn test_stats_summary_dto_serializes_camel_case() {
        // テスト項目: DTO が camelCase のキーでシリアライズされる
        // given (前提条件):
        let dto = dto::StatsSummaryDto {
            total_albums: 3,
            total_songs: 12,
            total_users: 7,
            total_artists: 5,
        };

        // when (操作):
        let json = serde_json::to_string(&dto).unwrap();

        // then (期待する結果):
        assert!(json.contains("\"totalAlbums\":3"));
        assert!(json.contains("\"totalSongs\":12"));
        assert!(json.contains("\"totalUsers\":7"));
        assert!(json.contains("\"totalArtists\":5"));
    }
}
