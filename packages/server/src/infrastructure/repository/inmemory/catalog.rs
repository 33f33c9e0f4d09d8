//! InMemory Catalog Repository 実装
//!
//! ドメイン層が定義する CatalogRepository trait の具体的な実装。
//! Catalog 構造体をインメモリ DB として使用します。
//!
//! ## 集計パイプライン
//!
//! `count_distinct_artists` は外部ドキュメントストアの集計パイプライン
//! （union → group by artist → count groups）に相当する処理を
//! インメモリで実行します：
//!
//! ```text
//! songs ∪ albums → HashSet<artist> → len()
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Catalog, CatalogRepository, RepositoryError};

/// インメモリ Catalog Repository 実装
///
/// Catalog を保持し、ドメイン層の CatalogRepository trait を実装します（依存性の逆転）。
pub struct InMemoryCatalogRepository {
    /// Catalog（songs / albums / users の 3 コレクション）
    catalog: Arc<Mutex<Catalog>>,
}

impl InMemoryCatalogRepository {
    /// 新しい InMemoryCatalogRepository を作成
    pub fn new(catalog: Arc<Mutex<Catalog>>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn count_songs(&self) -> Result<u64, RepositoryError> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.songs.len() as u64)
    }

    async fn count_albums(&self) -> Result<u64, RepositoryError> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.albums.len() as u64)
    }

    async fn count_users(&self) -> Result<u64, RepositoryError> {
        let catalog = self.catalog.lock().await;
        Ok(catalog.users.len() as u64)
    }

    async fn count_distinct_artists(&self) -> Result<u64, RepositoryError> {
        let catalog = self.catalog.lock().await;
        let artists: HashSet<&str> = catalog
            .songs
            .iter()
            .map(|song| song.artist.as_str())
            .chain(catalog.albums.iter().map(|album| album.artist.as_str()))
            .collect();
        Ok(artists.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Album, Song, UserRecord};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryCatalogRepository の 4 つの読み取り操作
    // - アーティスト集計（union → group → count）の重複排除
    // - 空のカタログのエッジケース
    //
    // 【なぜこのテストが必要か】
    // - Repository は UseCase から呼ばれるデータアクセス層の中核
    // - total_artists <= total_songs + total_albums の不変条件を保証する必要がある
    // - UseCase 層が Repository に依存できるよう、信頼性を担保する
    //
    // 【どのようなシナリオをテストするか】
    // 1. 各コレクションのカウント
    // 2. Song と Album にまたがる重複アーティストの排除
    // 3. 空のカタログ（アーティスト数 0）
    // ========================================

    fn song(id: &str, artist: &str) -> Song {
        Song {
            id: id.to_string(),
            title: format!("song-{}", id),
            artist: artist.to_string(),
        }
    }

    fn album(id: &str, artist: &str) -> Album {
        Album {
            id: id.to_string(),
            title: format!("album-{}", id),
            artist: artist.to_string(),
        }
    }

    fn create_test_repository(catalog: Catalog) -> InMemoryCatalogRepository {
        InMemoryCatalogRepository::new(Arc::new(Mutex::new(catalog)))
    }

    #[tokio::test]
    async fn test_count_collections() {
        // テスト項目: 各コレクションのドキュメント数を正しくカウントできる
        // given (前提条件):
        let catalog = Catalog {
            songs: vec![song("s1", "a"), song("s2", "b")],
            albums: vec![album("al1", "a")],
            users: vec![
                UserRecord {
                    id: "u1".to_string(),
                    name: "alice".to_string(),
                },
                UserRecord {
                    id: "u2".to_string(),
                    name: "bob".to_string(),
                },
                UserRecord {
                    id: "u3".to_string(),
                    name: "charlie".to_string(),
                },
            ],
        };
        let repo = create_test_repository(catalog);

        // when (操作):
        let songs = repo.count_songs().await.unwrap();
        let albums = repo.count_albums().await.unwrap();
        let users = repo.count_users().await.unwrap();

        // then (期待する結果):
        assert_eq!(songs, 2);
        assert_eq!(albums, 1);
        assert_eq!(users, 3);
    }

    #[tokio::test]
    async fn test_count_distinct_artists_collapses_duplicates() {
        // テスト項目: Song と Album にまたがる同一アーティストが 1 つのグループに集約される
        // given (前提条件):
        let catalog = Catalog {
            songs: vec![song("s1", "a"), song("s2", "a"), song("s3", "b")],
            albums: vec![album("al1", "b"), album("al2", "c")],
            users: vec![],
        };
        let repo = create_test_repository(catalog);

        // when (操作):
        let artists = repo.count_distinct_artists().await.unwrap();

        // then (期待する結果): a, b, c の 3 グループ
        assert_eq!(artists, 3);
    }

    #[tokio::test]
    async fn test_count_distinct_artists_empty_catalog() {
        // テスト項目: 両コレクションが空の場合、アーティスト数は 0
        // given (前提条件):
        let repo = create_test_repository(Catalog::default());

        // when (操作):
        let artists = repo.count_distinct_artists().await.unwrap();

        // then (期待する結果):
        assert_eq!(artists, 0);
    }

    #[tokio::test]
    async fn test_distinct_artists_bounded_by_documents() {
        // テスト項目: total_artists <= total_songs + total_albums が常に成り立つ
        // given (前提条件):
        let catalog = Catalog {
            songs: vec![song("s1", "a"), song("s2", "b"), song("s3", "c")],
            albums: vec![album("al1", "c"), album("al2", "d")],
            users: vec![],
        };
        let repo = create_test_repository(catalog);

        // when (操作):
        let songs = repo.count_songs().await.unwrap();
        let albums = repo.count_albums().await.unwrap();
        let artists = repo.count_distinct_artists().await.unwrap();

        // then (期待する結果):
        assert!(artists <= songs + albums);
        assert_eq!(artists, 4);
    }
}
