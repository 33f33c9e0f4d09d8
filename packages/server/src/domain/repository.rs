//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::RepositoryError;

/// Catalog Repository trait
///
/// ドメイン層が必要とするドキュメントストアへのインターフェース。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
///
/// ## 依存性の逆転（DIP）
///
/// - ドメイン層が必要とするインターフェースをドメイン層自身が定義
/// - Infrastructure 層がドメイン層のインターフェースに依存
/// - ドメイン層は Infrastructure 層に依存しない
///
/// 4 つの読み取りは互いに独立しており、UseCase 層が並行に発行します。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Song ドキュメント数を取得
    async fn count_songs(&self) -> Result<u64, RepositoryError>;

    /// Album ドキュメント数を取得
    async fn count_albums(&self) -> Result<u64, RepositoryError>;

    /// User ドキュメント数を取得
    async fn count_users(&self) -> Result<u64, RepositoryError>;

    /// Song と Album を結合し、artist フィールドでグループ化した
    /// グループ数（= 重複を除いたアーティスト数）を取得
    async fn count_distinct_artists(&self) -> Result<u64, RepositoryError>;
}
