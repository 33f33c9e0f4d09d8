//! UseCase: ライブラリ統計取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetStatsUseCase::execute() メソッド
//! - 統計取得処理（4 つの読み取りの並行発行、StatsSummary の組み立て）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：4 つのカウントが 1 つのレコードに集約される
//! - 読み取りが並行に発行されることを保証（レイテンシは最も遅い読み取りと同等）
//! - 読み取り失敗時にエラーがそのまま伝播することを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：4 つの読み取りが成功し、StatsSummary が返される
//! - 異常系：いずれかの読み取りが失敗
//! - エッジケース：空のカタログ（全て 0）

use std::sync::Arc;

use crate::domain::{CatalogRepository, StatsSummary};

use super::error::GetStatsError;

/// ライブラリ統計取得のユースケース
pub struct GetStatsUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn CatalogRepository>,
}

impl GetStatsUseCase {
    /// 新しい GetStatsUseCase を作成
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// 統計取得を実行
    ///
    /// 4 つの読み取り（Song 数、Album 数、User 数、重複を除いたアーティスト数）を
    /// 並行に発行し、全てが揃ってから StatsSummary を組み立てる。
    ///
    /// # Returns
    ///
    /// * `Ok(StatsSummary)` - 取得成功
    /// * `Err(GetStatsError)` - いずれかの読み取りが失敗（リトライ・部分結果なし）
    pub async fn execute(&self) -> Result<StatsSummary, GetStatsError> {
        let (total_songs, total_albums, total_users, total_artists) = tokio::try_join!(
            self.repository.count_songs(),
            self.repository.count_albums(),
            self.repository.count_users(),
            self.repository.count_distinct_artists(),
        )?;

        Ok(StatsSummary {
            total_songs,
            total_albums,
            total_users,
            total_artists,
        })
    }
}
