use std::sync::Arc;

use spamlens_common::api::traits::ClassifierGateway;
use spamlens_common::metrics::ModelMetrics;
use spamlens_common::visualizations::{self, VisualizationSet};

use crate::errors::ClassifierUiError;

/// 分類画面のワークフローを担当するサービス
///
/// リモート操作はすべてゲートウェイ越しに行い、
/// 呼び出し側は成功した結果だけをストアへコミットする
pub struct ClassifierService {
    gateway: Arc<dyn ClassifierGateway>,
}

impl ClassifierService {
    /// 新しいサービスインスタンスを作成
    pub fn new(gateway: Arc<dyn ClassifierGateway>) -> Self {
        Self { gateway }
    }

    /// 入力テキストを分類してラベルを返す
    pub async fn classify(&self, email_content: &str) -> Result<String, ClassifierUiError> {
        self.gateway
            .classify(email_content)
            .await
            .map_err(|e| ClassifierUiError::ClassifyFailed(e.to_string()))
    }

    /// 再学習を指示し、完了後に最新メトリクスを取得する
    ///
    /// 2つの呼び出しは逐次実行で、trainが失敗した場合は
    /// メトリクス取得を行わない
    pub async fn train_and_fetch_metrics(&self) -> Result<ModelMetrics, ClassifierUiError> {
        self.gateway
            .train()
            .await
            .map_err(|e| ClassifierUiError::TrainFailed(e.to_string()))?;
        self.gateway
            .fetch_metrics()
            .await
            .map_err(|e| ClassifierUiError::MetricsFetchFailed(e.to_string()))
    }

    /// 診断画像一式を取得する。初回マウント時に一度だけ呼ばれる
    ///
    /// デコードできないペイロードは呼び出し失敗として扱う
    pub async fn fetch_visualizations(&self) -> Result<VisualizationSet, ClassifierUiError> {
        let set = self
            .gateway
            .fetch_visualizations()
            .await
            .map_err(|e| ClassifierUiError::VisualizationsFetchFailed(e.to_string()))?;

        for (alt, payload) in set.labeled_images() {
            visualizations::decode_image(payload).map_err(|e| {
                ClassifierUiError::VisualizationsFetchFailed(format!("{}: {}", alt, e))
            })?;
        }

        Ok(set)
    }
}

#[cfg(test)]
mod tests;
