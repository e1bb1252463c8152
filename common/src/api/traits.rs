use crate::api::ApiError;
use crate::metrics::ModelMetrics;
use crate::visualizations::VisualizationSet;
use async_trait::async_trait;

/// 分類サービスへのゲートウェイインターフェース
///
/// ワークフローはこのトレイト越しにのみリモート操作を行う。
/// WASMの単一スレッド実行環境で使うため`?Send`
#[async_trait(?Send)]
pub trait ClassifierGateway {
    /// メール本文を分類してラベル文字列を返す
    async fn classify(&self, email_content: &str) -> Result<String, ApiError>;

    /// モデルの再学習を指示する。完了応答にメトリクスは含まれない
    async fn train(&self) -> Result<(), ApiError>;

    /// 最新の評価指標を取得する。少なくとも一度trainが成功した後でのみ意味を持つ
    async fn fetch_metrics(&self) -> Result<ModelMetrics, ApiError>;

    /// 診断画像一式を取得する。classify/trainとは独立
    async fn fetch_visualizations(&self) -> Result<VisualizationSet, ApiError>;
}
