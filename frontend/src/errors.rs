/// エラーメッセージの統一管理
use std::fmt::Display;

/// 分類UIのエラー種別
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierUiError {
    // ワークフロー関連
    ClassifyFailed(String),
    TrainFailed(String),
    MetricsFetchFailed(String),
    VisualizationsFetchFailed(String),

    // チャート関連
    ChartGenerationError(String),
    SurfaceNotFound(String),
}

impl Display for ClassifierUiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierUiError::ClassifyFailed(detail) => {
                write!(f, "分類リクエストに失敗しました: {}", detail)
            }
            ClassifierUiError::TrainFailed(detail) => {
                write!(f, "モデルの再学習に失敗しました: {}", detail)
            }
            ClassifierUiError::MetricsFetchFailed(detail) => {
                write!(f, "メトリクス取得エラー: {}", detail)
            }
            ClassifierUiError::VisualizationsFetchFailed(detail) => {
                write!(f, "可視化画像の取得に失敗しました: {}", detail)
            }
            ClassifierUiError::ChartGenerationError(detail) => {
                write!(f, "チャート生成エラー: {}", detail)
            }
            ClassifierUiError::SurfaceNotFound(id) => {
                write!(f, "描画ターゲットが見つかりません: {}", id)
            }
        }
    }
}

/// エラーから文字列への簡易変換
impl From<ClassifierUiError> for String {
    fn from(error: ClassifierUiError) -> Self {
        error.to_string()
    }
}
