use spamlens_common::metrics::ModelMetrics;
use spamlens_common::visualizations::{self, VisualizationSet};

/// 画面状態を一元管理するストア
///
/// 各フィールドは成功レスポンスのコミットでのみ更新され、
/// 失敗した呼び出しは直前の値をそのまま残す
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifierState {
    pub email_content: String,
    pub classification: Option<String>,
    pub metrics: Option<ModelMetrics>,
    pub visualizations: Option<VisualizationSet>,
}

impl ClassifierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力テキストを丸ごと置き換える
    pub fn set_email_content(&mut self, content: String) {
        self.email_content = content;
    }

    /// 分類結果をコミットする
    pub fn commit_classification(&mut self, label: String) {
        self.classification = Some(label);
    }

    /// 評価指標をコミットする
    pub fn commit_metrics(&mut self, metrics: ModelMetrics) {
        self.metrics = Some(metrics);
    }

    /// 可視化画像一式をコミットする
    pub fn commit_visualizations(&mut self, set: VisualizationSet) {
        self.visualizations = Some(set);
    }
}

/// 状態から組み立てた表示内容。描画はこの結果のみを参照する
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub email_content: String,
    pub classification_line: Option<String>,
    pub metric_bars: Option<[(&'static str, f64); 4]>,
    pub images: Option<[ImageView; 3]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub alt: &'static str,
    pub src: String,
}

/// 状態から表示内容への射影
pub fn project(state: &ClassifierState) -> ViewState {
    ViewState {
        email_content: state.email_content.clone(),
        classification_line: state
            .classification
            .as_ref()
            .map(|label| format!("Classification: {}", label)),
        metric_bars: state.metrics.as_ref().map(|m| m.labeled_values()),
        images: state.visualizations.as_ref().map(|set| {
            set.labeled_images().map(|(alt, payload)| ImageView {
                alt,
                src: visualizations::data_uri(payload),
            })
        }),
    }
}
