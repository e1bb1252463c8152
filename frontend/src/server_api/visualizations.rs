use crate::api_underlying::Underlying;
use anyhow::Result;
use spamlens_common::visualizations::VisualizationSet;
use std::sync::Arc;

pub struct VisualizationsApi {
    pub underlying: Arc<Underlying>,
}

impl VisualizationsApi {
    /// 診断画像一式を取得する (GET /visualizations)
    pub async fn fetch(&self) -> Result<VisualizationSet> {
        self.underlying.get("visualizations").await
    }
}
