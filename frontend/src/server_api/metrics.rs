use crate::api_underlying::Underlying;
use anyhow::Result;
use spamlens_common::metrics::ModelMetrics;
use std::sync::Arc;

pub struct MetricsApi {
    pub underlying: Arc<Underlying>,
}

impl MetricsApi {
    /// 最新の評価指標を取得する (GET /metrics)
    pub async fn fetch(&self) -> Result<ModelMetrics> {
        self.underlying.get("metrics").await
    }
}
