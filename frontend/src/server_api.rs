mod classifier;
mod metrics;
mod status;
mod visualizations;

use crate::api_underlying::Underlying;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use spamlens_common::api::ApiError;
use spamlens_common::api::traits::ClassifierGateway;
use spamlens_common::config;
use spamlens_common::metrics::ModelMetrics;
use spamlens_common::visualizations::VisualizationSet;
use std::sync::Arc;

fn server_base_url() -> String {
    config::get("SERVER_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

pub struct ApiClient {
    pub classifier: classifier::ClassifierApi,
    pub metrics: metrics::MetricsApi,
    pub visualizations: visualizations::VisualizationsApi,
    pub status: status::StatusApi,
}

static API_CLIENT: Lazy<Arc<ApiClient>> = Lazy::new(|| Arc::new(new_client(server_base_url())));

pub fn get_client() -> Arc<ApiClient> {
    API_CLIENT.clone()
}

fn new_client(base_url: String) -> ApiClient {
    let underlying = Underlying::new_shared(base_url);
    ApiClient {
        classifier: classifier::ClassifierApi {
            underlying: Arc::clone(&underlying),
        },
        metrics: metrics::MetricsApi {
            underlying: Arc::clone(&underlying),
        },
        visualizations: visualizations::VisualizationsApi {
            underlying: Arc::clone(&underlying),
        },
        status: status::StatusApi {
            underlying: Arc::clone(&underlying),
        },
    }
}

/// 下層のanyhowエラーをApiErrorへ正規化する
fn to_api_error(error: anyhow::Error) -> ApiError {
    match error.downcast_ref::<reqwest::Error>() {
        Some(e) if e.is_status() => ApiError::Server(e.to_string()),
        Some(e) if e.is_decode() => ApiError::Parse(e.to_string()),
        _ => ApiError::Network(error.to_string()),
    }
}

#[async_trait(?Send)]
impl ClassifierGateway for ApiClient {
    async fn classify(&self, email_content: &str) -> Result<String, ApiError> {
        let response = self
            .classifier
            .classify(email_content)
            .await
            .map_err(to_api_error)?;
        Ok(response.classification)
    }

    async fn train(&self) -> Result<(), ApiError> {
        self.classifier.train().await.map_err(to_api_error)?;
        Ok(())
    }

    async fn fetch_metrics(&self) -> Result<ModelMetrics, ApiError> {
        self.metrics.fetch().await.map_err(to_api_error)
    }

    async fn fetch_visualizations(&self) -> Result<VisualizationSet, ApiError> {
        self.visualizations.fetch().await.map_err(to_api_error)
    }
}
