use crate::api_underlying::Underlying;
use anyhow::Result;
use spamlens_common::classifier::{ClassifyRequest, ClassifyResponse, TrainAck};
use std::sync::Arc;

pub struct ClassifierApi {
    pub underlying: Arc<Underlying>,
}

impl ClassifierApi {
    /// メール本文を分類する (POST /classify)
    pub async fn classify(&self, email_content: &str) -> Result<ClassifyResponse> {
        let request = ClassifyRequest {
            email_content: email_content.to_string(),
        };
        self.underlying.post("classify", &request).await
    }

    /// モデルの再学習を指示する (POST /train)
    pub async fn train(&self) -> Result<TrainAck> {
        self.underlying.post_empty("train").await
    }
}
