use crate::api_underlying::Underlying;
use std::sync::Arc;

pub struct StatusApi {
    pub underlying: Arc<Underlying>,
}

impl StatusApi {
    /// サーバーのルートからウェルカムメッセージを取得する
    pub async fn welcome(&self) -> String {
        self.underlying.get_text("").await
    }
}
