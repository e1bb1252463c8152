use serde::{Deserialize, Serialize};

/// 分類リクエスト (POST /classify)
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub email_content: String,
}

/// 分類レスポンス
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub classification: String,
}

/// 再学習の完了応答 (POST /train)
///
/// ボディはサーバー実装依存。メッセージがあれば保持する
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrainAck {
    #[serde(default)]
    pub message: Option<String>,
}
