pub mod traits;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 統一されたAPIエラー型
///
/// Network: 接続レベルの失敗、Server: 非2xx応答、Parse: ボディの解釈失敗
#[derive(Debug, Clone, Deserialize, Serialize, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
