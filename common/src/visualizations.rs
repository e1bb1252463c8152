use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// 診断画像一式 (GET /visualizations)
///
/// 各フィールドはbase64エンコードされたPNG
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VisualizationSet {
    pub data_distribution: String,
    pub model_performance: String,
    pub feature_importance: String,
}

impl VisualizationSet {
    /// 表示順の (altテキスト, base64ペイロード) ペア
    pub fn labeled_images(&self) -> [(&'static str, &str); 3] {
        [
            ("Data Distribution", self.data_distribution.as_str()),
            ("Model Performance", self.model_performance.as_str()),
            ("Feature Importance", self.feature_importance.as_str()),
        ]
    }
}

/// base64ペイロードをデコードしてPNGバイト列を取り出す
pub fn decode_image(payload: &str) -> crate::Result<Vec<u8>> {
    Ok(STANDARD.decode(payload)?)
}

/// img要素のsrcに渡せるdata URIを組み立てる
pub fn data_uri(payload: &str) -> String {
    format!("data:image/png;base64,{}", payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1ピクセルのPNG
    const TINY_PNG: &str =
        "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[test]
    fn labeled_images_keeps_display_order() {
        let set = VisualizationSet {
            data_distribution: "aaa".to_string(),
            model_performance: "bbb".to_string(),
            feature_importance: "ccc".to_string(),
        };
        let labeled = set.labeled_images();
        assert_eq!(
            labeled.map(|(alt, _)| alt),
            ["Data Distribution", "Model Performance", "Feature Importance"]
        );
        assert_eq!(labeled.map(|(_, payload)| payload), ["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn decode_image_accepts_valid_base64() {
        let bytes = decode_image(TINY_PNG).unwrap();
        // PNGシグネチャ
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn decode_image_rejects_invalid_base64() {
        assert!(decode_image("not valid base64!!!").is_err());
    }

    #[test]
    fn data_uri_wraps_payload() {
        assert_eq!(data_uri("abc"), "data:image/png;base64,abc");
    }
}
