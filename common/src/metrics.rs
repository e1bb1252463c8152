use serde::{Deserialize, Serialize};

/// モデル評価指標 (GET /metrics)
///
/// 各値は[0,1]の割合として扱う
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ModelMetrics {
    /// チャート表示順の (ラベル, 値) ペア
    pub fn labeled_values(&self) -> [(&'static str, f64); 4] {
        [
            ("Accuracy", self.accuracy),
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1 Score", self.f1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_values_keeps_chart_order() {
        let metrics = ModelMetrics {
            accuracy: 0.95,
            precision: 0.9,
            recall: 0.88,
            f1: 0.89,
        };
        let labeled = metrics.labeled_values();
        assert_eq!(
            labeled.map(|(label, _)| label),
            ["Accuracy", "Precision", "Recall", "F1 Score"]
        );
        assert_eq!(labeled.map(|(_, value)| value), [0.95, 0.9, 0.88, 0.89]);
    }
}
