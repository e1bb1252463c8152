use spamlens_common::config;

/// チャート描画の設定値
#[derive(Debug, Clone)]
pub struct ChartSettings {
    /// チャートサイズ幅（デフォルト: 600）
    pub chart_width: u32,
    /// チャートサイズ高さ（デフォルト: 300）
    pub chart_height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            chart_width: 600,
            chart_height: 300,
        }
    }
}

impl ChartSettings {
    /// 設定から値を読み込む
    pub fn from_env() -> Self {
        let default_settings = Self::default();

        let chart_width = config::get("CHART_WIDTH")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(default_settings.chart_width);

        let chart_height = config::get("CHART_HEIGHT")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(default_settings.chart_height);

        Self {
            chart_width,
            chart_height,
        }
    }

    /// チャートサイズをタプルで取得
    pub fn chart_size(&self) -> (u32, u32) {
        (self.chart_width, self.chart_height)
    }
}

/// グローバル設定インスタンス
static SETTINGS: std::sync::OnceLock<ChartSettings> = std::sync::OnceLock::new();

/// グローバル設定を取得
pub fn get_config() -> &'static ChartSettings {
    SETTINGS.get_or_init(ChartSettings::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chart_size_matches_config_defaults() {
        let settings = ChartSettings::from_env();
        assert_eq!(settings.chart_size(), (600, 300));
    }
}
