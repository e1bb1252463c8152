use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use spamlens_common::metrics::ModelMetrics;

/// 棒グラフのプロットオプション
#[derive(Debug, Clone)]
pub struct BarChartOptions {
    /// 画像サイズ
    pub image_size: (u32, u32),
    /// タイトル
    pub title: Option<String>,
    /// Y軸ラベル
    pub y_label: Option<String>,
    /// 棒の色
    pub bar_color: RGBColor,
    /// 棒の不透明度
    pub bar_opacity: f64,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        let palette = crate::chart::palette();
        Self {
            image_size: (600, 300),
            title: None,
            y_label: None,
            bar_color: palette.bar,
            bar_opacity: palette.bar_opacity,
        }
    }
}

/// モデルメトリクスを棒グラフとしてSVG文字列に描画する
pub fn plot_metrics_to_svg_with_options(
    metrics: &ModelMetrics,
    options: BarChartOptions,
) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, options.image_size).into_drawing_area();
        draw_metric_bars(metrics, root, &options)?;
    }
    Ok(buffer)
}

/// 共通の描画処理
fn draw_metric_bars<DB: DrawingBackend>(
    metrics: &ModelMetrics,
    root: DrawingArea<DB, Shift>,
    options: &BarChartOptions,
) -> Result<()> {
    // 背景色設定
    root.fill(&WHITE)
        .map_err(|e| anyhow::anyhow!("背景の描画に失敗しました: {}", e))?;

    let labeled = metrics.labeled_values();
    let bar_count = labeled.len() as u32;

    // ChartBuilderの作成
    let mut builder_base = ChartBuilder::on(&root);
    let builder_margin = builder_base.margin(10);
    let builder_x_label = builder_margin.x_label_area_size(40);
    let builder_xy_label = builder_x_label.y_label_area_size(60);

    // タイトルの設定（オプショナル）
    let builder_with_title = if let Some(title) = &options.title {
        builder_xy_label.caption(title, ("sans-serif", 30).into_font())
    } else {
        builder_xy_label.caption("Model Metrics", ("sans-serif", 30).into_font())
    };

    // チャートの作成。各値は[0,1]の割合なのでY軸は固定
    let mut chart = builder_with_title
        .build_cartesian_2d((0u32..bar_count).into_segmented(), 0.0..1.0f64)
        .map_err(|e| anyhow::anyhow!("チャートの構築に失敗しました: {}", e))?;

    // 軸の設定
    let default_y_label = "Score".to_string();
    let y_label = options.y_label.as_ref().unwrap_or(&default_y_label);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(y_label)
        .y_label_formatter(&|value: &f64| format!("{:.2}", value))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => labeled
                .get(*i as usize)
                .map(|(label, _)| label.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| anyhow::anyhow!("軸の描画に失敗しました: {}", e))?;

    // データのプロット
    let bar_style = options.bar_color.mix(options.bar_opacity).filled();
    chart
        .draw_series(labeled.iter().enumerate().map(|(i, (_, value))| {
            let x0 = SegmentValue::Exact(i as u32);
            let x1 = SegmentValue::Exact(i as u32 + 1);
            let mut bar = Rectangle::new([(x0, 0.0), (x1, *value)], bar_style);
            bar.set_margin(0, 0, 12, 12);
            bar
        }))
        .map_err(|e| anyhow::anyhow!("データのプロットに失敗しました: {}", e))?
        .label("Model Metrics")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], bar_style));

    // 凡例の描画
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow::anyhow!("凡例の描画に失敗しました: {}", e))?;

    // ドローイングエリアの最終処理
    root.present()
        .map_err(|e| anyhow::anyhow!("画像の完成に失敗しました: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> ModelMetrics {
        ModelMetrics {
            accuracy: 0.95,
            precision: 0.9,
            recall: 0.88,
            f1: 0.89,
        }
    }

    #[test]
    fn produces_svg_with_title_and_labels() {
        let options = BarChartOptions {
            title: Some("Model Metrics".to_string()),
            ..Default::default()
        };
        let svg = plot_metrics_to_svg_with_options(&sample_metrics(), options).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Model Metrics"));
        for label in ["Accuracy", "Precision", "Recall", "F1 Score"] {
            assert!(svg.contains(label), "missing label: {}", label);
        }
    }

    #[test]
    fn respects_requested_image_size() {
        let options = BarChartOptions {
            image_size: (320, 240),
            ..Default::default()
        };
        let svg = plot_metrics_to_svg_with_options(&sample_metrics(), options).unwrap();
        assert!(svg.contains("width=\"320\""));
        assert!(svg.contains("height=\"240\""));
    }
}
