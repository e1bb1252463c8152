pub mod plots;

use std::sync::OnceLock;

use plotters::style::RGBColor;
use spamlens_common::metrics::ModelMetrics;

use crate::errors::ClassifierUiError;

/// チャート配色の定義
#[derive(Debug, Clone)]
pub struct Palette {
    /// 棒の色
    pub bar: RGBColor,
    /// 棒の不透明度
    pub bar_opacity: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bar: RGBColor(75, 192, 192),
            bar_opacity: 0.6,
        }
    }
}

static PALETTE: OnceLock<Palette> = OnceLock::new();

/// チャート基盤の初期化。起動時に一度呼ぶ。二重呼び出しは何もしない
pub fn init_charting() {
    let _ = PALETTE.set(Palette::default());
}

pub(crate) fn palette() -> &'static Palette {
    PALETTE.get_or_init(Palette::default)
}

/// チャートの描画先
///
/// バインド、描画反映、破棄の3操作のみを要求する
pub trait DrawingSurface {
    /// 描画先を確保する。見つからなければエラー
    fn bind(&mut self) -> Result<(), ClassifierUiError>;

    /// 生成済みのSVGを描画先へ反映する
    fn render(&mut self, svg: &str) -> Result<(), ClassifierUiError>;

    /// 描画内容を破棄して描画先を解放する
    fn destroy(&mut self);
}

/// 生成済みチャートのハンドル
///
/// 1つのメトリクススナップショットに対応し、シリアライズされない
#[derive(Debug, Clone, PartialEq)]
pub struct ChartResource {
    snapshot: ModelMetrics,
}

/// チャートの生成と破棄を一元管理する
///
/// 同時に生存するChartResourceは描画先ごとに常に高々1つ。
/// 作り直しは必ず「破棄してから生成」の順で行う
pub struct ChartLifecycle<S: DrawingSurface> {
    surface: S,
    live: Option<ChartResource>,
}

impl<S: DrawingSurface> ChartLifecycle<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: None,
        }
    }

    /// メトリクスの変化に追従する
    ///
    /// 生存中のチャートと同じスナップショットなら何もしない。
    /// 変わっていれば既存チャートを破棄してから作り直す
    pub fn sync(&mut self, metrics: Option<&ModelMetrics>) -> Result<(), ClassifierUiError> {
        match metrics {
            None => {
                self.teardown();
                Ok(())
            }
            Some(m) => {
                if self.live.as_ref().map(|r| &r.snapshot) == Some(m) {
                    return Ok(());
                }
                self.rebuild(*m)
            }
        }
    }

    fn rebuild(&mut self, metrics: ModelMetrics) -> Result<(), ClassifierUiError> {
        self.teardown();

        let options = plots::BarChartOptions {
            image_size: crate::chart_config::get_config().chart_size(),
            title: Some("Model Metrics".to_string()),
            ..Default::default()
        };
        let svg = plots::plot_metrics_to_svg_with_options(&metrics, options)
            .map_err(|e| ClassifierUiError::ChartGenerationError(e.to_string()))?;

        self.surface.bind()?;
        if let Err(e) = self.surface.render(&svg) {
            // 中途半端な描画を残さない
            self.surface.destroy();
            return Err(e);
        }
        self.live = Some(ChartResource { snapshot: metrics });
        Ok(())
    }

    /// 生存中のチャートを破棄する。ビュー破棄時にも呼ばれる
    pub fn teardown(&mut self) {
        if self.live.take().is_some() {
            self.surface.destroy();
        }
    }

    #[allow(dead_code)]
    pub fn is_bound(&self) -> bool {
        self.live.is_some()
    }

    #[cfg(test)]
    fn surface(&self) -> &S {
        &self.surface
    }
}

/// DOM要素を描画先とするサーフェス
pub struct ElementSurface {
    element_id: String,
    element: Option<web_sys::Element>,
}

impl ElementSurface {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            element: None,
        }
    }
}

impl DrawingSurface for ElementSurface {
    fn bind(&mut self) -> Result<(), ClassifierUiError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ClassifierUiError::SurfaceNotFound("document".to_string()))?;
        let element = document
            .get_element_by_id(&self.element_id)
            .ok_or_else(|| ClassifierUiError::SurfaceNotFound(self.element_id.clone()))?;
        self.element = Some(element);
        Ok(())
    }

    fn render(&mut self, svg: &str) -> Result<(), ClassifierUiError> {
        let element = self
            .element
            .as_ref()
            .ok_or_else(|| ClassifierUiError::SurfaceNotFound(self.element_id.clone()))?;
        element.set_inner_html(svg);
        Ok(())
    }

    fn destroy(&mut self) {
        if let Some(element) = self.element.take() {
            element.set_inner_html("");
        }
    }
}
