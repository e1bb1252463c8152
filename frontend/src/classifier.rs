use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};

use crate::chart::{ChartLifecycle, ElementSurface};
use crate::services::ClassifierService;
use crate::state::{self, ClassifierState};

/// メトリクスチャートの描画先要素ID
const CHART_SURFACE_ID: &str = "metrics-chart-surface";

/// メール分類ビューのメインコンポーネント
#[component]
pub fn view() -> Element {
    let service = use_signal(|| Arc::new(ClassifierService::new(crate::server_api::get_client())));

    let mut state = use_signal(ClassifierState::new);
    let mut classify_running = use_signal(|| false);
    let mut train_running = use_signal(|| false);
    let mut train_duration = use_signal(|| "".to_string());
    let mut error_message = use_signal(|| None::<String>);

    // チャートリソースはビューごとに1つだけ保持する
    let lifecycle = use_hook(|| {
        Rc::new(RefCell::new(ChartLifecycle::new(ElementSurface::new(
            CHART_SURFACE_ID,
        ))))
    });

    // 初回マウント時に一度だけ可視化画像を取得する。失敗時は画像なしのまま
    use_future(move || async move {
        match service().fetch_visualizations().await {
            Ok(set) => state.with_mut(|s| s.commit_visualizations(set)),
            Err(e) => error!("{}", e),
        }
    });

    // メトリクスが変わったときだけチャートを作り直す
    // （スナップショットが同じならsyncは何もしない）
    {
        let lifecycle = Rc::clone(&lifecycle);
        use_effect(move || {
            let metrics = state.read().metrics;
            if let Err(e) = lifecycle.borrow_mut().sync(metrics.as_ref()) {
                error!("{}", e);
            }
        });
    }

    // ビュー破棄時は生存中のチャートを必ず破棄する
    {
        let lifecycle = Rc::clone(&lifecycle);
        use_drop(move || lifecycle.borrow_mut().teardown());
    }

    let view_state = state::project(&state.read());

    rsx! {
        div { class: "classifier-view",
            div { class: "email-container",
                textarea {
                    class: "form-control",
                    style: "width: 100%;",
                    rows: "8",
                    placeholder: "Paste your email content here",
                    value: "{view_state.email_content}",
                    oninput: move |e| state.with_mut(|s| s.set_email_content(e.value())),
                }
            }
            div { class: "classify-container",
                style: "display: flex; align-items: center; margin-bottom: 10px;",
                button {
                    class: "btn btn-primary",
                    disabled: "{classify_running}",
                    onclick: move |_| {
                        // 実行中は多重リクエストを発行しない
                        if classify_running() {
                            return;
                        }
                        classify_running.set(true);
                        error_message.set(None);

                        spawn(async move {
                            let content = state.read().email_content.clone();
                            match service().classify(&content).await {
                                Ok(label) => {
                                    info!("Email classified as: {}", label);
                                    state.with_mut(|s| s.commit_classification(label));
                                }
                                Err(e) => {
                                    error!("{}", e);
                                    error_message.set(Some(e.to_string()));
                                }
                            }
                            classify_running.set(false);
                        });
                    },
                    if classify_running() { "分類中..." } else { "Classify Email" }
                }
                if let Some(line) = view_state.classification_line {
                    p { class: "result", "{line}" }
                }
            }
            div { class: "train-container",
                style: "display: flex; align-items: center; margin-bottom: 10px;",
                button {
                    class: "btn btn-primary",
                    disabled: "{train_running}",
                    onclick: move |_| {
                        if train_running() {
                            return;
                        }
                        train_running.set(true);
                        error_message.set(None);
                        train_duration.set("".to_string());

                        spawn(async move {
                            let start_time = js_sys::Date::now();
                            match service().train_and_fetch_metrics().await {
                                Ok(metrics) => state.with_mut(|s| s.commit_metrics(metrics)),
                                Err(e) => {
                                    error!("{}", e);
                                    error_message.set(Some(e.to_string()));
                                }
                            }
                            let duration_ms = js_sys::Date::now() - start_time;
                            train_duration.set(format!("{:0.2} seconds", duration_ms / 1000.0));
                            train_running.set(false);
                        });
                    },
                    if train_running() { "再学習中..." } else { "Train Model" }
                }
                span { class: "duration", style: "margin-left: 5px;", "{train_duration}" }
            }

            // エラーメッセージの表示
            if let Some(error) = error_message() {
                div { class: "alert alert-danger", "{error}" }
            }

            // メトリクスチャートの描画先
            if view_state.metric_bars.is_some() {
                div { class: "metrics-section",
                    h3 { "Model Metrics:" }
                    div {
                        id: "{CHART_SURFACE_ID}",
                        class: "chart-container",
                        style: "margin-top: 20px; width: 100%; overflow-x: auto;",
                    }
                }
            }

            if let Some(images) = view_state.images {
                div { class: "visualizations-section",
                    h3 { "Visualizations" }
                    for image in images {
                        img { src: "{image.src}", alt: "{image.alt}" }
                    }
                }
            }
        }
    }
}
