use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use spamlens_common::config;

mod api_underlying;
mod chart;
mod chart_config;
mod classifier;
mod errors;
mod server_api;
mod services;
mod state;
mod status;

fn main() {
    dioxus_logger::init(log_level()).expect("failed to init logger");
    chart::init_charting();
    dioxus_web::launch::launch_cfg(App, dioxus_web::Config::default());
}

/// 設定からログレベルを決める
fn log_level() -> Level {
    config::get("LOG_LEVEL")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}

#[component]
fn App() -> Element {
    rsx! {
        div { class: "App",
            header { class: "App-header",
                h1 { "Email Spam Classifier" }
                classifier::view {}
                status::view {}
            }
        }
    }
}
