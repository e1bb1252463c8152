use dioxus::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn view() -> Element {
    let client = use_signal(crate::server_api::get_client);

    let mut status_result = use_signal(|| "None".to_string());
    let on_check = move |_| {
        spawn_local(async move {
            let text = client().status.welcome().await;
            status_result.set(text);
        });
    };

    rsx! {
        div { class: "status-view",
            div { class: "status-container",
                style: "display: flex; align-items: center;",
                button {
                    onclick: on_check,
                    "Server Status"
                }
                p { class: "result", ": {status_result}" }
            }
        }
    }
}
