//! Title bar for the document detail page.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::{MdInsertDriveFile, MdInsertLink}, md_navigation_icons::MdRefresh}};

use common::document_identifier::IncomingDocumentId;

const ACTION_BUTTON_STYLE: &str = "
    width: 40px;
    height: 40px;
    cursor: pointer;
    border: 1px solid #000;
    border-radius: 8px;
    background: white;
    color: black;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1px;
    margin: 1px;
";

#[component]
pub fn DocTitleBar(document_id: ReadSignal<IncomingDocumentId>, on_reload: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
                justify-content: space-between;
                height: 54px;
                width: 100%;
                background-color:#F8FCFF;
                flex-shrink: 0;
                flex-grow: 0;
                border: 1px solid rgba(0, 0, 0, 0.3);
                box-sizing: border-box;
            ",
            // DOCUMENT ID
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    padding-left: 12px;
                    font-size: 20px;
                    font-weight: 400;
                ",
                Icon {
                    icon: MdInsertDriveFile,
                    style: "width: 18px; height: 18px;"
                }
                div {
                    style: "color: rgba(0, 0, 0, 0.8); font-style: italic;",
                    "Incoming document"
                }
                div { "/" }
                div { "{document_id}" }
            }
            // SPACER
            div {
                style:"flex-grow: 1;"
            }
            // ACTION BUTTONS
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 6px;
                    align-items: center;
                    justify-content: center;
                    padding-right: 12px;
                ",
                button {
                    style: ACTION_BUTTON_STYLE,
                    class: "warehouse-hover-shadow-background",
                    title: "Copy link",
                    onclick: move |_e| {
                        copy_current_url();
                    },
                    Icon {
                        icon: MdInsertLink,
                        style: "width: 24px; height: 24px;"
                    }
                }
                button {
                    style: ACTION_BUTTON_STYLE,
                    class: "warehouse-hover-shadow-background",
                    title: "Reload",
                    onclick: move |_e| {
                        on_reload.call(());
                    },
                    Icon {
                        icon: MdRefresh,
                        style: "width: 24px; height: 24px;"
                    }
                }
            }
        }
    }
}

fn copy_current_url() {
    let Some(window) = web_sys::window() else {
        tracing::error!("No window available to copy the link from");
        return;
    };
    let url = match window.location().href() {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("Failed to read current location: {:?}", e);
            return;
        }
    };
    let promise = window.navigator().clipboard().write_text(&url);
    spawn(async move {
        let outcome = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("{:?}", e));
        match clipboard_outcome_message(&url, &outcome) {
            Ok(message) => tracing::info!("{}", message),
            Err(message) => tracing::error!("{}", message),
        }
    });
}

/// Log line for a finished clipboard write; `Err` when the browser rejected it.
fn clipboard_outcome_message(url: &str, outcome: &Result<(), String>) -> Result<String, String> {
    match outcome {
        Ok(()) => Ok(format!("Link copied to clipboard: {}", url)),
        Err(reason) => Err(format!("Failed to copy link {} to clipboard: {}", url, reason)),
    }
}
