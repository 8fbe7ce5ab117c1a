use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::document_identifier::IncomingDocumentId;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Warehouse - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            OpenDocumentCard {}
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                color: #0F172A;
                font-size: 40px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            "Incoming documents"
        }
    }
}

#[component]
fn OpenDocumentCard() -> Element {
    rsx! {
        div {
            id: "x-card-open-document",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "font-size: 26px; font-weight: 500;",
                "Open a document"
            }
            div {
                style: "font-size: 16px; color: rgba(255,255,255,0.9);",
                "*Type the document number below and hit Enter."
            }
            DocumentIdInput {}
        }
    }
}

#[component]
fn DocumentIdInput() -> Element {
    let nav = navigator();
    let mut document_id = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                box-sizing: border-box;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Document id",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *document_id.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let id = IncomingDocumentId::new(document_id.read().trim());
                        if !id.is_empty() {
                            nav.push(Route::document_detail(id));
                        }
                    }
                },
            }
        }
    }
}
