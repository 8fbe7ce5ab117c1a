//! Incoming document detail page.

use common::document_identifier::IncomingDocumentId;
use dioxus::prelude::*;

use crate::components::document_view_components::{doc_title_bar::DocTitleBar, document_detail_view::DocumentDetailView};


/// Document detail page
#[component]
pub fn DocumentDetailPage(id: IncomingDocumentId) -> Element {
    let mut reload = use_signal(|| 0_u64);
    let document_id = id.clone();
    rsx! {
        Title { "Warehouse - Document {id}" }
        div {
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                width: 100%;
                overflow: hidden;
            ",
            DocTitleBar {
                document_id: document_id.clone(),
                on_reload: move |_| *reload.write() += 1,
            }
            div {
                style: "width: 100%; height: calc(100% - 54px); flex-grow: 0; flex-shrink: 0; overflow-y: auto;",
                DocumentDetailView { document_id, reload }
            }
        }
    }
}
