//! Fetches one incoming document and renders it.

use common::{
    document_identifier::IncomingDocumentId,
    document_view_state::{DocumentSlot, DocumentViewState},
};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::incoming_documents_api::IncomingDocumentsClient;
use crate::components::document_view_components::line_items_table::DocumentContent;
use crate::components::error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay};
use crate::components::loading_indicator::LoadingIndicator;


#[component]
pub fn DocumentDetailView(document_id: ReadSignal<IncomingDocumentId>, reload: ReadSignal<u64>) -> Element {
    let client = use_context::<IncomingDocumentsClient>();
    let slot = use_signal(DocumentSlot::default);

    {
        let client = client.clone();
        use_effect(move || {
            let document_id = document_id();
            let _reload = reload();
            start_fetch(slot, client.clone(), document_id);
        });
    }

    let state = slot.read().state().clone();
    rsx! {
        ComponentErrorBoundary {
            DocumentStateView {
                state,
                on_retry: move |_| {
                    let retry_id = slot.read().document_id().cloned();
                    if let Some(retry_id) = retry_id {
                        start_fetch(slot, client.clone(), retry_id);
                    }
                },
            }
        }
    }
}

/// One branch per view state: placeholder, document, or error panel with a retry button.
#[component]
pub fn DocumentStateView(state: ReadSignal<DocumentViewState>, on_retry: EventHandler<()>) -> Element {
    match state() {
        DocumentViewState::Loading => rsx! { LoadingIndicator {} },
        DocumentViewState::Loaded(document) => rsx! { DocumentContent { document } },
        DocumentViewState::Failed(reason) => rsx! {
            ComponentErrorDisplay {
                title: "Failed to load document".to_string(),
                error_txt: reason,
                button {
                    style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 8px; border-radius: 5px; margin: 15px;",
                    onclick: move |_| on_retry.call(()),
                    "Try Again"
                }
            }
        },
    }
}

/// Issue a request for `document_id` and apply its outcome unless a newer request superseded it.
///
/// The task is spawned in the view's scope, so it is dropped together with the view.
fn start_fetch(mut slot: Signal<DocumentSlot>, client: IncomingDocumentsClient, document_id: IncomingDocumentId) {
    let ticket = slot.write().begin(document_id.clone());
    spawn(async move {
        let outcome = client.fetch_document(&document_id).await.map_err(|e| {
            tracing::error!("Failed to load document {}: {}", document_id, e);
            e.to_string()
        });
        if !slot.write().settle(ticket, outcome) {
            tracing::debug!("Discarded stale response for document {} (request {})", document_id, ticket.generation());
        }
    });
}
