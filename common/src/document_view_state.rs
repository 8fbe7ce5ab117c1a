//! View state for the document detail page.
//!
//! Every request is stamped with a [`RequestTicket`]. A response is applied only
//! while its ticket is still the pending one, so a slow response for a previous
//! identifier can never overwrite the current one.

use crate::{document_identifier::IncomingDocumentId, incoming_document::IncomingDocument};


#[derive(Debug, Clone, PartialEq, Default)]
pub enum DocumentViewState {
    #[default]
    Loading,
    Loaded(IncomingDocument),
    Failed(String),
}

impl DocumentViewState {
    pub fn document(&self) -> Option<&IncomingDocument> {
        match self {
            Self::Loaded(document) => Some(document),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentSlot {
    generation: u64,
    pending: Option<RequestTicket>,
    document_id: Option<IncomingDocumentId>,
    state: DocumentViewState,
}

impl DocumentSlot {
    /// Start a request for `document_id`, superseding any request in flight.
    pub fn begin(&mut self, document_id: IncomingDocumentId) -> RequestTicket {
        self.generation += 1;
        let ticket = RequestTicket { generation: self.generation };
        self.pending = Some(ticket);
        self.document_id = Some(document_id);
        self.state = DocumentViewState::Loading;
        ticket
    }

    /// Apply the outcome of a request. Returns `false` when the ticket is stale.
    pub fn settle(&mut self, ticket: RequestTicket, outcome: Result<IncomingDocument, String>) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.state = match outcome {
            Ok(document) => DocumentViewState::Loaded(document),
            Err(reason) => DocumentViewState::Failed(reason),
        };
        true
    }

    pub fn state(&self) -> &DocumentViewState {
        &self.state
    }

    pub fn document_id(&self) -> Option<&IncomingDocumentId> {
        self.document_id.as_ref()
    }
}
