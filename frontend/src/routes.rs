use common::document_identifier::IncomingDocumentId;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::home_page::HomePage;
use crate::pages::document_detail_page::DocumentDetailPage;
use crate::pages::not_found_page::PageNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/documents/:id")]
    DocumentDetailPage { id: IncomingDocumentId },

    #[end_layout]


    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },

}

impl Route {
    pub fn document_detail(id: impl Into<IncomingDocumentId>) -> Self {
        Self::DocumentDetailPage { id: id.into() }
    }
}
