//! Components for the incoming document detail page.

pub mod doc_title_bar;
pub mod document_detail_view;
pub mod line_items_table;
