//! Common library exports shared between the frontend and its tests.

extern crate serde;


pub mod document_identifier;
pub mod incoming_document;
pub mod document_view_state;
