//! HTTP clients for the warehouse REST API.

pub mod incoming_documents_api;
