//! Client API calls for incoming document endpoints.

use common::{document_identifier::IncomingDocumentId, incoming_document::IncomingDocument};
use dioxus::logger::tracing;

use crate::config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum DocumentFetchError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode document: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct IncomingDocumentsClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl IncomingDocumentsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    /// The id is interpolated verbatim, without percent-encoding.
    pub fn document_url(&self, document_id: &IncomingDocumentId) -> String {
        format!("{}/api/incoming/documents/{}", self.config.base_url(), document_id)
    }

    pub async fn fetch_document(
        &self,
        document_id: &IncomingDocumentId,
    ) -> Result<IncomingDocument, DocumentFetchError> {
        let url = self.document_url(document_id);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(DocumentFetchError::Request)?;
        let status = response.status();
        let body = response.text().await.map_err(DocumentFetchError::Request)?;
        if !status.is_success() {
            return Err(DocumentFetchError::Status { status: status.as_u16(), body });
        }
        serde_json::from_str::<IncomingDocument>(&body).map_err(DocumentFetchError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_document_url_from_base() {
        let client = IncomingDocumentsClient::new(ApiConfig::new("http://localhost:8080/"));
        assert_eq!(
            client.document_url(&"42".into()),
            "http://localhost:8080/api/incoming/documents/42"
        );
    }

    #[test]
    fn status_error_mentions_code_and_body() {
        let err = DocumentFetchError::Status { status: 404, body: "not found".to_string() };
        assert_eq!(err.to_string(), "server answered 404: not found");
    }
}
