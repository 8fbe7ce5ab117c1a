use dioxus::prelude::*;

use crate::api::incoming_documents_api::IncomingDocumentsClient;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::config::ApiConfig;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_build_env();
        dioxus::logger::tracing::info!("Incoming documents API at {}", config.base_url());
        IncomingDocumentsClient::new(config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
