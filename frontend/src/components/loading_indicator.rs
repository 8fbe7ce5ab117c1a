use dioxus::prelude::*;

/// Placeholder shown while a document request is in flight.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        p {
            style: "color:black; font-size: 22px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px; width: fit-content;",
            "Loading..."
        }
    }
}
