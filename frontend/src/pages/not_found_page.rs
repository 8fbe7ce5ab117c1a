use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Warehouse - Page Not Found" }
        div {
            style: "padding: 36px 40px;",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::HomePage {}, "Return to Home Page" }
        }
    }
}
