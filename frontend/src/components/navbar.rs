//! Side navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_editor_icons::MdInsertDriveFile;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared layout: icon sidebar on the left, routed page on the right.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 24px;
                    width: 38px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    align-items: center;
                    box-sizing: content-box;
                ",

                IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
                CurrentDocumentLink {}
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

/// Shows a document icon while a document page is open.
#[component]
fn CurrentDocumentLink() -> Element {
    let route = use_route::<Route>();
    match route {
        Route::DocumentDetailPage { id } => rsx! {
            IconLink { to: Route::DocumentDetailPage { id: id.clone() }, icon: MdInsertDriveFile, label: format!("Document {id}") }
        },
        _ => rsx! {},
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white;",
                title: "{label}",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
