use crate::ui::Route;
use dioxus::prelude::*;

use super::catalog_link::CatalogLink;
use super::error::ErrorAlert;
use super::page_container::PageContainer;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        PageContainer {
            ErrorAlert { message: format!("Page not found: {path}") }
            CatalogLink {
                to: Route::Home {},
                class: "text-blue-400 hover:text-blue-300 underline",
                "Back to catalog"
            }
        }
    }
}
