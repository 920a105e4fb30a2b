use crate::ui::Route;
use dioxus::prelude::*;

use super::catalog_link::CatalogLink;

/// Layout component: brand bar above the routed page
#[component]
pub fn Navbar() -> Element {
    rsx! {
        BrandBar {}
        Outlet::<Route> {}
    }
}

#[component]
pub fn BrandBar() -> Element {
    rsx! {
        nav { class: "bg-gray-800 border-b border-gray-700 px-6 py-4",
            CatalogLink {
                to: Route::Home {},
                class: "text-xl font-bold text-white hover:text-blue-300 transition-colors",
                "MyMusicMaestro"
            }
        }
    }
}
