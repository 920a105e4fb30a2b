use crate::catalog::AlbumSummary;
use crate::ui::components::album_card::AlbumCard;
use dioxus::prelude::*;
use tracing::debug;

use super::catalog_hooks::{render_fetch_state, use_catalog_client, FetchState};
use super::page_container::PageContainer;

/// Catalog page listing every album
#[component]
pub fn Home() -> Element {
    debug!("Component rendering");
    let client = use_catalog_client();

    let albums = use_resource(move || {
        let client = client.clone();
        async move {
            debug!("Fetching album list");
            client.fetch_albums().await
        }
    });

    rsx! {
        HomeContent { state: FetchState::from_resource(&albums) }
    }
}

#[component]
pub fn HomeContent(state: FetchState<Vec<AlbumSummary>>) -> Element {
    render_fetch_state(&state, |albums| {
        rsx! {
            PageContainer {
                if albums.is_empty() {
                    div { class: "text-center py-12",
                        div { class: "text-gray-400 text-6xl mb-4", "🎵" }
                        h2 { class: "text-2xl font-bold text-gray-300", "No albums in the catalog yet" }
                    }
                } else {
                    AlbumGrid { albums: albums.clone() }
                }
            }
        }
    })
}

/// Grid component to display albums
#[component]
pub fn AlbumGrid(albums: Vec<AlbumSummary>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
            for album in albums {
                AlbumCard { key: "{album.id}", album: album.clone() }
            }
        }
    }
}
