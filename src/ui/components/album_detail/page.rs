use crate::catalog::Album;
use dioxus::prelude::*;
use tracing::debug;

use super::super::catalog_hooks::{render_fetch_state, use_catalog_client, FetchState};
use super::view::AlbumDetailView;

/// Album detail page showing album info and tracklist
#[component]
pub fn AlbumDetail(id: ReadSignal<String>) -> Element {
    let client = use_catalog_client();

    // Re-fetches whenever the route parameter changes
    let album = use_resource(move || {
        let id = id();
        let client = client.clone();
        async move {
            debug!("Fetching album {}", id);
            client.fetch_album(&id).await
        }
    });

    rsx! {
        AlbumDetailContent { state: FetchState::from_resource(&album) }
    }
}

/// `/albums/:id/:slug`; the slug is cosmetic and the album is looked up by id
#[component]
pub fn AlbumDetailWithSlug(id: String, slug: String) -> Element {
    debug!("Opening album {} via slug {}", id, slug);

    rsx! {
        AlbumDetail { id }
    }
}

#[component]
pub fn AlbumDetailContent(state: FetchState<Album>) -> Element {
    render_fetch_state(&state, |album| {
        rsx! {
            AlbumDetailView { album: album.clone() }
        }
    })
}
