use crate::catalog::Album;
use crate::ui::Route;
use dioxus::prelude::*;

use super::super::catalog_link::CatalogLink;
use super::super::page_container::PageContainer;
use super::album_art::AlbumArt;
use super::album_metadata::AlbumMetadata;
use super::track_list::TrackList;

#[component]
pub fn AlbumDetailView(album: Album) -> Element {
    rsx! {
        PageContainer {
            CatalogLink {
                to: Route::Home {},
                class: "inline-block mb-6 text-gray-400 hover:text-white transition-colors",
                "← Back to catalog"
            }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                div { class: "md:col-span-1",
                    AlbumArt {
                        title: album.title.clone(),
                        cover_url: album.cover_url().map(str::to_string),
                    }
                    TrackList { tracks: album.tracks.clone() }
                }
                div { class: "md:col-span-2",
                    AlbumMetadata { album: album.clone() }
                }
            }
        }
    }
}
