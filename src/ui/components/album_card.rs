use crate::catalog::models::{format_price, AlbumSummary};
use crate::ui::Route;
use dioxus::prelude::*;

use super::catalog_link::CatalogLink;

/// Individual album card in the catalog grid
#[component]
pub fn AlbumCard(album: AlbumSummary) -> Element {
    let byline = artist_and_year(&album.artist, album.release_year);
    let price = format_price(&album.price);
    let card_class = "album-card bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300";

    rsx! {
        div { class: "{card_class}",
            // Album cover
            div { class: "aspect-square bg-gray-700 flex items-center justify-center",
                if let Some(cover_url) = album.cover_url() {
                    img {
                        src: "{cover_url}",
                        alt: "Album cover for {album.title}",
                        class: "w-full h-full object-cover",
                    }
                } else {
                    div { class: "text-gray-500 text-4xl", "🎵" }
                }
            }

            // Album info
            div { class: "p-4",
                h3 { class: "font-bold text-white text-lg mb-1 truncate", title: "{album.title}",
                    CatalogLink {
                        to: Route::AlbumDetail {
                            id: album.id.to_string(),
                        },
                        class: "hover:text-blue-300 transition-colors",
                        "{album.title}"
                    }
                }
                p { class: "font-bold text-blue-300", "{price}" }
                p { class: "text-gray-400 text-sm mb-2", "{byline}" }
                p { class: "text-gray-500 text-xs", "{album.short_description}" }
            }
        }
    }
}

/// "Artist (1998)", or just the artist when the year is unknown
pub fn artist_and_year(artist: &str, year: Option<i32>) -> String {
    match year {
        Some(year) => format!("{} ({})", artist, year),
        None => artist.to_string(),
    }
}
