use crate::catalog::models::format_price;
use crate::catalog::Album;
use dioxus::prelude::*;

use super::utils::album_summary_line;

#[component]
pub fn AlbumMetadata(album: Album) -> Element {
    let price = format_price(&album.price);
    let summary = album_summary_line(&album);

    rsx! {
        div {
            h1 { class: "text-3xl font-bold text-white mb-2", "{album.title}" }
            h4 { class: "text-xl font-bold text-blue-300 mb-4", "{price}" }
            p { class: "text-gray-300 mb-2", "{summary}" }
            if let Some(ref format) = album.format {
                p { class: "text-gray-400 text-sm mb-4", "{format}" }
            }
            if !album.description.is_empty() {
                p { class: "text-gray-400", "{album.description}" }
            }
        }
    }
}
