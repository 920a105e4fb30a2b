use dioxus::prelude::*;

#[component]
pub fn AlbumArt(title: String, cover_url: Option<String>) -> Element {
    rsx! {
        div { class: "aspect-square bg-gray-800 rounded-lg flex items-center justify-center overflow-hidden",
            if let Some(ref url) = cover_url {
                img {
                    src: "{url}",
                    alt: "Album cover for {title}",
                    class: "w-full h-full object-cover",
                }
            } else {
                div { class: "text-gray-500 text-6xl", "🎵" }
            }
        }
    }
}
