use crate::catalog::models::format_track_length;
use crate::catalog::Track;
use dioxus::prelude::*;

/// Tracklist in album order, numbered from 1
#[component]
pub fn TrackList(tracks: Vec<Track>) -> Element {
    rsx! {
        ol { class: "mt-4 space-y-1",
            for (index, track) in tracks.iter().enumerate() {
                TrackRow { key: "{track.id}", position: index + 1, track: track.clone() }
            }
        }
    }
}

#[component]
fn TrackRow(position: usize, track: Track) -> Element {
    let label = format!("{}. {}", position, track.title);
    let length = track.length.map(format_track_length);

    rsx! {
        li { class: "track-row flex justify-between py-2 px-3 rounded hover:bg-gray-800 transition-colors",
            span { class: "text-gray-200 truncate", "{label}" }
            if let Some(ref length) = length {
                span { class: "text-gray-500 text-sm ml-4", "{length}" }
            }
        }
    }
}
