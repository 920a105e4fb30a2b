use crate::catalog::Album;
use crate::ui::components::album_card::artist_and_year;

/// Summary line under the price: "Artist (1998), 11 Songs, 63 min 29 sec"
pub fn album_summary_line(album: &Album) -> String {
    let songs = match album.tracks.len() {
        1 => "1 Song".to_string(),
        n => format!("{} Songs", n),
    };
    format!(
        "{}, {}, {}",
        artist_and_year(&album.artist, album.release_year),
        songs,
        album.playtime()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Track;

    fn album(track_count: u64, total_playtime: u64, release_year: Option<i32>) -> Album {
        Album {
            id: 1,
            title: "Untitled".to_string(),
            artist: "Portishead".to_string(),
            release_year,
            price: "10.00".to_string(),
            description: String::new(),
            short_description: String::new(),
            cover_image: None,
            format: None,
            release_date: None,
            slug: String::new(),
            tracks: (1..=track_count)
                .map(|id| Track {
                    id,
                    title: format!("Track {}", id),
                    length: None,
                })
                .collect(),
            total_playtime: Some(total_playtime),
        }
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            album_summary_line(&album(11, 3809, Some(1994))),
            "Portishead (1994), 11 Songs, 63 min 29 sec"
        );
    }

    #[test]
    fn test_summary_line_single_track_without_year() {
        assert_eq!(
            album_summary_line(&album(1, 185, None)),
            "Portishead, 1 Song, 3 min 5 sec"
        );
    }
}
