use serde::{Deserialize, Deserializer};
use std::fmt;

/// Album entry from the catalog listing endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlbumSummary {
    pub id: u64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl AlbumSummary {
    pub fn cover_url(&self) -> Option<&str> {
        non_empty(&self.cover_image)
    }
}

/// Full album as returned by the per-album endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub format: Option<AlbumFormat>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub slug: String,
    /// Tracklist in album order
    #[serde(default)]
    pub tracks: Vec<Track>,
    /// Total length in seconds
    #[serde(default)]
    pub total_playtime: Option<u64>,
}

impl Album {
    pub fn cover_url(&self) -> Option<&str> {
        non_empty(&self.cover_image)
    }

    /// Total length in seconds. Falls back to summing track lengths when the
    /// server omits `total_playtime`.
    pub fn playtime_seconds(&self) -> u64 {
        self.total_playtime.unwrap_or_else(|| {
            self.tracks
                .iter()
                .filter_map(|t| t.length)
                .map(u64::from)
                .sum()
        })
    }

    pub fn playtime(&self) -> Playtime {
        Playtime::from_seconds(self.playtime_seconds())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: String,
    /// Length in seconds
    #[serde(default)]
    pub length: Option<u32>,
}

/// Physical or digital format of a release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AlbumFormat {
    DigitalDownload,
    Cd,
    Vinyl,
    Other(String),
}

impl From<String> for AlbumFormat {
    fn from(code: String) -> Self {
        match code.as_str() {
            "DD" => AlbumFormat::DigitalDownload,
            "CD" => AlbumFormat::Cd,
            "VL" => AlbumFormat::Vinyl,
            _ => AlbumFormat::Other(code),
        }
    }
}

impl fmt::Display for AlbumFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumFormat::DigitalDownload => write!(f, "Digital Download"),
            AlbumFormat::Cd => write!(f, "CD"),
            AlbumFormat::Vinyl => write!(f, "Vinyl"),
            AlbumFormat::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Album length split into whole minutes and remaining seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playtime {
    pub minutes: u64,
    pub seconds: u64,
}

impl Playtime {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            minutes: total / 60,
            seconds: total % 60,
        }
    }
}

impl fmt::Display for Playtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min {} sec", self.minutes, self.seconds)
    }
}

/// Format a track length in seconds as M:SS
pub fn format_track_length(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_price(price: &str) -> String {
    format!("£{}", price)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// The API serializes decimals as strings, but plain JSON numbers are
/// accepted as well.
fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
    })
}
