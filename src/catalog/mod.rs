pub mod client;
pub mod models;

pub use client::{normalize_base_url, CatalogClient, CatalogError};
pub use models::{Album, AlbumFormat, AlbumSummary, Playtime, Track};
