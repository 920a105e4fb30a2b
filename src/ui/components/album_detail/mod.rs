mod album_art;
mod album_metadata;
mod page;
mod track_list;
pub mod utils;
mod view;

pub use page::{AlbumDetail, AlbumDetailContent, AlbumDetailWithSlug};
pub use view::AlbumDetailView;
