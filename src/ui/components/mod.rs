pub mod album_card;
pub mod album_detail;
mod app;
mod catalog_hooks;
mod catalog_link;
mod error;
mod home;
mod loading;
mod navbar;
mod not_found;
mod page_container;

pub use album_card::AlbumCard;
pub use album_detail::{AlbumDetail, AlbumDetailContent, AlbumDetailWithSlug};
pub use app::App;
pub use catalog_hooks::{render_fetch_state, use_catalog_client, FetchState};
pub use catalog_link::CatalogLink;
pub use error::ErrorAlert;
pub use home::{AlbumGrid, Home, HomeContent};
pub use loading::Loading;
pub use navbar::{BrandBar, Navbar};
pub use not_found::PageNotFound;
pub use page_container::PageContainer;
