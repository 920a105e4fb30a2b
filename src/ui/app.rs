use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/albums/:id")]
    AlbumDetail { id: String },
    #[route("/albums/:id/:slug")]
    AlbumDetailWithSlug { id: String, slug: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("MyMusicMaestro")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_root_routes_to_home() {
        assert_eq!(Route::from_str("/").unwrap(), Route::Home {});
    }

    #[test]
    fn test_album_route_carries_id() {
        assert_eq!(
            Route::from_str("/albums/42").unwrap(),
            Route::AlbumDetail {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn test_slug_route_carries_id_and_slug() {
        assert_eq!(
            Route::from_str("/albums/42/mezzanine").unwrap(),
            Route::AlbumDetailWithSlug {
                id: "42".to_string(),
                slug: "mezzanine".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert!(matches!(
            Route::from_str("/artists/7").unwrap(),
            Route::PageNotFound { .. }
        ));
    }

    #[test]
    fn test_album_route_display() {
        let route = Route::AlbumDetail {
            id: "7".to_string(),
        };
        assert_eq!(route.to_string(), "/albums/7");
    }
}
