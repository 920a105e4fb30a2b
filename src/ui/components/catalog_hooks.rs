use crate::catalog::{CatalogClient, CatalogError};
use dioxus::prelude::*;

use super::error::ErrorAlert;
use super::loading::Loading;
use super::page_container::PageContainer;

/// Hook to access the catalog client provided at launch
pub fn use_catalog_client() -> CatalogClient {
    use_context::<CatalogClient>()
}

/// Lifecycle of a single page fetch: pending, then ready or failed
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Failed(String),
    Ready(T),
}

impl<T: Clone + 'static> FetchState<T> {
    /// Snapshot of a fetch resource. Errors are reduced to their message.
    pub fn from_resource(resource: &Resource<Result<T, CatalogError>>) -> Self {
        match resource.value().read().as_ref() {
            None => FetchState::Pending,
            Some(Err(e)) => FetchState::Failed(e.to_string()),
            Some(Ok(value)) => FetchState::Ready(value.clone()),
        }
    }
}

/// Loading spinner while pending, error alert on failure, otherwise the
/// page content built by `ready`
pub fn render_fetch_state<T>(state: &FetchState<T>, ready: impl FnOnce(&T) -> Element) -> Element {
    match state {
        FetchState::Pending => rsx! {
            Loading {}
        },
        FetchState::Failed(message) => rsx! {
            PageContainer {
                ErrorAlert { message: message.clone() }
            }
        },
        FetchState::Ready(value) => ready(value),
    }
}
