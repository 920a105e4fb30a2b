// Test support utilities for unit tests

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dioxus::prelude::{Element, VirtualDom};
use reqwest::Url;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned catalog API for client tests
///
/// Serves fixed JSON bodies (or a fixed error status) and records the album
/// ids requested from the detail endpoint.
#[derive(Clone)]
pub struct CatalogFixture {
    listing: serde_json::Value,
    detail: serde_json::Value,
    failure: Option<StatusCode>,
    requested_ids: Arc<Mutex<Vec<String>>>,
}

impl CatalogFixture {
    pub fn ok(listing: serde_json::Value, detail: serde_json::Value) -> Self {
        Self {
            listing,
            detail,
            failure: None,
            requested_ids: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(status: StatusCode) -> Self {
        Self {
            failure: Some(status),
            ..Self::ok(serde_json::Value::Null, serde_json::Value::Null)
        }
    }

    pub fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }

    fn respond(&self, body: &serde_json::Value) -> Response {
        match self.failure {
            Some(status) => (status, "error").into_response(),
            None => Json(body.clone()).into_response(),
        }
    }
}

async fn list_albums(State(fixture): State<CatalogFixture>) -> Response {
    fixture.respond(&fixture.listing)
}

async fn get_album(State(fixture): State<CatalogFixture>, Path(id): Path<String>) -> Response {
    fixture.requested_ids.lock().unwrap().push(id);
    fixture.respond(&fixture.detail)
}

/// Start the fixture on an ephemeral port and return its `/api/` base URL
pub async fn spawn_catalog_server(fixture: CatalogFixture) -> Url {
    let app = Router::new()
        .route("/api/albums/", get(list_albums))
        .route("/api/albums/:id", get(get_album))
        .with_state(fixture);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Url::parse(&format!("http://{}/api/", addr)).unwrap()
}

/// A base URL whose port had a listener a moment ago but no longer does
pub async fn unreachable_base_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}/api/", addr)).unwrap()
}

/// Render a component tree to an HTML string
pub fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Drive a built dom until its markup satisfies `done`, rendering after each
/// batch of async work. Panics if that takes longer than five seconds.
pub async fn render_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);

    loop {
        let html = dioxus_ssr::render(dom);
        if done(&html) {
            return html;
        }

        tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .unwrap_or_else(|_| panic!("timed out waiting for render, last markup: {html}"));
        dom.render_immediate_to_vec();
    }
}
