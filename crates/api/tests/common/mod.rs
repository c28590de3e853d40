#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use presence_core::users::UserOrdering;
use tower::ServiceExt;

use presence_api::config::ServerConfig;
use presence_api::router::build_app_router;
use presence_api::state::AppState;

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Build a test `ServerConfig` reading the given data files.
pub fn test_config(presence_csv: PathBuf, users_xml: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        presence_csv,
        users_xml,
        cache_ttl: Duration::from_secs(600),
        users_order: UserOrdering::ById,
    }
}

/// Build the full application router from `config`.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_app_router(AppState::new(config))
}

/// Build the application router over the standard fixtures.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config(
        fixture("presence.csv"),
        fixture("users.xml"),
    ))
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
