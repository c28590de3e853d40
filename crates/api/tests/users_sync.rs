//! Integration tests for the user directory downloader.
//!
//! Each test serves a directory document from a local axum server bound to
//! an ephemeral port.

mod common;

use std::fs;
use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use presence_api::users_sync::{SyncError, UserDirectorySync};
use presence_core::users::{load_directory, UserOrdering};

/// Serve `router` on 127.0.0.1 and return its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn directory_xml() -> String {
    fs::read_to_string(common::fixture("users.xml")).unwrap()
}

#[tokio::test]
async fn update_user_names_stores_downloaded_directory() {
    let xml = directory_xml();
    let addr = serve(Router::new().route("/users.xml", get(move || async move { xml }))).await;
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("users.xml");

    let count = UserDirectorySync::new()
        .update_user_names(&format!("http://{addr}/users.xml"), &dest)
        .await
        .unwrap();

    assert_eq!(count, 2);
    let users = load_directory(&dest, UserOrdering::ById).unwrap();
    assert_eq!(users.iter().map(|u| u.user_id).collect::<Vec<_>>(), vec![10, 11]);
}

#[tokio::test]
async fn http_error_keeps_existing_file() {
    let addr = serve(Router::new().route(
        "/users.xml",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    ))
    .await;
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("users.xml");
    fs::write(&dest, directory_xml()).unwrap();

    let result = UserDirectorySync::new()
        .update_user_names(&format!("http://{addr}/users.xml"), &dest)
        .await;

    assert_matches!(result, Err(SyncError::HttpStatus(503)));
    assert_eq!(fs::read_to_string(&dest).unwrap(), directory_xml());
}

#[tokio::test]
async fn invalid_document_is_rejected_and_not_written() {
    let addr = serve(Router::new().route(
        "/users.xml",
        get(|| async { "<html>maintenance</html>" }),
    ))
    .await;
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("users.xml");

    let result = UserDirectorySync::new()
        .update_user_names(&format!("http://{addr}/users.xml"), &dest)
        .await;

    assert_matches!(result, Err(SyncError::InvalidDocument(_)));
    assert!(!dest.exists());
}

#[tokio::test]
async fn failed_replace_removes_temporary_file() {
    let xml = directory_xml();
    let addr = serve(Router::new().route("/users.xml", get(move || async move { xml }))).await;
    let dir = tempfile::tempdir().unwrap();
    // A directory at the destination makes the final rename fail.
    let dest = dir.path().join("users.xml");
    fs::create_dir(&dest).unwrap();

    let result = UserDirectorySync::new()
        .update_user_names(&format!("http://{addr}/users.xml"), &dest)
        .await;

    assert_matches!(result, Err(SyncError::Write { path, .. }) if path == dest);
    assert!(!dir.path().join("users.xml.tmp").exists());
    assert!(dest.is_dir());
}
