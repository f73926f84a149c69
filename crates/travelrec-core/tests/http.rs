#![cfg(feature = "fetch")]

mod common;

use common::INDIA_JSON;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use travelrec_core::{DatasetSource, DatasetStore, HttpSource, LoadState, TravelError};
use url::Url;

/// Serve exactly one canned HTTP response on a local port.
async fn serve_once(status_line: &'static str, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    Url::parse(&format!("http://{addr}/travel_recommendation_api.json")).unwrap()
}

#[tokio::test]
async fn fetches_and_stores_the_document() {
    let url = serve_once("200 OK", INDIA_JSON).await;
    let store = DatasetStore::new();

    let catalog = store.load(&HttpSource::new(url)).await.unwrap();
    assert_eq!(catalog.records().len(), 5);
    assert_eq!(store.state(), LoadState::Loaded);
}

#[tokio::test]
async fn non_success_status_is_a_load_error() {
    let url = serve_once("404 Not Found", "").await;
    let err = HttpSource::new(url).fetch().await.unwrap_err();

    assert!(matches!(err, TravelError::Load { status: 404 }));
    assert_eq!(err.to_string(), "HTTP error: 404");
}

#[tokio::test]
async fn html_body_is_a_parse_error() {
    let url = serve_once("200 OK", "<html>oops</html>").await;
    let store = DatasetStore::new();

    let err = store.load(&HttpSource::new(url)).await.unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(store.state(), LoadState::NotLoaded);
}

#[tokio::test]
async fn unreachable_host_is_a_load_error() {
    // Bind then drop, so nothing listens on the port.
    let addr = TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap()
        .local_addr()
        .unwrap();
    let url = Url::parse(&format!("http://{addr}/data.json")).unwrap();

    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(err.is_load_error());
}
