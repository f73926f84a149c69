mod common;

use common::{FlakySource, GatedSource, INDIA_JSON};
use std::io::Write;
use std::sync::Arc;
use travelrec_core::{
    DatasetStore, FileSource, LoadState, RawDataset, SourceLocation, StaticSource, TravelError,
};

#[tokio::test]
async fn store_starts_empty_and_fills_on_load() {
    let store = DatasetStore::new();
    assert_eq!(store.state(), LoadState::NotLoaded);
    assert!(store.current().is_none());

    let catalog = store
        .load(&StaticSource::new(INDIA_JSON))
        .await
        .unwrap();
    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(catalog.records().len(), 5);
    assert!(Arc::ptr_eq(&catalog, &store.current().unwrap()));
}

#[tokio::test]
async fn http_status_failure_keeps_store_empty() {
    let store = DatasetStore::new();
    let err = store.load(&FlakySource::always(503)).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.is_load_error());
    assert_eq!(store.state(), LoadState::NotLoaded);
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let store = DatasetStore::new();
    let err = store
        .load(&StaticSource::new("{\"countries\": [oops]"))
        .await
        .unwrap_err();

    assert!(err.is_parse_error());
    assert_eq!(store.state(), LoadState::NotLoaded);
}

#[tokio::test]
async fn each_load_overwrites_the_slot() {
    let store = DatasetStore::new();
    store.load(&StaticSource::new(INDIA_JSON)).await.unwrap();
    store
        .load(&StaticSource::new(r#"{"beaches":[{"name":"Bondi"}]}"#))
        .await
        .unwrap();

    let current = store.current().unwrap();
    assert_eq!(current.records().len(), 1);
    assert_eq!(current.records()[0].name, "Bondi");
}

#[tokio::test]
async fn failed_reload_keeps_previous_dataset() {
    let store = DatasetStore::new();
    store.load(&StaticSource::new(INDIA_JSON)).await.unwrap();
    assert!(store.load(&FlakySource::always(500)).await.is_err());

    assert_eq!(store.state(), LoadState::Loaded);
    assert_eq!(store.current().unwrap().records().len(), 5);
}

#[tokio::test]
async fn only_one_load_in_flight() {
    let store = DatasetStore::new();
    let gated = GatedSource::new(INDIA_JSON);

    let first = store.load(&gated);
    let second = async {
        tokio::task::yield_now().await;
        assert_eq!(store.state(), LoadState::Loading);
        let err = store.load(&StaticSource::new(INDIA_JSON)).await.unwrap_err();
        assert!(matches!(err, TravelError::LoadInProgress));
        gated.open();
    };

    let (loaded, ()) = tokio::join!(first, second);
    assert!(loaded.is_ok());
    assert_eq!(gated.calls(), 1);
    assert_eq!(store.state(), LoadState::Loaded);
}

#[test]
fn replace_swaps_in_a_dataset() {
    let store = DatasetStore::new();
    let catalog = store.replace(RawDataset::default());
    assert!(catalog.records().is_empty());
    assert_eq!(store.state(), LoadState::Loaded);
}

#[tokio::test]
async fn file_source_reports_missing_files() {
    let store = DatasetStore::new();
    let err = store
        .load(&FileSource::new("/definitely/not/here.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, TravelError::NotFound(_)));
}

#[tokio::test]
async fn file_source_reads_gzip() {
    let path = std::env::temp_dir().join(format!("travelrec-{}.json.gz", std::process::id()));
    {
        let file = std::fs::File::create(&path).unwrap();
        let mut gz = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        gz.write_all(INDIA_JSON.as_bytes()).unwrap();
        gz.finish().unwrap();
    }

    let store = DatasetStore::new();
    let source = SourceLocation::parse(path.to_str().unwrap())
        .unwrap()
        .into_source()
        .unwrap();
    let catalog = store.load(&source).await.unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(catalog.stats().cities, 2);
}
