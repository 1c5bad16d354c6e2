use std::env;
use std::sync::Arc;

use anyhow::Result;

use super::OptionsCache;
use crate::domain::models::OptionsSet;
use crate::domain::services::SessionStore;
use crate::infrastructure::api::WindbreakerBackend;

fn backend_for(url: String) -> WindbreakerBackend {
    let file_path = env::temp_dir()
        .join(format!("windbreaker-{}", uuid::Uuid::new_v4()))
        .join("session.yaml");
    return WindbreakerBackend::new(url, Arc::new(SessionStore::new(file_path)));
}

fn options_body() -> Result<String> {
    let body = serde_json::to_string(&OptionsSet {
        airlines: vec!["AirAsia".to_string(), "Garuda".to_string()],
        cities: vec!["Jakarta".to_string()],
    })?;

    return Ok(body);
}

#[tokio::test]
async fn it_fetches_once_for_sequential_reads() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/options")
        .with_status(200)
        .with_body(options_body()?)
        .expect(1)
        .create();

    let backend = backend_for(server.url());
    let cache = OptionsCache::default();

    let first = cache.get_or_fetch(&backend).await;
    let second = cache.get_or_fetch(&backend).await;

    assert_eq!(first.airlines, vec!["AirAsia", "Garuda"]);
    assert_eq!(first, second);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_stays_empty_after_a_failed_fetch() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/options")
        .with_status(500)
        .expect(1)
        .create();

    let backend = backend_for(server.url());
    let cache = OptionsCache::default();

    let first = cache.get_or_fetch(&backend).await;
    let second = cache.get_or_fetch(&backend).await;

    assert!(first.airlines.is_empty());
    assert!(first.cities.is_empty());
    assert_eq!(first, second);
    mock.assert();
}

#[tokio::test]
async fn it_fetches_again_after_an_explicit_refetch() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/options")
        .with_status(200)
        .with_body(options_body()?)
        .expect(2)
        .create();

    let backend = backend_for(server.url());
    let cache = OptionsCache::default();

    cache.get_or_fetch(&backend).await;
    cache.refetch().await;
    cache.get_or_fetch(&backend).await;

    mock.assert();

    return Ok(());
}
