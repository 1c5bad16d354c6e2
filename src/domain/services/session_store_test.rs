use std::env;
use std::path;

use anyhow::Result;

use super::SessionStore;
use crate::domain::models::Session;

fn temp_session_path() -> path::PathBuf {
    return env::temp_dir()
        .join(format!("windbreaker-{}", uuid::Uuid::new_v4()))
        .join("session.yaml");
}

#[tokio::test]
async fn it_round_trips_a_session_through_the_file() -> Result<()> {
    let file_path = temp_session_path();

    let store = SessionStore::new(file_path.clone());
    store
        .save(Session::new("abc123".to_string(), "Amelia".to_string()))
        .await?;

    let reopened = SessionStore::new(file_path);
    reopened.load().await?;

    let session = reopened.snapshot().unwrap();
    assert_eq!(session.token, "abc123");
    assert_eq!(session.display_name, "Amelia");

    return Ok(());
}

#[tokio::test]
async fn it_loads_nothing_when_no_file_exists() -> Result<()> {
    let store = SessionStore::new(temp_session_path());
    store.load().await?;

    assert!(store.snapshot().is_none());
    return Ok(());
}

#[tokio::test]
async fn it_clears_both_the_snapshot_and_the_file() -> Result<()> {
    let file_path = temp_session_path();

    let store = SessionStore::new(file_path.clone());
    store
        .save(Session::new("abc123".to_string(), "Amelia".to_string()))
        .await?;
    store.clear().await?;

    assert!(store.snapshot().is_none());
    assert!(!file_path.exists());

    return Ok(());
}

#[tokio::test]
async fn it_clears_cleanly_when_already_signed_out() -> Result<()> {
    let store = SessionStore::new(temp_session_path());
    store.clear().await?;

    assert!(store.snapshot().is_none());
    return Ok(());
}
