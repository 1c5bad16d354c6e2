use std::env;
use std::sync::Arc;

use anyhow::Result;

use super::SessionGuard;
use crate::domain::models::Route;
use crate::domain::models::RouteDecision;
use crate::domain::models::Session;
use crate::domain::services::SessionStore;

fn signed_out_guard() -> SessionGuard {
    let file_path = env::temp_dir()
        .join(format!("windbreaker-{}", uuid::Uuid::new_v4()))
        .join("session.yaml");
    return SessionGuard::new(Arc::new(SessionStore::new(file_path)));
}

async fn signed_in_guard() -> Result<SessionGuard> {
    let file_path = env::temp_dir()
        .join(format!("windbreaker-{}", uuid::Uuid::new_v4()))
        .join("session.yaml");

    let store = Arc::new(SessionStore::new(file_path));
    store
        .save(Session::new("abc123".to_string(), "Amelia".to_string()))
        .await?;

    return Ok(SessionGuard::new(store));
}

#[test]
fn it_redirects_protected_routes_without_a_session() {
    let guard = signed_out_guard();

    assert_eq!(
        guard.evaluate(Route::DelayPredictor),
        RouteDecision::Redirect(Route::Login)
    );
    assert_eq!(
        guard.evaluate(Route::PriceOracle),
        RouteDecision::Redirect(Route::Login)
    );
    assert_eq!(
        guard.evaluate(Route::Dashboard),
        RouteDecision::Redirect(Route::Login)
    );
}

#[test]
fn it_never_redirects_the_login_route() {
    let guard = signed_out_guard();

    assert_eq!(
        guard.evaluate(Route::Login),
        RouteDecision::Render(Route::Login)
    );
}

#[tokio::test]
async fn it_renders_protected_routes_with_a_session() -> Result<()> {
    let guard = signed_in_guard().await?;

    assert_eq!(
        guard.evaluate(Route::DelayPredictor),
        RouteDecision::Render(Route::DelayPredictor)
    );

    return Ok(());
}

#[tokio::test]
async fn it_honors_a_sign_out_on_the_next_navigation() -> Result<()> {
    let file_path = env::temp_dir()
        .join(format!("windbreaker-{}", uuid::Uuid::new_v4()))
        .join("session.yaml");

    let store = Arc::new(SessionStore::new(file_path));
    store
        .save(Session::new("abc123".to_string(), "Amelia".to_string()))
        .await?;

    let guard = SessionGuard::new(store.clone());
    assert_eq!(
        guard.evaluate(Route::PriceOracle),
        RouteDecision::Render(Route::PriceOracle)
    );

    store.clear().await?;
    assert_eq!(
        guard.evaluate(Route::PriceOracle),
        RouteDecision::Redirect(Route::Login)
    );

    return Ok(());
}
