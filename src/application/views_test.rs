use std::env;
use std::sync::Arc;

use anyhow::Result;
use mockito::Matcher;

use super::submit_delay;
use super::submit_price;
use crate::domain::models::ClientError;
use crate::domain::models::PredictionResult;
use crate::domain::models::RiskBand;
use crate::domain::services::DelayForm;
use crate::domain::services::PriceForm;
use crate::domain::services::RequestLifecycle;
use crate::domain::services::RequestState;
use crate::domain::services::SessionStore;
use crate::infrastructure::api::WindbreakerBackend;

fn backend_for(url: String) -> WindbreakerBackend {
    let file_path = env::temp_dir()
        .join(format!("windbreaker-{}", uuid::Uuid::new_v4()))
        .join("session.yaml");
    return WindbreakerBackend::new(url, Arc::new(SessionStore::new(file_path)));
}

#[tokio::test]
async fn it_resolves_a_delay_submission_end_to_end() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/predict")
        .match_body(Matcher::Json(serde_json::json!({
            "airline": "AA",
            "origin": "Dallas/Fort Worth, TX",
            "destination": "New York, NY",
            "date": "2026-05-20",
            "time": "14:00",
        })))
        .with_status(200)
        .with_body(r#"{"prediction":"ON_TIME","probability":0.12,"risk_score":18}"#)
        .create();

    let backend = backend_for(server.url());
    let form = DelayForm::default()
        .with_airline("AA")
        .with_origin("Dallas/Fort Worth, TX")
        .with_destination("New York, NY")
        .with_date("2026-05-20")
        .with_time("14:00");

    let mut lifecycle = RequestLifecycle::default();
    let applied = submit_delay(&backend, &mut lifecycle, form.to_request()).await;

    assert!(applied);
    match lifecycle.state() {
        RequestState::Success(PredictionResult::Delay(res)) => {
            assert_eq!(res.risk_score, 18.0);
            assert_eq!(res.risk_band(), RiskBand::Nominal);
        }
        state => panic!("expected a delay success, got {state:?}"),
    }
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_sends_the_parsed_travel_time_in_the_price_body() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/predict-price")
        .match_body(Matcher::Json(serde_json::json!({
            "airline": "AirAsia",
            "origin": "Jakarta",
            "destination": "Denpasar",
            "duration_mins": 150,
        })))
        .with_status(200)
        .with_body(r#"{"estimated_price":4521.5}"#)
        .create();

    let backend = backend_for(server.url());
    let form = PriceForm::default()
        .with_airline("AirAsia")
        .with_origin("Jakarta")
        .with_destination("Denpasar")
        .with_travel_time("2h 30m");

    let mut lifecycle = RequestLifecycle::default();
    let applied = submit_price(&backend, &mut lifecycle, form.to_request()).await;

    assert!(applied);
    match lifecycle.state() {
        RequestState::Success(PredictionResult::Price(res)) => {
            assert_eq!(res.estimated_price, 4521.5);
        }
        state => panic!("expected a price success, got {state:?}"),
    }
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_records_a_failure_without_crashing_the_view() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/predict").with_status(500).create();

    let backend = backend_for(server.url());

    let mut lifecycle = RequestLifecycle::default();
    let applied = submit_delay(&backend, &mut lifecycle, DelayForm::default().to_request()).await;

    assert!(applied);
    assert!(matches!(
        lifecycle.state(),
        RequestState::Failure(ClientError::Network(_))
    ));
    mock.assert();
}
