#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

use anyhow::Result;
use dialoguer::Input;
use dialoguer::Password;

use super::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::DelayRequest;
use crate::domain::models::PredictionResult;
use crate::domain::models::PriceRequest;
use crate::domain::models::Route;
use crate::domain::models::RouteDecision;
use crate::domain::services::DelayForm;
use crate::domain::services::OptionsCache;
use crate::domain::services::PriceForm;
use crate::domain::services::RequestLifecycle;
use crate::domain::services::RequestState;
use crate::domain::services::SessionGuard;
use crate::domain::services::SessionStore;

/// Runs one supervised delay submission. Returns whether the response was
/// applied to the lifecycle; a superseded submission's response is
/// discarded without touching the newer state.
pub async fn submit_delay(
    backend: &dyn Backend,
    lifecycle: &mut RequestLifecycle,
    request: DelayRequest,
) -> bool {
    let submission = lifecycle.begin();
    let cancelled = submission.cancellation_token();

    tokio::select! {
        _ = cancelled.cancelled() => {
            return false;
        }
        outcome = backend.predict_delay(&request) => {
            return lifecycle.resolve(&submission, outcome.map(PredictionResult::Delay));
        }
    }
}

pub async fn submit_price(
    backend: &dyn Backend,
    lifecycle: &mut RequestLifecycle,
    request: PriceRequest,
) -> bool {
    let submission = lifecycle.begin();
    let cancelled = submission.cancellation_token();

    tokio::select! {
        _ = cancelled.cancelled() => {
            return false;
        }
        outcome = backend.predict_price(&request) => {
            return lifecycle.resolve(&submission, outcome.map(PredictionResult::Price));
        }
    }
}

fn guard_allows(guard: &SessionGuard, target: Route) -> bool {
    if let RouteDecision::Redirect(_) = guard.evaluate(target) {
        ui::print_redirect_to_login();
        return false;
    }

    return true;
}

/// A failed submission reports and returns the view toward awaiting
/// input; it never crashes the process.
fn present(lifecycle: &RequestLifecycle) {
    match lifecycle.state() {
        RequestState::Success(result) => ui::print_prediction(result),
        RequestState::Failure(err) => {
            ui::print_failure(err);
            ui::print_awaiting_input();
        }
        RequestState::Idle | RequestState::Pending => {}
    }
}

pub async fn delay_view(
    guard: &SessionGuard,
    backend: &dyn Backend,
    form: DelayForm,
) -> Result<()> {
    if !guard_allows(guard, Route::DelayPredictor) {
        return Ok(());
    }

    let mut lifecycle = RequestLifecycle::default();
    ui::print_pending();
    submit_delay(backend, &mut lifecycle, form.to_request()).await;
    present(&lifecycle);

    return Ok(());
}

pub struct PriceArgs {
    pub airline: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub travel_time: Option<String>,
    pub duration_mins: Option<String>,
}

pub async fn price_view(
    guard: &SessionGuard,
    backend: &dyn Backend,
    args: PriceArgs,
) -> Result<()> {
    if !guard_allows(guard, Route::PriceOracle) {
        return Ok(());
    }

    let cache = OptionsCache::default();
    let options = cache.get_or_fetch(backend).await;

    let mut form = PriceForm::default();
    if let Some(value) = args.airline.as_deref() {
        form = form.with_airline(value);
    }
    if let Some(value) = args.origin.as_deref() {
        form = form.with_origin(value);
    }
    if let Some(value) = args.destination.as_deref() {
        form = form.with_destination(value);
    }
    if let Some(raw) = args.travel_time.as_deref() {
        form = form.with_travel_time(raw);
    } else if let Some(raw) = args.duration_mins.as_deref() {
        form = form.with_duration_mins(raw);
    }

    if form.airline.is_empty() && Config::get(ConfigKey::AutoSelectFirstAirline) == "true" {
        if let Some(first) = options.airlines.first() {
            form = form.with_airline(first);
        }
    }

    let mut lifecycle = RequestLifecycle::default();
    ui::print_pending();
    submit_price(backend, &mut lifecycle, form.to_request()).await;
    present(&lifecycle);

    return Ok(());
}

pub async fn options_view(guard: &SessionGuard, backend: &dyn Backend) -> Result<()> {
    if !guard_allows(guard, Route::PriceOracle) {
        return Ok(());
    }

    let cache = OptionsCache::default();
    let options = cache.get_or_fetch(backend).await;
    println!("{}", ui::format_options(&options));

    return Ok(());
}

pub async fn status_view(guard: &SessionGuard, backend: &dyn Backend) -> Result<()> {
    if !guard_allows(guard, Route::Dashboard) {
        return Ok(());
    }

    match backend.health_check().await {
        Ok(()) => ui::print_status_online(),
        Err(err) => ui::print_status_offline(&err),
    }

    return Ok(());
}

pub async fn whoami_view(
    guard: &SessionGuard,
    backend: &dyn Backend,
    store: &SessionStore,
) -> Result<()> {
    if !guard_allows(guard, Route::Dashboard) {
        return Ok(());
    }

    match backend.me().await {
        Ok(profile) => {
            println!("{}", ui::format_profile(&profile));
            if let Some(session) = store.snapshot() {
                println!("Signed in since {}", session.created_at);
            }
        }
        Err(err) => ui::print_failure(&err),
    }

    return Ok(());
}

pub async fn login_view(
    store: &SessionStore,
    backend: &dyn Backend,
    email: Option<String>,
) -> Result<()> {
    let email = match email {
        Some(value) => value,
        None => Input::<String>::new().with_prompt("Email").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    match backend.login(&email, &password).await {
        Ok(session) => {
            store.save(session.clone()).await?;
            ui::print_signed_in(&session);
        }
        Err(err) => ui::print_failure(&err),
    }

    return Ok(());
}

pub async fn logout_view(store: &SessionStore) -> Result<()> {
    store.clear().await?;
    ui::print_signed_out();

    return Ok(());
}
