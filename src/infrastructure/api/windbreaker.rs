#[cfg(test)]
#[path = "windbreaker_test.rs"]
mod tests;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::ClientError;
use crate::domain::models::DelayRequest;
use crate::domain::models::DelayResult;
use crate::domain::models::OptionsSet;
use crate::domain::models::PriceRequest;
use crate::domain::models::PriceResult;
use crate::domain::models::Profile;
use crate::domain::models::Session;
use crate::domain::services::SessionStore;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DelayResponse {
    prediction: String,
    probability: f64,
    risk_score: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PriceResponse {
    estimated_price: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct OptionsResponse {
    airlines: Vec<String>,
    cities: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LoginResponse {
    access_token: String,
    token_type: String,
    user_name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProfileResponse {
    email: String,
    name: String,
}

/// Requires a 2xx status, mapping everything else to a network failure.
fn ensure_success(res: &reqwest::Response, what: &str) -> Result<(), ClientError> {
    let status = res.status();
    if !status.is_success() {
        tracing::error!(status = status.as_u16(), "{} request failed", what);
        return Err(ClientError::Network(format!(
            "{what} request failed with status {status}"
        )));
    }

    return Ok(());
}

/// Requires a 2xx status on a credentialed endpoint; a 401 or 403 means
/// the backend rejected the session token.
fn ensure_authorized(res: &reqwest::Response, what: &str) -> Result<(), ClientError> {
    let status = res.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        tracing::error!(status = status.as_u16(), "{} rejected the session", what);
        return Err(ClientError::Auth(format!(
            "{what} rejected the session, sign in again"
        )));
    }

    return ensure_success(res, what);
}

pub struct WindbreakerBackend {
    url: String,
    session: Arc<SessionStore>,
}

impl WindbreakerBackend {
    pub fn new(url: String, session: Arc<SessionStore>) -> WindbreakerBackend {
        return WindbreakerBackend { url, session };
    }

    pub fn from_config(session: Arc<SessionStore>) -> WindbreakerBackend {
        return WindbreakerBackend::new(Config::get(ConfigKey::ApiURL), session);
    }

    fn bearer(&self) -> Option<String> {
        return self
            .session
            .snapshot()
            .map(|session| return format!("Bearer {}", session.token));
    }
}

#[async_trait]
impl Backend for WindbreakerBackend {
    async fn health_check(&self) -> Result<(), ClientError> {
        let res = reqwest::Client::new().get(&self.url).send().await?;
        return ensure_success(&res, "Health check");
    }

    async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "email and password are both required".to_string(),
            ));
        }

        let res = reqwest::Client::new()
            .post(format!("{url}/api/login", url = self.url))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;
        ensure_authorized(&res, "Login")?;

        let body = res.json::<LoginResponse>().await?;
        tracing::debug!(token_type = body.token_type, "Login accepted");

        return Ok(Session::new(body.access_token, body.user_name));
    }

    async fn me(&self) -> Result<Profile, ClientError> {
        let mut req = reqwest::Client::new().get(format!("{url}/api/me", url = self.url));
        if let Some(bearer) = self.bearer() {
            req = req.header(reqwest::header::AUTHORIZATION, bearer);
        }

        let res = req.send().await?;
        ensure_authorized(&res, "Profile")?;

        let body = res.json::<ProfileResponse>().await?;
        return Ok(Profile {
            email: body.email,
            name: body.name,
        });
    }

    async fn fetch_options(&self) -> Result<OptionsSet, ClientError> {
        let mut res = reqwest::Client::new()
            .get(format!("{url}/options", url = self.url))
            .send()
            .await?;

        // Older deployments only expose the nested path.
        if res.status() == reqwest::StatusCode::NOT_FOUND {
            res = reqwest::Client::new()
                .get(format!("{url}/api/price-options", url = self.url))
                .send()
                .await?;
        }

        ensure_success(&res, "Options")?;

        let body = res.json::<OptionsResponse>().await?;
        return Ok(OptionsSet {
            airlines: body.airlines,
            cities: body.cities,
        });
    }

    async fn predict_delay(&self, request: &DelayRequest) -> Result<DelayResult, ClientError> {
        let res = reqwest::Client::new()
            .post(format!("{url}/predict", url = self.url))
            .json(request)
            .send()
            .await?;
        ensure_success(&res, "Delay prediction")?;

        let body = res.json::<DelayResponse>().await?;
        tracing::debug!(body = ?body, "Delay prediction response");

        return Ok(DelayResult {
            prediction: body.prediction,
            probability: body.probability,
            risk_score: body.risk_score,
        });
    }

    async fn predict_price(&self, request: &PriceRequest) -> Result<PriceResult, ClientError> {
        let mut req = reqwest::Client::new()
            .post(format!("{url}/api/predict-price", url = self.url))
            .json(request);
        if let Some(bearer) = self.bearer() {
            req = req.header(reqwest::header::AUTHORIZATION, bearer);
        }

        let res = req.send().await?;
        ensure_authorized(&res, "Price prediction")?;

        let body = res.json::<PriceResponse>().await?;
        tracing::debug!(body = ?body, "Price prediction response");

        return Ok(PriceResult {
            estimated_price: body.estimated_price,
        });
    }
}
