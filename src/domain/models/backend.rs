use async_trait::async_trait;

use super::ClientError;
use super::DelayRequest;
use super::DelayResult;
use super::OptionsSet;
use super::PriceRequest;
use super::PriceResult;
use super::Profile;
use super::Session;

#[async_trait]
pub trait Backend {
    /// Used by the status view to verify the prediction service is
    /// reachable before anything is submitted.
    async fn health_check(&self) -> Result<(), ClientError>;

    /// Exchanges operator credentials for a session. The caller owns
    /// persisting the returned session.
    async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError>;

    /// Fetches the signed-in operator profile under the stored session.
    async fn me(&self) -> Result<Profile, ClientError>;

    /// Retrieves the selectable airline and city enumerations.
    async fn fetch_options(&self) -> Result<OptionsSet, ClientError>;

    /// Submits a delay prediction. This endpoint takes no credentials.
    async fn predict_delay(&self, request: &DelayRequest) -> Result<DelayResult, ClientError>;

    /// Submits a fare estimate under the stored session's bearer token.
    /// Token validity is the backend's call, never checked client side.
    async fn predict_price(&self, request: &PriceRequest) -> Result<PriceResult, ClientError>;
}
