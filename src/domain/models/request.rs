use serde::Deserialize;
use serde::Serialize;

/// Body for the delay endpoint. Built fresh from form state at submission
/// time and immutable once sent. Empty strings are submittable, the
/// backend stays the final validator.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRequest {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
}

/// Body for the fare endpoint.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub duration_mins: u32,
}
