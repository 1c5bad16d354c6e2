#[cfg(test)]
#[path = "prediction_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

/// Fixed business rule: a risk score above this percentage reads as
/// elevated. Not user configurable.
pub const RISK_THRESHOLD: f64 = 40.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RiskBand {
    Elevated,
    Nominal,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayResult {
    pub prediction: String,
    pub probability: f64,
    pub risk_score: f64,
}

impl DelayResult {
    pub fn risk_band(&self) -> RiskBand {
        if self.risk_score > RISK_THRESHOLD {
            return RiskBand::Elevated;
        }
        return RiskBand::Nominal;
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub estimated_price: f64,
}

/// The two result shapes as one tagged union, discriminated by the kind of
/// request that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Delay(DelayResult),
    Price(PriceResult),
}
