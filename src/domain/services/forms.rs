#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;

use super::parse_duration;
use crate::domain::models::DelayRequest;
use crate::domain::models::PriceRequest;

/// Form state for the delay predictor view. Every setter returns a fresh
/// snapshot with one attribute replaced, so a render mid-edit never
/// observes a half-updated record.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DelayForm {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
}

impl DelayForm {
    pub fn with_airline(&self, value: &str) -> DelayForm {
        let mut next = self.clone();
        next.airline = value.to_string();
        return next;
    }

    pub fn with_origin(&self, value: &str) -> DelayForm {
        let mut next = self.clone();
        next.origin = value.to_string();
        return next;
    }

    pub fn with_destination(&self, value: &str) -> DelayForm {
        let mut next = self.clone();
        next.destination = value.to_string();
        return next;
    }

    pub fn with_date(&self, value: &str) -> DelayForm {
        let mut next = self.clone();
        next.date = value.to_string();
        return next;
    }

    pub fn with_time(&self, value: &str) -> DelayForm {
        let mut next = self.clone();
        next.time = value.to_string();
        return next;
    }

    pub fn to_request(&self) -> DelayRequest {
        return DelayRequest {
            airline: self.airline.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        };
    }
}

/// Form state for the price oracle view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceForm {
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub duration_mins: u32,
}

impl Default for PriceForm {
    fn default() -> PriceForm {
        return PriceForm {
            airline: "".to_string(),
            origin: "".to_string(),
            destination: "".to_string(),
            duration_mins: 120,
        };
    }
}

impl PriceForm {
    pub fn with_airline(&self, value: &str) -> PriceForm {
        let mut next = self.clone();
        next.airline = value.to_string();
        return next;
    }

    pub fn with_origin(&self, value: &str) -> PriceForm {
        let mut next = self.clone();
        next.origin = value.to_string();
        return next;
    }

    pub fn with_destination(&self, value: &str) -> PriceForm {
        let mut next = self.clone();
        next.destination = value.to_string();
        return next;
    }

    /// Raw numeric entry. Malformed input becomes 0 rather than rejecting
    /// the edit; the coercion is logged so it stays diagnosable.
    pub fn with_duration_mins(&self, raw: &str) -> PriceForm {
        let mut next = self.clone();
        next.duration_mins = raw.trim().parse::<u32>().unwrap_or_else(|_| {
            tracing::debug!(raw, "Coerced malformed duration entry to 0");
            return 0;
        });
        return next;
    }

    /// Free text travel time, e.g. "2h 30m", normalized to minutes before
    /// submission.
    pub fn with_travel_time(&self, raw: &str) -> PriceForm {
        let mut next = self.clone();
        next.duration_mins = parse_duration(raw);
        return next;
    }

    pub fn to_request(&self) -> PriceRequest {
        return PriceRequest {
            airline: self.airline.clone(),
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            duration_mins: self.duration_mins,
        };
    }
}
