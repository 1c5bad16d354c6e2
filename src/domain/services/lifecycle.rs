#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod tests;

use tokio_util::sync::CancellationToken;

use crate::domain::models::ClientError;
use crate::domain::models::PredictionResult;

#[derive(Debug)]
pub enum RequestState {
    Idle,
    Pending,
    Success(PredictionResult),
    Failure(ClientError),
}

/// Ticket for one submission. A response is only applied while its ticket
/// is still the latest issued; anything older is discarded.
pub struct Submission {
    seq: u64,
    cancel: CancellationToken,
}

impl Submission {
    pub fn cancellation_token(&self) -> CancellationToken {
        return self.cancel.clone();
    }
}

/// Per-view state machine supervising one prediction at a time:
/// Idle -> Pending -> Success or Failure, and back to Pending only via a
/// fresh submission. A completed result stays on screen until superseded.
pub struct RequestLifecycle {
    state: RequestState,
    issued: u64,
    active: Option<CancellationToken>,
}

impl Default for RequestLifecycle {
    fn default() -> RequestLifecycle {
        return RequestLifecycle {
            state: RequestState::Idle,
            issued: 0,
            active: None,
        };
    }
}

impl RequestLifecycle {
    /// Starts a new submission. Any outstanding one is cancelled and its
    /// eventual response no longer matches the issued sequence. The
    /// previous result is cleared immediately, never left up stale while
    /// the new request is in flight.
    pub fn begin(&mut self) -> Submission {
        if let Some(previous) = self.active.take() {
            previous.cancel();
        }

        self.issued += 1;
        self.state = RequestState::Pending;

        let cancel = CancellationToken::new();
        self.active = Some(cancel.clone());

        return Submission {
            seq: self.issued,
            cancel,
        };
    }

    /// Applies a response if its submission is still the authoritative
    /// one. Returns whether the outcome was applied.
    pub fn resolve(
        &mut self,
        submission: &Submission,
        outcome: Result<PredictionResult, ClientError>,
    ) -> bool {
        if submission.seq != self.issued {
            tracing::debug!(
                seq = submission.seq,
                issued = self.issued,
                "Discarded stale prediction response"
            );
            return false;
        }

        self.active = None;
        self.state = match outcome {
            Ok(result) => RequestState::Success(result),
            Err(err) => RequestState::Failure(err),
        };

        return true;
    }

    pub fn is_pending(&self) -> bool {
        return matches!(self.state, RequestState::Pending);
    }

    pub fn state(&self) -> &RequestState {
        return &self.state;
    }
}

impl Drop for RequestLifecycle {
    fn drop(&mut self) {
        // A dismissed view must not leave its request running.
        if let Some(active) = self.active.take() {
            active.cancel();
        }
    }
}
