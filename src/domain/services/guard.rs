#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use std::sync::Arc;

use super::SessionStore;
use crate::domain::models::Route;
use crate::domain::models::RouteDecision;

/// Gates navigation on session presence. Evaluation is synchronous and
/// runs on every dispatch, never cached, so a session cleared elsewhere is
/// honored on the next guarded navigation.
pub struct SessionGuard {
    store: Arc<SessionStore>,
}

impl SessionGuard {
    pub fn new(store: Arc<SessionStore>) -> SessionGuard {
        return SessionGuard { store };
    }

    /// Redirection is the expected outcome for a signed-out operator, not
    /// a failure.
    pub fn evaluate(&self, target: Route) -> RouteDecision {
        if target.requires_session() && self.store.snapshot().is_none() {
            return RouteDecision::Redirect(Route::Login);
        }

        return RouteDecision::Render(target);
    }
}
