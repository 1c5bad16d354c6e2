/// Navigation targets. Everything except the login view requires an
/// active session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    DelayPredictor,
    PriceOracle,
}

impl Route {
    pub fn requires_session(&self) -> bool {
        return *self != Route::Login;
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}
