use chrono::Local;
use chrono::SecondsFormat;
use serde::Deserialize;
use serde::Serialize;

/// Client-held proof of authentication. A session exists if and only if
/// the store has both the token and the display name persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub display_name: String,
    pub created_at: String,
}

impl Session {
    pub fn new(token: String, display_name: String) -> Session {
        return Session {
            token,
            display_name,
            created_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        };
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub name: String,
}
