use serde::Deserialize;
use serde::Serialize;

/// Server supplied enumerations used to populate selection inputs. Empty
/// lists are a valid state before the fetch resolves, and the degraded
/// state after a failed fetch.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsSet {
    pub airlines: Vec<String>,
    pub cities: Vec<String>,
}
