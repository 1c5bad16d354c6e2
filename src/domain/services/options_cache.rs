#[cfg(test)]
#[path = "options_cache_test.rs"]
mod tests;

use tokio::sync::Mutex;

use crate::domain::models::Backend;
use crate::domain::models::OptionsSet;

/// Caches the selectable enumerations for one view mount. The first read
/// issues exactly one fetch; later reads return the stored value. A
/// failed fetch degrades silently: the lists stay empty and no further
/// attempt is made until an explicit refetch.
#[derive(Default)]
pub struct OptionsCache {
    cached: Mutex<Option<OptionsSet>>,
}

impl OptionsCache {
    pub async fn get_or_fetch(&self, backend: &dyn Backend) -> OptionsSet {
        let mut cached = self.cached.lock().await;
        if let Some(options) = cached.as_ref() {
            return options.clone();
        }

        match backend.fetch_options().await {
            Ok(options) => {
                *cached = Some(options.clone());
                return options;
            }
            Err(err) => {
                tracing::warn!(error = ?err, "Options fetch failed, selection lists stay empty");
                *cached = Some(OptionsSet::default());
                return OptionsSet::default();
            }
        }
    }

    /// Drops the mount state so the next read fetches again.
    pub async fn refetch(&self) {
        *self.cached.lock().await = None;
    }
}
