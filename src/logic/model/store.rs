//! Model Store - process-wide handle to the loaded bundle
//!
//! Readers take an `Arc` snapshot and never see a half-replaced bundle.
//! Replacing swaps the whole `Arc` under the write lock.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use super::bundle::ModelBundle;
use super::loader::{self, ArtifactError};

#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    inner: Arc<RwLock<Option<Arc<ModelBundle>>>>,
}

impl ModelStore {
    /// Empty store; the service reports degraded until a bundle is loaded
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(bundle: ModelBundle) -> Self {
        let store = Self::new();
        store.replace(bundle);
        store
    }

    /// Snapshot of the current bundle
    pub fn current(&self) -> Option<Arc<ModelBundle>> {
        self.inner.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Publish a new bundle, returning the one it replaced
    pub fn replace(&self, bundle: ModelBundle) -> Option<Arc<ModelBundle>> {
        self.inner.write().replace(Arc::new(bundle))
    }

    /// Load from disk and publish. On failure the previous bundle stays.
    pub fn load_from(&self, path: impl AsRef<Path>) -> Result<Arc<ModelBundle>, ArtifactError> {
        let bundle = Arc::new(loader::load(path)?);
        *self.inner.write() = Some(Arc::clone(&bundle));
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::fixtures::{sample_bundle, StubClassifier};

    fn narrow_bundle() -> ModelBundle {
        let mut bundle = sample_bundle(StubClassifier::fixed(0.9));
        bundle.feature_order.truncate(2);
        bundle.base_delay_rate = 0.1;
        bundle
    }

    #[test]
    fn test_empty_store_is_degraded() {
        let store = ModelStore::new();
        assert!(!store.is_loaded());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = ModelStore::with_bundle(sample_bundle(StubClassifier::fixed(0.4)));
        let before = store.current().unwrap();

        let previous = store.replace(narrow_bundle());

        assert!(previous.is_some());
        assert_eq!(before.feature_order.len(), 6);
        assert_eq!(store.current().unwrap().feature_order.len(), 2);
    }

    #[test]
    fn test_failed_load_keeps_current_bundle() {
        let store = ModelStore::with_bundle(sample_bundle(StubClassifier::fixed(0.4)));

        let err = store.load_from("/nonexistent/bundle.json").unwrap_err();

        assert!(matches!(err, ArtifactError::NotFound(_)));
        assert_eq!(store.current().unwrap().base_delay_rate, 0.25);
    }

    #[test]
    fn test_concurrent_readers_never_see_mixed_bundle() {
        let store = ModelStore::with_bundle(sample_bundle(StubClassifier::fixed(0.4)));

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let store = store.clone();
                scope.spawn(move || {
                    for _ in 0..1_000 {
                        let bundle = store.current().unwrap();
                        let consistent = match bundle.feature_order.len() {
                            6 => bundle.base_delay_rate == 0.25,
                            2 => bundle.base_delay_rate == 0.1,
                            _ => false,
                        };
                        assert!(consistent);
                    }
                });
            }

            for i in 0..200 {
                if i % 2 == 0 {
                    store.replace(narrow_bundle());
                } else {
                    store.replace(sample_bundle(StubClassifier::fixed(0.4)));
                }
            }
        });
    }
}
