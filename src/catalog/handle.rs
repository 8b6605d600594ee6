//! Shared, versioned access to the current catalog.

use super::model::FloatCatalog;
use std::sync::Arc;
use tokio::sync::watch;

/// Owner of the session's current catalog.
///
/// Readers always get a complete snapshot; a replacement swaps the whole
/// catalog in one step and bumps its version.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    tx: Arc<watch::Sender<Arc<FloatCatalog>>>,
}

impl CatalogHandle {
    /// Start with `initial` as version 0.
    pub fn new(initial: FloatCatalog) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial.with_version(0)));
        Self { tx: Arc::new(tx) }
    }

    /// The current catalog.
    pub fn snapshot(&self) -> Arc<FloatCatalog> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receiver notified on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<Arc<FloatCatalog>> {
        self.tx.subscribe()
    }

    /// Replace the catalog, returning its new version.
    pub(crate) fn publish(&self, catalog: FloatCatalog) -> u64 {
        let version = self.tx.borrow().version() + 1;
        self.tx.send_replace(Arc::new(catalog.with_version(version)));
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::synthetic;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn publish_swaps_whole_catalog() {
        let mut rng = StdRng::seed_from_u64(4);
        let handle = CatalogHandle::new(FloatCatalog::synthetic(synthetic::generate(10, &mut rng)));
        let mut rx = handle.subscribe();
        let before = handle.snapshot();

        let decoded = FloatCatalog::decoded(
            synthetic::generate(3, &mut rng),
            vec!["1901766".to_string()],
        );
        assert_eq!(handle.publish(decoded), 1);

        assert!(rx.has_changed().unwrap());
        let after = rx.borrow_and_update().clone();
        assert_eq!(after.len(), 3);
        assert_eq!(after.version(), 1);
        // Earlier snapshots are untouched.
        assert_eq!(before.len(), 10);
        assert_eq!(before.version(), 0);
    }
}
