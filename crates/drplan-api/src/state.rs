//! Shared handler state.

use std::sync::Arc;

use drplan_catalog::CatalogStore;

/// State shared across all handlers.
///
/// Holds the catalog store behind its repository trait, so tests and a
/// future relational backend inject their own implementation. Cheap to
/// clone.
#[derive(Clone)]
pub struct AppState {
    /// The catalog store.
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    /// Create handler state over a store instance.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drplan_catalog::MemStore;

    #[test]
    fn test_state_is_cloneable() {
        let state = AppState::new(Arc::new(MemStore::new()));
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.store, &clone.store));
    }
}
