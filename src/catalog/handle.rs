use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::catalog::MealCatalog;
use crate::planner::PlanGenerator;

/// Shared catalog reference that can be swapped at runtime.
///
/// Readers take an `Arc` snapshot; a reload replaces the whole catalog at
/// once, so a reader sees either the old catalog or the new one.
#[derive(Debug, Clone)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<MealCatalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: MealCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// The catalog as of now. Later replacements do not affect it.
    pub fn snapshot(&self) -> Arc<MealCatalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in a new catalog; returns the previous one.
    pub fn replace(&self, catalog: MealCatalog) -> Arc<MealCatalog> {
        info!(templates = catalog.len(), "replacing meal catalog");
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }

    /// A generator bound to the current snapshot.
    pub fn generator(&self) -> PlanGenerator {
        PlanGenerator::new(self.snapshot())
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(MealCatalog::builtin())
    }
}
