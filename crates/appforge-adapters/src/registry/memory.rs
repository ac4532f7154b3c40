//! In-memory template registry.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use appforge_core::{
    application::{ApplicationError, ports::TemplateRegistry},
    domain::PromptTemplate,
    error::ForgeResult,
};

/// Thread-safe in-memory registry keyed by template name.
///
/// Constructed and owned by the caller (typically once per process start,
/// then seeded by a bootstrap step) — there is no ambient global store.
/// Cloning shares the underlying map. Writers to the same name are
/// last-write-wins; the `RwLock` only guarantees memory safety under
/// interleaving, not semantic serialization.
///
/// No structural validation happens on insert: the render pipeline is
/// responsible for coping with whatever callers registered.
#[derive(Clone)]
pub struct InMemoryRegistry {
    inner: Arc<RwLock<HashMap<String, PromptTemplate>>>,
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of registered templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all templates.
    pub fn clear(&self) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::RegistryLock)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRegistry for InMemoryRegistry {
    fn upsert(&self, template: PromptTemplate) -> ForgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::RegistryLock)?;
        inner.insert(template.name.clone(), template);
        Ok(())
    }

    fn get(&self, name: &str) -> ForgeResult<Option<PromptTemplate>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::RegistryLock)?;
        Ok(inner.get(name).cloned())
    }

    fn list(&self) -> ForgeResult<Vec<PromptTemplate>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::RegistryLock)?;
        Ok(inner.values().cloned().collect())
    }
}
