//! In-Memory Form Store Adapter
//!
//! Keeps in-progress forms in a process-local map. Forms live only as
//! long as the server does, which matches the flow's scope of a single
//! visit.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::FormId;
use crate::domain::form::{ContactForm, FormError};
use crate::ports::FormStore;

/// In-memory store for contact forms.
#[derive(Debug, Clone)]
pub struct InMemoryFormStore {
    forms: Arc<RwLock<HashMap<FormId, ContactForm>>>,
}

impl InMemoryFormStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            forms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored forms.
    pub async fn form_count(&self) -> usize {
        self.forms.read().await.len()
    }

    /// Clear all stored forms (useful for tests).
    pub async fn clear(&self) {
        self.forms.write().await.clear();
    }
}

impl Default for InMemoryFormStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FormStore for InMemoryFormStore {
    async fn insert(&self, form: &ContactForm) -> Result<(), FormError> {
        let mut forms = self.forms.write().await;
        forms.insert(*form.id(), form.clone());
        Ok(())
    }

    async fn fetch(&self, id: &FormId) -> Result<ContactForm, FormError> {
        let forms = self.forms.read().await;
        forms
            .get(id)
            .cloned()
            .ok_or_else(|| FormError::not_found(*id))
    }

    async fn update(&self, form: &ContactForm) -> Result<(), FormError> {
        let mut forms = self.forms.write().await;
        match forms.get_mut(form.id()) {
            Some(stored) => {
                *stored = form.clone();
                Ok(())
            }
            None => Err(FormError::not_found(*form.id())),
        }
    }

    async fn remove(&self, id: &FormId) -> Result<(), FormError> {
        let mut forms = self.forms.write().await;
        match forms.remove(id) {
            Some(_) => Ok(()),
            None => Err(FormError::not_found(*id)),
        }
    }
}
