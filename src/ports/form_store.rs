//! Form store port.
//!
//! Contract for keeping in-progress forms between requests. The shipped
//! implementation is in-memory; forms do not survive a restart.

use crate::domain::foundation::FormId;
use crate::domain::form::{ContactForm, FormError};
use async_trait::async_trait;

/// Store port for contact form instances.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Save a new form.
    ///
    /// # Errors
    ///
    /// - `Infrastructure` on storage failure
    async fn insert(&self, form: &ContactForm) -> Result<(), FormError>;

    /// Fetch a form by its ID.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no form exists with this ID
    async fn fetch(&self, id: &FormId) -> Result<ContactForm, FormError>;

    /// Replace a stored form with its updated state.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no form exists with this ID
    async fn update(&self, form: &ContactForm) -> Result<(), FormError>;

    /// Remove a form.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no form exists with this ID
    async fn remove(&self, id: &FormId) -> Result<(), FormError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn form_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn FormStore) {}
    }
}
