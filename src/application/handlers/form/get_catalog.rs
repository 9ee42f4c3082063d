//! GetCatalogHandler - Query handler for the service catalog.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;

/// Handler for listing the services and the options offered with them.
///
/// The catalog is fixed reference data, so the query takes no input and
/// cannot fail.
pub struct GetCatalogHandler {
    catalog: Arc<ServiceCatalog>,
}

impl GetCatalogHandler {
    pub fn new(catalog: Arc<ServiceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self) -> ServiceCatalog {
        self.catalog.as_ref().clone()
    }
}
