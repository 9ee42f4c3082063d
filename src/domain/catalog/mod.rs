//! Service catalog - the cascading-options lookup.
//!
//! Maps each offered service to the categories and plans that may be
//! selected with it. The catalog is pure reference data: selecting a
//! service narrows the valid categories (single choice) and plans
//! (multi choice) to the ones listed here.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One service and the options that go with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    name: String,
    categories: Vec<String>,
    plans: Vec<String>,
}

impl ServiceDefinition {
    /// Creates a service definition.
    pub fn new(
        name: impl Into<String>,
        categories: Vec<String>,
        plans: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            categories,
            plans,
        }
    }

    /// Returns the service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the categories offered with this service.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the plans offered with this service.
    pub fn plans(&self) -> &[String] {
        &self.plans
    }
}

/// Ordered collection of the services a form can be about.
///
/// Lookups are by exact service name. With a handful of services a
/// linear scan is all that is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    services: Vec<ServiceDefinition>,
}

static STANDARD_CATALOG: Lazy<ServiceCatalog> = Lazy::new(|| {
    fn options(prefix: &str, items: [&str; 3]) -> Vec<String> {
        items.iter().map(|i| format!("{} {}", prefix, i)).collect()
    }

    ServiceCatalog::new(vec![
        ServiceDefinition::new(
            "Service A",
            options("Category", ["1", "2", "3"]),
            options("Plan", ["a", "b", "c"]),
        ),
        ServiceDefinition::new(
            "Service B",
            options("Category", ["4", "5", "6"]),
            options("Plan", ["d", "e", "f"]),
        ),
        ServiceDefinition::new(
            "Service C",
            options("Category", ["7", "8", "9"]),
            options("Plan", ["g", "h", "i"]),
        ),
    ])
});

impl ServiceCatalog {
    /// Creates a catalog from service definitions, preserving order.
    pub fn new(services: Vec<ServiceDefinition>) -> Self {
        Self { services }
    }

    /// Returns the built-in catalog of the three standard services.
    pub fn standard() -> &'static ServiceCatalog {
        &STANDARD_CATALOG
    }

    /// Returns all service definitions in catalog order.
    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }

    /// Returns the service names in catalog order.
    pub fn service_names(&self) -> Vec<String> {
        self.services.iter().map(|s| s.name.clone()).collect()
    }

    /// Looks up the options for a service, if it exists.
    pub fn options_for(&self, service: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.name == service)
    }

    /// Returns true if the catalog offers the named service.
    pub fn contains_service(&self, service: &str) -> bool {
        self.options_for(service).is_some()
    }

    /// Returns true if the category belongs to the named service.
    pub fn category_belongs_to(&self, service: &str, category: &str) -> bool {
        self.options_for(service)
            .map(|s| s.categories.iter().any(|c| c == category))
            .unwrap_or(false)
    }

    /// Returns true if the plan belongs to the named service.
    pub fn plan_belongs_to(&self, service: &str, plan: &str) -> bool {
        self.options_for(service)
            .map(|s| s.plans.iter().any(|p| p == plan))
            .unwrap_or(false)
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::standard().clone()
    }
}
