//! GetFormViewHandler - Query handler for rendering a form's current screen.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::FormId;
use crate::domain::form::FormError;
use crate::domain::view::{self, ScreenView};
use crate::ports::FormStore;

/// Query to render whatever screen a form is currently on.
#[derive(Debug, Clone)]
pub struct GetFormViewQuery {
    pub form_id: FormId,
}

/// Handler for rendering form screens.
pub struct GetFormViewHandler {
    store: Arc<dyn FormStore>,
    catalog: Arc<ServiceCatalog>,
}

impl GetFormViewHandler {
    pub fn new(store: Arc<dyn FormStore>, catalog: Arc<ServiceCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, query: GetFormViewQuery) -> Result<ScreenView, FormError> {
        let form = self.store.fetch(&query.form_id).await?;

        Ok(view::render(&form, &self.catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFormStore;
    use crate::domain::form::{ContactForm, FieldChange, Screen};

    fn test_catalog() -> Arc<ServiceCatalog> {
        Arc::new(ServiceCatalog::standard().clone())
    }

    #[tokio::test]
    async fn renders_the_screen_the_form_is_on() {
        let mut form = ContactForm::new(FormId::new());
        form.apply(FieldChange::Name("Taro Yamada".to_string()))
            .unwrap();
        let store = Arc::new(InMemoryFormStore::new());
        store.insert(&form).await.unwrap();
        let handler = GetFormViewHandler::new(store, test_catalog());

        let result = handler
            .handle(GetFormViewQuery { form_id: *form.id() })
            .await
            .unwrap();

        assert_eq!(result.screen(), Screen::Input);
        let ScreenView::Input(input) = result else {
            panic!("expected input view");
        };
        assert_eq!(input.fields.name, "Taro Yamada");
    }

    #[tokio::test]
    async fn unknown_form_is_not_found() {
        let store = Arc::new(InMemoryFormStore::new());
        let handler = GetFormViewHandler::new(store, test_catalog());

        let result = handler
            .handle(GetFormViewQuery {
                form_id: FormId::new(),
            })
            .await;

        assert!(matches!(result, Err(FormError::NotFound(_))));
    }
}
