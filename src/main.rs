//! Contact Flow server binary.
//!
//! Wires the in-memory store and stub mail gateway to the HTTP surface and
//! serves the three-step inquiry flow.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use contact_flow::adapters::http::{
    form_routes, mail_routes, service_routes, FormHandlers, MailHandlers,
};
use contact_flow::adapters::{InMemoryFormStore, StubMailGateway};
use contact_flow::application::handlers::form::{
    AbandonFormHandler, ConfirmFormHandler, GetCatalogHandler, GetFormViewHandler,
    ResetFormHandler, ReviseFormHandler, StartFormHandler, SubmitFormHandler, UpdateFormHandler,
};
use contact_flow::application::handlers::mail::ForwardSubmissionHandler;
use contact_flow::config::{AppConfig, ServerConfig};
use contact_flow::domain::catalog::ServiceCatalog;
use contact_flow::ports::{FormStore, MailGateway};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    let app = build_app(&config);

    info!(
        environment = ?config.server.environment,
        "contact-flow listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("contact-flow shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn build_app(config: &AppConfig) -> Router {
    let catalog = Arc::new(ServiceCatalog::standard().clone());
    let store: Arc<dyn FormStore> = Arc::new(InMemoryFormStore::new());
    let gateway: Arc<dyn MailGateway> = Arc::new(StubMailGateway::new(config.mail.clone()));

    let form_handlers = FormHandlers::new(
        Arc::new(StartFormHandler::new(store.clone(), catalog.clone())),
        Arc::new(UpdateFormHandler::new(store.clone(), catalog.clone())),
        Arc::new(ConfirmFormHandler::new(store.clone(), catalog.clone())),
        Arc::new(ReviseFormHandler::new(store.clone(), catalog.clone())),
        Arc::new(SubmitFormHandler::new(
            store.clone(),
            gateway.clone(),
            catalog.clone(),
        )),
        Arc::new(ResetFormHandler::new(store.clone(), catalog.clone())),
        Arc::new(AbandonFormHandler::new(store.clone())),
        Arc::new(GetFormViewHandler::new(store, catalog.clone())),
        Arc::new(GetCatalogHandler::new(catalog)),
    );
    let mail_handlers = MailHandlers::new(Arc::new(ForwardSubmissionHandler::new(gateway)));

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    Router::new()
        .route("/health", get(health))
        .nest("/api/forms", form_routes(form_handlers.clone()))
        .nest("/api/services", service_routes(form_handlers))
        .nest("/api/mail", mail_routes(mail_handlers))
        .layer(middleware)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}
