pub mod actions;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::actions::discord::DiscordNotifier;
use crate::actions::sheet::SheetClient;
use crate::config::{Config, Variant};
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config) -> Router {
    let sheet = match config.variant {
        Variant::Sheet => config.storage_url.as_deref().map(SheetClient::new),
        Variant::Relay => None,
    };
    if config.variant == Variant::Sheet && sheet.is_none() {
        tracing::warn!("No storage endpoint configured, every application will be rejected");
    }

    let notifier = DiscordNotifier::new(config.webhook_url.clone(), config.variant);
    let max_body_size = config.max_body_size;

    tracing::info!("Serving the {:?} variant", config.variant);

    let state: SharedState = Arc::new(AppState {
        config,
        sheet,
        notifier,
    });

    Router::new()
        .merge(routes::apply_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
