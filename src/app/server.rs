use crate::adapters::selro::SelroClient;
use crate::app::auth::require_bearer;
use crate::app::handlers::{get_unshipped_orders, health_check};
use crate::config::ProxySettings;
use crate::core::paginator::Paginator;
use crate::utils::error::Result;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Read-only state cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub paginator: Paginator,
    pub auth_token: Arc<str>,
    pub max_pages: u32,
}

impl AppState {
    pub fn new(paginator: Paginator, auth_token: impl Into<Arc<str>>, max_pages: u32) -> Self {
        Self {
            paginator,
            auth_token: auth_token.into(),
            max_pages,
        }
    }

    pub fn from_settings(settings: &ProxySettings) -> Self {
        let client = SelroClient::with_base_url(
            settings.selro_api_url.clone(),
            settings.credentials.clone(),
        );
        let paginator = Paginator::with_page_delay(Arc::new(client), settings.page_delay);
        Self::new(paginator, settings.auth_token.as_str(), settings.max_pages)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/orders/unshipped", get(get_unshipped_orders))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(settings: ProxySettings) -> Result<()> {
    let app = build_router(AppState::from_settings(&settings));

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("🚀 Selro orders proxy listening on {}", settings.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
