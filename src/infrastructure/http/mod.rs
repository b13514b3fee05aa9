//! HTTP surface - JSON API, static assets and server lifecycle

pub mod handlers;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::application::errors::ServerError;
use crate::application::services::{ChatService, PaymentService, WalletService};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    pub payments: Arc<PaymentService>,
    pub wallets: Arc<WalletService>,
    pub default_session_id: Arc<str>,
}

/// API routes with static assets as the fallback. Dotfiles are never served.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let assets: Router = Router::new()
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(hide_dotfiles));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/api/payment", post(handlers::payment))
        .route("/api/wallet-info", get(handlers::wallet_info))
        .route("/api/health", get(handlers::health))
        .route("/api/session", post(handlers::create_session))
        .route("/api/session/{id}", delete(handlers::clear_session))
        .fallback_service(assets)
        .layer(cors)
        .with_state(state)
}

async fn hide_dotfiles(request: Request, next: Next) -> Response {
    if request.uri().path().split('/').any(is_hidden_segment) {
        tracing::warn!("Refused hidden path: {}", request.uri().path());
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(request).await
}

// ServeDir percent-decodes, so `%2e` counts as a dot
fn is_hidden_segment(segment: &str) -> bool {
    segment.starts_with('.') || segment.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("%2e"))
}

/// Bind and serve until ctrl-c
pub async fn serve(router: Router, address: &str) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.to_string(),
            source,
        })?;

    tracing::info!("RentBot AI server running on http://{}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
