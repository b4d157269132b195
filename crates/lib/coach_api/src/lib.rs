//! # coach_api
//!
//! HTTP API library for Coach.

pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use coach_core::provider::ChatProvider;
use coach_core::settings::ChatSettings;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{chat, health};

pub const POST_API_CHAT: &str = "/api/chat";
pub const GET_API_HEALTH: &str = "/api/health";

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chat handler behaviour.
    pub settings: ChatSettings,
    /// Upstream chat-completion provider.
    pub provider: Arc<dyn ChatProvider>,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(POST_API_CHAT, post(chat::chat_handler))
        .route(GET_API_HEALTH, get(health::health_handler))
        .layer(cors)
        .with_state(state)
}
