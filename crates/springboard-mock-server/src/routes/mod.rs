//! API routes for the Springboard mock server.

pub mod custom_payment;
pub mod gift_cards;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Plain-text banner served at `/`.
pub const BANNER: &str = "Springboard Retail Webhooks Mock API";

/// Creates the main router with all routes mounted.
///
/// Anything that does not match a route, including a known path hit with
/// the wrong method, is answered with 403 `Forbidden`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner).fallback(forbidden))
        .nest("/gift_cards", gift_cards::router(state))
        .nest("/custom_payment", custom_payment::router())
        .fallback(forbidden)
        .layer(TraceLayer::new_for_http())
}

/// GET /
async fn banner() -> &'static str {
    BANNER
}

/// Default response for unmatched routes and methods.
pub async fn forbidden() -> AppError {
    AppError::Forbidden
}
