//! Gift card balance endpoints.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use springboard_ledger::{BalanceResponse, GiftCardOperation};

use crate::error::AppError;
use crate::routes::forbidden;
use crate::scenarios;
use crate::state::AppState;

/// Creates the gift cards router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/check_balance", post(check_balance).fallback(forbidden))
        .route("/capture", post(capture).fallback(forbidden))
        .route("/refund", post(refund).fallback(forbidden))
        .route("/void", post(void).fallback(forbidden))
        .merge(scenarios::routes(
            GiftCardOperation::ALL.map(GiftCardOperation::as_str),
        ))
        .with_state(state)
}

/// Runs one operation with the store locked for its whole duration.
///
/// The body is taken as raw bytes rather than through the `Json` extractor so
/// that a missing content type or malformed JSON surfaces as the API's own
/// `Invalid Request` error instead of axum's rejection.
async fn perform(
    operation: GiftCardOperation,
    state: &AppState,
    body: &[u8],
) -> Result<Json<BalanceResponse>, AppError> {
    let mut store = state.store().lock().await;
    let response = operation
        .apply(&mut store, state.profile(), body)
        .map_err(|e| {
            tracing::debug!(%operation, error = %e, "gift card operation rejected");
            AppError::from(e)
        })?;
    Ok(Json(response))
}

/// POST /gift_cards/check_balance
///
/// Returns the balance of an existing card. Never mutates.
async fn check_balance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BalanceResponse>, AppError> {
    perform(GiftCardOperation::CheckBalance, &state, &body).await
}

/// POST /gift_cards/capture
///
/// Debits `amount` from `number`. Fails when the amount exceeds the balance.
async fn capture(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BalanceResponse>, AppError> {
    perform(GiftCardOperation::Capture, &state, &body).await
}

/// POST /gift_cards/refund
///
/// Credits `amount` to `number`. Under the numeric profile an unknown card is
/// created at zero first.
async fn refund(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BalanceResponse>, AppError> {
    perform(GiftCardOperation::Refund, &state, &body).await
}

/// POST /gift_cards/void
///
/// Credits `amount` back to an existing card without any sufficiency check.
async fn void(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BalanceResponse>, AppError> {
    perform(GiftCardOperation::Void, &state, &body).await
}
