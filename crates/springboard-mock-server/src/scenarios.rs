//! Canned error-scenario endpoints.
//!
//! Each operation family gets one endpoint per error shape so a client under
//! test can be pointed at a path and observe that exact failure. The routes
//! are generated from the shape table below; they read no input and never
//! touch the balance store.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::routes::forbidden;

/// Body of a JSON response carrying a `message` key.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Body of a JSON response carrying only an `error` key.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// The three wire shapes a real error channel might use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioShape {
    /// 400, `{"message": ...}`.
    MessageJson,
    /// 422, `{"error": ...}`.
    ErrorJson,
    /// 500, plain text.
    ErrorText,
}

impl ScenarioShape {
    pub const ALL: [ScenarioShape; 3] = [
        ScenarioShape::MessageJson,
        ScenarioShape::ErrorJson,
        ScenarioShape::ErrorText,
    ];

    /// Appended to the operation name to form the scenario path.
    pub fn suffix(self) -> &'static str {
        match self {
            ScenarioShape::MessageJson => "_error",
            ScenarioShape::ErrorJson => "_error_json",
            ScenarioShape::ErrorText => "_error_text",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ScenarioShape::MessageJson => StatusCode::BAD_REQUEST,
            ScenarioShape::ErrorJson => StatusCode::UNPROCESSABLE_ENTITY,
            ScenarioShape::ErrorText => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Route path for `operation` in this shape, e.g. `/capture_error_json`.
    pub fn path(self, operation: &str) -> String {
        format!("/{}{}", operation, self.suffix())
    }
}

impl IntoResponse for ScenarioShape {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ScenarioShape::MessageJson => (
                status,
                Json(MessageBody {
                    message: "Error example with message key",
                }),
            )
                .into_response(),
            ScenarioShape::ErrorJson => (
                status,
                Json(ErrorBody {
                    error: "Error example without message key",
                }),
            )
                .into_response(),
            ScenarioShape::ErrorText => (status, "Error example is not JSON").into_response(),
        }
    }
}

/// Builds every error-scenario route for the given operation names.
pub fn routes<S>(operations: impl IntoIterator<Item = &'static str>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    operations
        .into_iter()
        .flat_map(|operation| ScenarioShape::ALL.map(|shape| (operation, shape)))
        .fold(Router::new(), |router, (operation, shape)| {
            tracing::trace!(path = %shape.path(operation), "registering error scenario");
            router.route(
                &shape.path(operation),
                post(move || async move { shape }).fallback(forbidden),
            )
        })
}
