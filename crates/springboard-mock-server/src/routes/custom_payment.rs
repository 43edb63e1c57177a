//! Custom payment webhook endpoints.
//!
//! These are pure fixtures: the canonical path of each operation always
//! succeeds, and the suffixed paths return the canned error shapes.

use axum::{routing::post, Json, Router};

use crate::routes::forbidden;
use crate::scenarios::{self, MessageBody};

/// Operations of the custom payment webhook family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomPaymentOperation {
    Capture,
    Refund,
    Void,
}

impl CustomPaymentOperation {
    pub const ALL: [CustomPaymentOperation; 3] = [
        CustomPaymentOperation::Capture,
        CustomPaymentOperation::Refund,
        CustomPaymentOperation::Void,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CustomPaymentOperation::Capture => "capture",
            CustomPaymentOperation::Refund => "refund",
            CustomPaymentOperation::Void => "void",
        }
    }
}

/// Creates the custom payment router.
pub fn router() -> Router {
    let operations = CustomPaymentOperation::ALL.map(CustomPaymentOperation::as_str);

    operations
        .into_iter()
        .fold(Router::new(), |router, operation| {
            router.route(
                &format!("/{}", operation),
                post(success).fallback(forbidden),
            )
        })
        .merge(scenarios::routes(operations))
}

/// POST /custom_payment/{operation}
///
/// Always succeeds. Reads no input and touches no state.
async fn success() -> Json<MessageBody> {
    Json(MessageBody { message: "Success" })
}
