//! Springboard Mock Server - test double for the Springboard Retail gift card
//! and custom payment webhooks.
//!
//! The server keeps gift card balances in memory, validates requests the way
//! the real API does, and exposes canned error endpoints so client
//! integrations can be exercised against every failure shape.

pub mod config;
pub mod error;
pub mod routes;
pub mod scenarios;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
