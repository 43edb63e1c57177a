//! Springboard Ledger - gift card balances and request validation for the
//! Springboard Retail webhooks mock.
//!
//! This crate holds everything that has state or rules: the in-memory
//! [`BalanceStore`], the validation predicates, the deployment [`Profile`]s
//! and the per-operation state machine. It knows nothing about HTTP.

pub mod error;
pub mod operations;
pub mod payload;
pub mod profile;
pub mod store;
pub mod types;
pub mod validation;

pub use error::{LedgerError, OperationError};
pub use operations::GiftCardOperation;
pub use payload::Payload;
pub use profile::{ExistencePolicy, Profile, ProfileKind};
pub use store::BalanceStore;
pub use types::BalanceResponse;
pub use validation::{FailureKind, ValidationFailure};
