//! Gift card balance operations.
//!
//! Every operation follows the same steps: parse the body, run the
//! operation's validation chain in order, apply the mutation, report the
//! resulting balance. Callers are expected to hold exclusive access to the
//! store for the whole call so check-then-mutate sequences cannot interleave.

use std::fmt;

use bigdecimal::BigDecimal;

use crate::error::OperationError;
use crate::payload::Payload;
use crate::profile::Profile;
use crate::store::BalanceStore;
use crate::types::BalanceResponse;
use crate::validation;

/// The four stateful gift card operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GiftCardOperation {
    CheckBalance,
    Capture,
    Refund,
    Void,
}

impl GiftCardOperation {
    pub const ALL: [GiftCardOperation; 4] = [
        GiftCardOperation::CheckBalance,
        GiftCardOperation::Capture,
        GiftCardOperation::Refund,
        GiftCardOperation::Void,
    ];

    /// Path segment and error-scenario prefix for this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            GiftCardOperation::CheckBalance => "check_balance",
            GiftCardOperation::Capture => "capture",
            GiftCardOperation::Refund => "refund",
            GiftCardOperation::Void => "void",
        }
    }

    /// Parses `body` and runs the operation against `store`.
    pub fn apply(
        self,
        store: &mut BalanceStore,
        profile: &Profile,
        body: &[u8],
    ) -> Result<BalanceResponse, OperationError> {
        let payload = Payload::parse(body)?;
        let balance = match self {
            GiftCardOperation::CheckBalance => check_balance(store, profile, &payload)?,
            GiftCardOperation::Capture => capture(store, profile, &payload)?,
            GiftCardOperation::Refund => refund(store, profile, &payload)?,
            GiftCardOperation::Void => void(store, profile, &payload)?,
        };
        Ok(BalanceResponse::new(balance))
    }
}

impl fmt::Display for GiftCardOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the card number against the store, reporting a miss the way the
/// profile's existence policy requires.
fn require_existing<'a>(
    store: &BalanceStore,
    profile: &Profile,
    number: Option<&'a str>,
) -> Result<&'a str, OperationError> {
    validation::existing_gift_card_number(store, number)
        .map_err(|failure| profile.existence.reject(failure))
}

/// Reports the current balance. Never mutates.
pub fn check_balance(
    store: &BalanceStore,
    profile: &Profile,
    payload: &Payload,
) -> Result<BigDecimal, OperationError> {
    let number = payload.number();
    let number = require_existing(store, profile, number.as_deref())?;
    if let Some(max) = profile.check_balance_max_length {
        validation::max_length("number", number, max)?;
    }

    let balance = store
        .get(number)
        .cloned()
        .ok_or_else(|| crate::LedgerError::UnknownGiftCard {
            number: number.to_string(),
        })?;
    tracing::debug!(number, %balance, "checked gift card balance");
    Ok(balance)
}

/// Debits `amount` from an existing card with sufficient funds.
pub fn capture(
    store: &mut BalanceStore,
    profile: &Profile,
    payload: &Payload,
) -> Result<BigDecimal, OperationError> {
    let number = payload.number();
    let number = require_existing(store, profile, number.as_deref())?;
    let amount = validation::amount_is_numeric(payload.amount())?;
    validation::available_balance_sufficient(store, number, &amount)?;
    let delta = -&amount;
    validation::resulting_balance_representable(store, number, &delta)?;

    let balance = store.adjust(number, &delta, false)?;
    tracing::info!(number, %amount, %balance, "captured gift card");
    Ok(balance)
}

/// Credits `amount` to a card, creating it at zero when the profile allows.
pub fn refund(
    store: &mut BalanceStore,
    profile: &Profile,
    payload: &Payload,
) -> Result<BigDecimal, OperationError> {
    let number = payload.number();
    let number = validation::number_required(number.as_deref())?;
    if !profile.refund_vivifies {
        require_existing(store, profile, Some(number))?;
    }
    let amount = validation::amount_is_numeric(payload.amount())?;
    validation::resulting_balance_representable(store, number, &amount)?;

    let balance = store.adjust(number, &amount, profile.refund_vivifies)?;
    tracing::info!(number, %amount, %balance, "refunded gift card");
    Ok(balance)
}

/// Credits `amount` back to an existing card. No sufficiency check.
pub fn void(
    store: &mut BalanceStore,
    profile: &Profile,
    payload: &Payload,
) -> Result<BigDecimal, OperationError> {
    let number = payload.number();
    let number = require_existing(store, profile, number.as_deref())?;
    let amount = validation::amount_is_numeric(payload.amount())?;
    validation::resulting_balance_representable(store, number, &amount)?;

    let balance = store.adjust(number, &amount, false)?;
    tracing::info!(number, %amount, %balance, "voided gift card capture");
    Ok(balance)
}
