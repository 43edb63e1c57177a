//! Deployment profiles.
//!
//! Two deployments of the mocked API disagree on how a missing card is
//! reported and on whether a refund may create a card. A [`Profile`] pins
//! those choices down so a single binary can impersonate either one.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::OperationError;
use crate::validation::ValidationFailure;

/// How an unknown gift card number is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistencePolicy {
    /// 400 with the structured `ExistingGiftCardNumber` validation error.
    ValidationError,
    /// 404 with an empty body.
    NotFound,
}

impl ExistencePolicy {
    /// Turns an existence failure into the error this policy reports.
    pub fn reject(self, failure: ValidationFailure) -> OperationError {
        match self {
            ExistencePolicy::ValidationError => OperationError::Validation(failure),
            ExistencePolicy::NotFound => OperationError::NotFound,
        }
    }
}

/// Behavioural switches for one deployment of the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub existence: ExistencePolicy,
    /// Refunds to unknown cards create them at zero instead of failing.
    pub refund_vivifies: bool,
    /// Upper bound on the card number length accepted by check-balance.
    pub check_balance_max_length: Option<usize>,
}

impl Profile {
    /// Numeric card numbers, structured 400s, vivifying refunds.
    pub fn numeric() -> Self {
        Self {
            existence: ExistencePolicy::ValidationError,
            refund_vivifies: true,
            check_balance_max_length: None,
        }
    }

    /// Alphanumeric card codes, empty 404s, strict refunds, 5-char limit.
    ///
    /// Existence is checked before length, and every card in the default
    /// alphanumeric seed is at most 5 characters long. `MaxLength` therefore
    /// only fires for longer cards loaded with an explicit `--seed`.
    pub fn alphanumeric() -> Self {
        Self {
            existence: ExistencePolicy::NotFound,
            refund_vivifies: false,
            check_balance_max_length: Some(5),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::numeric()
    }
}

/// Named profile presets, selectable at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileKind {
    #[default]
    Numeric,
    Alphanumeric,
}

impl ProfileKind {
    pub fn profile(self) -> Profile {
        match self {
            ProfileKind::Numeric => Profile::numeric(),
            ProfileKind::Alphanumeric => Profile::alphanumeric(),
        }
    }

    /// Balances loaded at start-up when no explicit seed is given.
    pub fn default_seed(self) -> Vec<(String, BigDecimal)> {
        let cards: [(&str, i64); 3] = match self {
            ProfileKind::Numeric => [("1", 10000), ("2", 10), ("3", 0)],
            ProfileKind::Alphanumeric => [("GC001", 10000), ("GC002", 10), ("GC003", 0)],
        };
        cards
            .into_iter()
            .map(|(number, balance)| (number.to_string(), BigDecimal::from(balance)))
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Numeric => "numeric",
            ProfileKind::Alphanumeric => "alphanumeric",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" => Ok(ProfileKind::Numeric),
            "alphanumeric" => Ok(ProfileKind::Alphanumeric),
            other => Err(format!(
                "Unsupported profile: {}. Supported: numeric, alphanumeric",
                other
            )),
        }
    }
}
