//! In-memory gift card balance store.

use std::collections::HashMap;

use bigdecimal::BigDecimal;

use crate::error::LedgerError;

/// Mutable mapping from gift card number to balance.
///
/// Entries are never removed. Lookups are strict: a missing number is only
/// created when a caller asks for it explicitly through [`BalanceStore::adjust`].
#[derive(Debug, Clone, Default)]
pub struct BalanceStore {
    balances: HashMap<String, BigDecimal>,
}

impl BalanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given seed balances.
    pub fn with_seed<I, K>(seed: I) -> Self
    where
        I: IntoIterator<Item = (K, BigDecimal)>,
        K: Into<String>,
    {
        Self {
            balances: seed.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, number: &str) -> Option<&BigDecimal> {
        self.balances.get(number)
    }

    pub fn contains(&self, number: &str) -> bool {
        self.balances.contains_key(number)
    }

    pub fn set(&mut self, number: impl Into<String>, balance: BigDecimal) {
        self.balances.insert(number.into(), balance);
    }

    /// Applies `delta` to the balance of `number` and returns the new balance.
    ///
    /// With `vivify` set, an unknown number starts at zero before the delta is
    /// applied. Without it, an unknown number is an error and nothing changes.
    pub fn adjust(
        &mut self,
        number: &str,
        delta: &BigDecimal,
        vivify: bool,
    ) -> Result<BigDecimal, LedgerError> {
        if !vivify && !self.balances.contains_key(number) {
            return Err(LedgerError::UnknownGiftCard {
                number: number.to_string(),
            });
        }

        let balance = self
            .balances
            .entry(number.to_string())
            .or_insert_with(|| {
                tracing::debug!(number, "vivifying gift card at zero balance");
                BigDecimal::from(0)
            });

        *balance = &*balance + delta;
        Ok(balance.clone())
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
