//! Shared application state.

use std::sync::Arc;

use bigdecimal::BigDecimal;
use springboard_ledger::{BalanceStore, Profile};
use tokio::sync::Mutex;

/// State injected into every stateful handler.
///
/// The store sits behind a single mutex. Handlers hold the lock for the whole
/// validate-then-mutate sequence, so mutations are applied one at a time.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<Mutex<BalanceStore>>,
    profile: Arc<Profile>,
}

impl AppState {
    pub fn new(store: BalanceStore, profile: Profile) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            profile: Arc::new(profile),
        }
    }

    pub fn store(&self) -> &Mutex<BalanceStore> {
        &self.store
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Current balance of `number`, if the card exists.
    pub async fn balance(&self, number: &str) -> Option<BigDecimal> {
        self.store.lock().await.get(number).cloned()
    }
}
