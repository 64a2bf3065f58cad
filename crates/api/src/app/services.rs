use std::sync::Arc;

use tally_accounts::{Account, AccountStore, NewAccount, TransferEngine, TransferRequest};
use tally_core::{AccountId, DomainResult};

use crate::config::ApiConfig;

/// Domain services shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppServices {
    store: Arc<AccountStore>,
    transfers: TransferEngine,
}

impl AppServices {
    pub fn new(store: Arc<AccountStore>) -> Self {
        let transfers = TransferEngine::new(Arc::clone(&store));
        Self { store, transfers }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let store = if config.seed {
            AccountStore::seeded()
        } else {
            AccountStore::new()
        };
        tracing::info!(seeded = config.seed, "account store ready");
        Self::new(Arc::new(store))
    }

    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }

    pub fn accounts_list(&self) -> DomainResult<Vec<Account>> {
        self.store.list()
    }

    pub fn account_get(&self, id: AccountId) -> DomainResult<Account> {
        self.store.find_by_id(id)
    }

    pub fn account_create(&self, terms: NewAccount) -> DomainResult<Account> {
        self.store.create_account(terms)
    }

    pub fn transfer(&self, request: &TransferRequest) -> DomainResult<Account> {
        self.transfers.transfer(request)
    }
}
