use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_core::{AccountId, DomainError, DomainResult};

use crate::account::{Account, NewAccount};

/// Opening terms of the accounts every fresh process starts with.
pub const BOOTSTRAP_ACCOUNTS: [NewAccount; 3] = [
    NewAccount { limit: 0, balance: 1000 },
    NewAccount { limit: 0, balance: 3000 },
    NewAccount { limit: 0, balance: 0 },
];

/// In-memory, append-only account store.
///
/// Accounts are kept in creation order and never removed, so an account's
/// position in the backing vector is stable once assigned.
///
/// The write guard is the ledger's single critical section: it covers id
/// allocation + append, and a transfer's limit check + balance update.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `opening` accounts, ids assigned in order.
    pub fn with_accounts(opening: impl IntoIterator<Item = NewAccount>) -> Self {
        let accounts = opening
            .into_iter()
            .zip(1..)
            .map(|(terms, id)| Account::new(AccountId::new(id), terms))
            .collect();

        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Store holding the three bootstrap accounts (balances 1000, 3000, 0).
    pub fn seeded() -> Self {
        Self::with_accounts(BOOTSTRAP_ACCOUNTS)
    }

    /// Append a new account; its id is the current count + 1.
    pub fn create_account(&self, terms: NewAccount) -> DomainResult<Account> {
        let mut accounts = self.write()?;

        // Allocation and append share the guard, so ids never collide.
        let id = AccountId::new(accounts.len() as i64 + 1);
        let account = Account::new(id, terms);
        accounts.push(account.clone());

        tracing::debug!(account_id = %id, limit = terms.limit, balance = terms.balance, "account created");
        Ok(account)
    }

    pub fn find_by_id(&self, id: AccountId) -> DomainResult<Account> {
        let accounts = self.read()?;
        position_of(&accounts, id)
            .map(|idx| accounts[idx].clone())
            .ok_or(DomainError::not_found(id))
    }

    /// All accounts in creation order.
    pub fn list(&self) -> DomainResult<Vec<Account>> {
        Ok(self.read()?.clone())
    }

    pub fn len(&self) -> DomainResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.read()?.is_empty())
    }

    pub(crate) fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<Account>>> {
        self.accounts.read().map_err(|_| DomainError::StorePoisoned)
    }

    pub(crate) fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<Account>>> {
        self.accounts.write().map_err(|_| DomainError::StorePoisoned)
    }
}

/// Linear scan for the first account carrying `id`.
pub(crate) fn position_of(accounts: &[Account], id: AccountId) -> Option<usize> {
    accounts.iter().position(|a| a.id == id)
}
