use serde::Serialize;

use tally_core::{AccountId, Entity, ValueObject};

/// A ledger entry: identity, credit limit and current balance.
///
/// Amounts are in minor currency units. `limit` is the lowest balance a debit
/// may leave behind and may be negative (overdraft).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub(crate) id: AccountId,
    pub(crate) limit: i64,
    pub(crate) balance: i64,
}

impl Account {
    pub(crate) fn new(id: AccountId, opening: NewAccount) -> Self {
        Self {
            id,
            limit: opening.limit,
            balance: opening.balance,
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Opening terms for an account that does not exist yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewAccount {
    pub limit: i64,
    pub balance: i64,
}

impl NewAccount {
    pub fn new(limit: i64, balance: i64) -> Self {
        Self { limit, balance }
    }
}

impl ValueObject for NewAccount {}
