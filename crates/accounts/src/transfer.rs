use std::sync::Arc;

use serde::Deserialize;

use tally_core::decode::null_as_default;
use tally_core::{AccountId, DomainError, DomainResult, FieldViolations, ValueObject};

use crate::account::Account;
use crate::store::{AccountStore, position_of};

/// Request to move `amount` from `sender` to `recipient`.
///
/// Fields are raw integers so that zero/negative input can be reported as a
/// violation instead of failing to parse. Missing and `null` fields decode
/// as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TransferRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sender: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipient: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: i64,
}

impl ValueObject for TransferRequest {}

impl TransferRequest {
    pub fn new(sender: i64, recipient: i64, amount: i64) -> Self {
        Self {
            sender,
            recipient,
            amount,
        }
    }

    /// Check the request shape, reporting every offending field at once.
    pub fn validate(&self) -> DomainResult<()> {
        let mut violations = FieldViolations::new();

        if self.amount <= 0 {
            violations.add(
                "amount",
                "Amount field is required and should be positive number",
            );
        }
        if self.sender <= 0 {
            violations.add(
                "sender",
                "Sender field is required and should be positive number",
            );
        }
        if self.recipient <= 0 {
            violations.add(
                "recipient",
                "Recipient field is required and should be positive number",
            );
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(violations))
        }
    }
}

/// Applies transfers against a shared [`AccountStore`].
#[derive(Debug, Clone)]
pub struct TransferEngine {
    store: Arc<AccountStore>,
}

impl TransferEngine {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }

    /// Validate, resolve, limit-check and apply a transfer.
    ///
    /// Returns the sender as it stands after the transfer. On any error no
    /// balance has changed.
    pub fn transfer(&self, request: &TransferRequest) -> DomainResult<Account> {
        if let Err(err) = request.validate() {
            tracing::debug!(error = %err, "transfer rejected");
            return Err(err);
        }

        let sender_id = AccountId::new(request.sender);
        let recipient_id = AccountId::new(request.recipient);
        let amount = request.amount;

        // Recipient first: decides which id is reported when both are missing.
        let (recipient_idx, sender_idx) = {
            let accounts = self.store.read()?;
            let recipient = position_of(&accounts, recipient_id)
                .ok_or(DomainError::not_found(recipient_id))?;
            let sender =
                position_of(&accounts, sender_id).ok_or(DomainError::not_found(sender_id))?;
            (recipient, sender)
        };

        // Accounts are never removed, so the resolved positions are still valid.
        let mut accounts = self.store.write()?;

        let before = accounts[sender_idx].balance;
        let debited = before
            .checked_sub(amount)
            .ok_or(DomainError::overflow(sender_id))?;
        if accounts[sender_idx].limit > debited {
            tracing::debug!(sender = %sender_id, balance = before, amount, "limit exceeded");
            return Err(DomainError::limit_exceeded(sender_id));
        }

        accounts[sender_idx].balance = debited;
        match accounts[recipient_idx].balance.checked_add(amount) {
            Some(credited) => accounts[recipient_idx].balance = credited,
            None => {
                accounts[sender_idx].balance = before;
                return Err(DomainError::overflow(recipient_id));
            }
        }

        let sender = accounts[sender_idx].clone();
        drop(accounts);

        tracing::info!(
            sender = %sender_id,
            recipient = %recipient_id,
            amount,
            "transfer applied"
        );
        Ok(sender)
    }
}
