//! Domain error model.

use thiserror::Error;

use crate::id::AccountId;
use crate::violations::FieldViolations;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is request-scoped and recoverable: the caller reports it and
/// the process keeps serving.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more request fields were malformed. All violations are kept.
    #[error("validation failed: {0}")]
    Validation(FieldViolations),

    /// A referenced account does not exist.
    #[error("{}", not_found_message(.0))]
    NotFound(AccountId),

    /// The debit would take the account below its limit.
    #[error("Not enough credits on account \"{0}\"")]
    LimitExceeded(AccountId),

    /// The balance change does not fit the balance representation.
    #[error("balance of account \"{0}\" would overflow")]
    Overflow(AccountId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A thread panicked while holding the account store lock.
    #[error("account store lock poisoned")]
    StorePoisoned,
}

/// Message reported for an unknown account id, also used for ids that do
/// not parse.
pub fn not_found_message(id: impl core::fmt::Display) -> String {
    format!("Account with id \"{id}\" not found")
}

impl DomainError {
    pub fn validation(violations: FieldViolations) -> Self {
        Self::Validation(violations)
    }

    pub fn not_found(id: AccountId) -> Self {
        Self::NotFound(id)
    }

    pub fn limit_exceeded(id: AccountId) -> Self {
        Self::LimitExceeded(id)
    }

    pub fn overflow(id: AccountId) -> Self {
        Self::Overflow(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_quotes_the_id() {
        let err = DomainError::not_found(AccountId::new(999));
        assert_eq!(err.to_string(), "Account with id \"999\" not found");
    }

    #[test]
    fn raw_text_ids_share_the_not_found_wording() {
        assert_eq!(
            not_found_message("abc"),
            DomainError::not_found(AccountId::new(7))
                .to_string()
                .replace('7', "abc")
        );
    }

    #[test]
    fn limit_exceeded_names_the_sender() {
        let err = DomainError::limit_exceeded(AccountId::new(4));
        assert_eq!(err.to_string(), "Not enough credits on account \"4\"");
    }
}
