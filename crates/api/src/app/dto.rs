use serde::{Deserialize, Serialize};

use tally_accounts::NewAccount;
use tally_core::FieldViolations;
use tally_core::decode::null_as_default;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /accounts`. Both fields are optional (absent or `null`
/// means 0); unknown fields (including a client-chosen `id`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: i64,
}

impl From<CreateAccountRequest> for NewAccount {
    fn from(body: CreateAccountRequest) -> Self {
        NewAccount::new(body.limit, body.balance)
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// One entry of an error envelope: a message or a field -> messages map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    Message(String),
    Fields(FieldViolations),
}

/// `{"errors": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorsBody {
    pub errors: Vec<ErrorEntry>,
}

impl ErrorsBody {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorEntry::Message(message.into())],
        }
    }

    pub fn fields(violations: FieldViolations) -> Self {
        Self {
            errors: vec![ErrorEntry::Fields(violations)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_missing_fields() {
        let body: CreateAccountRequest = serde_json::from_str(r#"{"balance": 10, "id": 99}"#).unwrap();
        assert_eq!(NewAccount::from(body), NewAccount::new(0, 10));

        let body: CreateAccountRequest =
            serde_json::from_str(r#"{"limit": null, "balance": 5}"#).unwrap();
        assert_eq!(NewAccount::from(body), NewAccount::new(0, 5));

        let body: CreateAccountRequest =
            serde_json::from_str(r#"{"limit": -20, "balance": null}"#).unwrap();
        assert_eq!(NewAccount::from(body), NewAccount::new(-20, 0));
    }

    #[test]
    fn envelope_mixes_messages_and_field_maps() {
        let mut violations = FieldViolations::new();
        violations.add("amount", "bad");

        let json = serde_json::to_value(ErrorsBody::fields(violations)).unwrap();
        assert_eq!(json, serde_json::json!({ "errors": [{ "amount": ["bad"] }] }));

        let json = serde_json::to_value(ErrorsBody::message("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "errors": ["nope"] }));
    }
}
