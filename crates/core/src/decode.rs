//! Request decoding helpers.

use serde::{Deserialize, Deserializer};

/// Decode a field so that an explicit `null` means the same as an absent one.
///
/// Pair with `#[serde(default)]` so missing fields take the default too.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Body {
        #[serde(default, deserialize_with = "super::null_as_default")]
        amount: i64,
    }

    #[test]
    fn null_missing_and_present_values() {
        let null: Body = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        let missing: Body = serde_json::from_str("{}").unwrap();
        let present: Body = serde_json::from_str(r#"{"amount": 12}"#).unwrap();

        assert_eq!(null, Body { amount: 0 });
        assert_eq!(missing, Body { amount: 0 });
        assert_eq!(present, Body { amount: 12 });
    }

    #[test]
    fn wrong_type_is_still_an_error() {
        assert!(serde_json::from_str::<Body>(r#"{"amount": "ten"}"#).is_err());
    }
}
