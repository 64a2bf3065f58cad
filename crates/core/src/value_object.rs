//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: a transfer request for 100 from account 1
/// to account 2 is the same request no matter how many times it is built.
/// Contrast with [`crate::Entity`], where two accounts with the same balance
/// are still different accounts.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount(i64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(100), Amount(100));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
