//! Accounts module (account store + transfer engine).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod account;
pub mod store;
pub mod transfer;

pub use account::{Account, NewAccount};
pub use store::AccountStore;
pub use transfer::{TransferEngine, TransferRequest};
