//! Ledger domain models and the weighted-split engine.

pub mod amount;
pub mod expense;
pub mod transaction;
pub mod weight;

pub use amount::Amount;
pub use expense::Expense;
pub use transaction::{Description, Timestamp, Transaction};
pub use weight::Weight;
