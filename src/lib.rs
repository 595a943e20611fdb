#![doc(test(attr(deny(warnings))))]

//! Split Ledger offers the immutable transaction record and exact
//! weighted-split arithmetic that power shared-expense tracking workflows.

pub mod errors;
pub mod ledger;
pub mod numeric;
pub mod person;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Split Ledger tracing initialized.");
    });
}
