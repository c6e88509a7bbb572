#![doc(test(attr(deny(warnings))))]

//! Budget Ledger holds the state, month filtering, and persistence primitives
//! behind a monthly income/expense tracker. The rendering layer owns the
//! widgets; this crate owns everything the widgets display.

pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}
