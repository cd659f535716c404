#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps a running ledger of income and expense line items,
//! derives balance and expense shares, and drives a pluggable view.

pub mod cli;
pub mod config;
pub mod controller;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Tracker tracing initialized.");
    });
}
