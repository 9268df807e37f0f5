#![doc(test(attr(deny(warnings))))]

//! Sales Report loads client, product, order and monthly-target records,
//! attaches each entity to its slice of the order ledger, and produces the
//! revenue rollups, rankings and monthly series behind a sales dashboard.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ingest;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Sales Report tracing initialized.");
    });
}
