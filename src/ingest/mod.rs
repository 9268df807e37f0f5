//! CSV ingestion for the four input files.
//!
//! Rows are validated here; the aggregation core only ever sees well-formed
//! records.

pub mod entities;
pub mod orders;
pub mod targets;

use std::{fs::File, path::Path};

use csv::{ReaderBuilder, Trim};
use tracing::info;

use crate::{
    config::Config,
    domain::{Client, Ledger, Product, TargetSeries},
    errors::{ReportError, Result},
};

pub use entities::{read_clients, read_clients_from_reader, read_products, read_products_from_reader};
pub use orders::{parse_date, read_orders, read_orders_from_reader};
pub use targets::{read_targets, read_targets_from_reader};

/// Everything loaded from the data directory.
#[derive(Debug, Clone)]
pub struct DataSet {
    pub ledger: Ledger,
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub targets: TargetSeries,
}

/// Reads the configured client, product, order, and target files.
pub fn load_dataset(config: &Config) -> Result<DataSet> {
    let files = &config.files;
    let clients = read_clients(&config.data_path(&files.clients))?;
    let products = read_products(&config.data_path(&files.products))?;
    let ledger = read_orders(&config.data_path(&files.orders), &config.date_formats)?;
    let targets = read_targets(&config.data_path(&files.targets))?;
    info!(
        clients = clients.len(),
        products = products.len(),
        orders = ledger.len(),
        "data set loaded"
    );
    Ok(DataSet {
        ledger,
        clients,
        products,
        targets,
    })
}

pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| ReportError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).trim(Trim::All);
    builder
}

pub(crate) fn malformed(source_name: &str, line: u64, reason: impl Into<String>) -> ReportError {
    ReportError::MalformedRow {
        source_name: source_name.to_string(),
        line,
        reason: reason.into(),
    }
}

/// Line number of a CSV error, falling back to `fallback`.
pub(crate) fn error_line(err: &csv::Error, fallback: u64) -> u64 {
    err.position().map(|pos| pos.line()).unwrap_or(fallback)
}
