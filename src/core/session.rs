//! Loaded data plus the defaults the report views need.
//!
//! The shell receives one `ReportSession` at construction instead of reaching
//! for process-wide state.

use std::sync::Arc;

use tracing::info;

use crate::{
    config::Config,
    domain::{Client, Ledger, Product, RollupKeys, TargetSeries},
    errors::{ReportError, Result},
    ingest::{self, DataSet},
};

use super::{LedgerEntity, ReportAggregator, DEFAULT_COUNTERPART_TOP_N, DEFAULT_GLOBAL_TOP_N};

#[derive(Debug, Clone)]
pub struct ReportSession {
    ledger: Arc<Ledger>,
    clients: Vec<Client>,
    products: Vec<Product>,
    targets: TargetSeries,
    rollup_keys: RollupKeys,
    counterpart_top_n: usize,
    global_top_n: usize,
}

impl ReportSession {
    /// Attaches the ledger to every client and product.
    pub fn new(
        ledger: Ledger,
        mut clients: Vec<Client>,
        mut products: Vec<Product>,
        targets: TargetSeries,
    ) -> Self {
        let ledger = ledger.into_shared();
        for client in &mut clients {
            client.attach_orders(&ledger);
        }
        for product in &mut products {
            product.attach_orders(&ledger);
        }
        info!(
            orders = ledger.len(),
            clients = clients.len(),
            products = products.len(),
            "report session ready"
        );
        Self {
            ledger,
            clients,
            products,
            targets,
            rollup_keys: RollupKeys::default(),
            counterpart_top_n: DEFAULT_COUNTERPART_TOP_N,
            global_top_n: DEFAULT_GLOBAL_TOP_N,
        }
    }

    pub fn with_rollup_keys(mut self, keys: RollupKeys) -> Self {
        self.rollup_keys = keys;
        self
    }

    pub fn with_top_n(mut self, counterpart: usize, global: usize) -> Self {
        self.counterpart_top_n = counterpart;
        self.global_top_n = global;
        self
    }

    pub fn from_dataset(data: DataSet, config: &Config) -> Self {
        Self::new(data.ledger, data.clients, data.products, data.targets)
            .with_rollup_keys(config.rollup_keys.clone())
            .with_top_n(config.counterpart_top_n, config.global_top_n)
    }

    /// Reads the configured files and builds a session from them.
    pub fn load(config: &Config) -> Result<Self> {
        let data = ingest::load_dataset(config)?;
        Ok(Self::from_dataset(data, config))
    }

    pub fn ledger(&self) -> &Arc<Ledger> {
        &self.ledger
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn targets(&self) -> &TargetSeries {
        &self.targets
    }

    pub fn rollup_keys(&self) -> &RollupKeys {
        &self.rollup_keys
    }

    pub fn counterpart_top_n(&self) -> usize {
        self.counterpart_top_n
    }

    pub fn global_top_n(&self) -> usize {
        self.global_top_n
    }

    pub fn client(&self, id: &str) -> Result<&Client> {
        self.clients
            .iter()
            .find(|client| client.id() == id)
            .ok_or_else(|| ReportError::ClientNotFound(id.to_string()))
    }

    pub fn product(&self, id: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|product| product.id() == id)
            .ok_or_else(|| ReportError::ProductNotFound(id.to_string()))
    }

    pub fn client_ids(&self) -> Vec<&str> {
        self.clients.iter().map(|client| client.id()).collect()
    }

    pub fn product_ids(&self) -> Vec<&str> {
        self.products.iter().map(|product| product.id()).collect()
    }

    pub fn report(&self) -> ReportAggregator<'_> {
        ReportAggregator::new(
            &self.ledger,
            &self.clients,
            &self.products,
            &self.rollup_keys,
        )
    }
}
