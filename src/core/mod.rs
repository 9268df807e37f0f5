//! Aggregation core: ledger access, per-entity aggregation, ledger-wide
//! reports, and the session that owns loaded data.

pub mod aggregate;
pub mod entity;
pub mod ledger_access;
pub mod report;
pub mod session;

pub use entity::{Attachment, LedgerEntity, DEFAULT_COUNTERPART_TOP_N};
pub use ledger_access::{select, OrderSubset};
pub use report::{ReportAggregator, DEFAULT_GLOBAL_TOP_N};
pub use session::ReportSession;
