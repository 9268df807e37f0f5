//! Persistent report settings: data file locations, rollup keys, and display
//! preferences.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, DataFiles};
