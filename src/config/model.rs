use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    core::{DEFAULT_COUNTERPART_TOP_N, DEFAULT_GLOBAL_TOP_N},
    domain::RollupKeys,
};

use super::ConfigError;

/// Names of the four input files inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataFiles {
    pub clients: String,
    pub products: String,
    pub orders: String,
    pub targets: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            clients: "client_data.csv".into(),
            products: "product_data.csv".into(),
            orders: "order_data.csv".into(),
            targets: "monthly_target.csv".into(),
        }
    }
}

/// Stores report settings and CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the input files. Defaults to the working directory.
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub files: DataFiles,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// chrono formats tried in order when parsing order dates.
    #[serde(default = "Config::default_date_formats")]
    pub date_formats: Vec<String>,
    #[serde(default)]
    pub rollup_keys: RollupKeys,
    #[serde(default = "Config::default_counterpart_top_n")]
    pub counterpart_top_n: usize,
    #[serde(default = "Config::default_global_top_n")]
    pub global_top_n: usize,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            files: DataFiles::default(),
            currency: Self::default_currency(),
            date_formats: Self::default_date_formats(),
            rollup_keys: RollupKeys::default(),
            counterpart_top_n: Self::default_counterpart_top_n(),
            global_top_n: Self::default_global_top_n(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "NZD".into()
    }

    pub fn default_date_formats() -> Vec<String> {
        vec!["%Y-%m-%d".into(), "%m/%d/%Y".into(), "%d/%m/%Y".into()]
    }

    pub fn default_counterpart_top_n() -> usize {
        DEFAULT_COUNTERPART_TOP_N
    }

    pub fn default_global_top_n() -> usize {
        DEFAULT_GLOBAL_TOP_N
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Full path of a file inside the data directory.
    pub fn data_path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.resolve_data_dir().join(file)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.date_formats.is_empty() {
            return Err(ConfigError::Invalid(
                "date_formats must list at least one format".into(),
            ));
        }
        if self.counterpart_top_n == 0 || self.global_top_n == 0 {
            return Err(ConfigError::Invalid(
                "top-N sizes must be greater than zero".into(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if let Some(duplicate) = self.rollup_keys.find_duplicate() {
            return Err(ConfigError::Invalid(format!("rollup_keys {duplicate}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RollupKey;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{ "currency": "VND" }"#).unwrap();
        assert_eq!(config.currency, "VND");
        assert_eq!(config.files, DataFiles::default());
        assert_eq!(config.counterpart_top_n, 5);
        assert_eq!(config.global_top_n, 10);
        assert_eq!(config.rollup_keys, RollupKeys::default());
    }

    #[test]
    fn data_path_joins_data_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("/srv/sales")),
            ..Config::default()
        };
        assert_eq!(
            config.data_path(&config.files.orders),
            PathBuf::from("/srv/sales/order_data.csv")
        );
    }

    #[test]
    fn validate_rejects_zero_top_n() {
        let config = Config {
            global_top_n: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_repeated_rollup_keys() {
        let mut config = Config::default();
        config
            .rollup_keys
            .categories
            .push(RollupKey::new("Fertilizer", "NPK"));
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = Config::default();
        config
            .rollup_keys
            .provinces
            .push(RollupKey::exact("Ninh Thuan"));
        let err = config.validate().expect_err("label repeated");
        assert!(err.to_string().contains("Ninh Thuan"));
    }
}
