//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Ledger snapshot configuration.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    /// Report defaults.
    #[serde(default)]
    pub report: ReportConfig,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Where the ledger snapshot is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Path to the JSON snapshot file.
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

/// Entry status selection as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSetting {
    /// Include draft and posted entries.
    Any,
    /// Posted entries only.
    Posted,
    /// Draft entries only.
    Draft,
}

impl std::str::FromStr for StatusSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "all" => Ok(Self::Any),
            "posted" => Ok(Self::Posted),
            "draft" => Ok(Self::Draft),
            _ => Err(format!("Unknown entry status filter: {s}")),
        }
    }
}

/// Report defaults.
///
/// The trial balance and the statements deliberately default to different
/// status filters; both stay configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Subtrees whose magnitude stays below this are hidden in statements.
    #[serde(default = "default_zero_epsilon")]
    pub zero_epsilon: Decimal,
    /// Status filter for the trial balance.
    #[serde(default = "default_trial_balance_status")]
    pub trial_balance_status: StatusSetting,
    /// Status filter for balance sheet, income statement, ledger detail and budgets.
    #[serde(default = "default_statement_status")]
    pub statement_status: StatusSetting,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            zero_epsilon: default_zero_epsilon(),
            trial_balance_status: default_trial_balance_status(),
            statement_status: default_statement_status(),
        }
    }
}

fn default_snapshot_path() -> String {
    "ledger.json".to_string()
}

fn default_zero_epsilon() -> Decimal {
    Decimal::new(1, 2)
}

fn default_trial_balance_status() -> StatusSetting {
    StatusSetting::Any
}

fn default_statement_status() -> StatusSetting {
    StatusSetting::Posted
}

fn default_log_filter() -> String {
    "mizan=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MIZAN").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Builds configuration from an inline TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has bad values.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
