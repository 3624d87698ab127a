//! Configuration for the case-view engine.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::algorithm::timeline::TimelineConfig;
use crate::error::{Error, Result};
use crate::utils::io::read_json_file;

/// Environment variable naming a JSON configuration file
pub const ENV_CONFIG_PATH: &str = "CASE_VIEW_CONFIG";
/// Environment variable overriding the contingency fee rate
pub const ENV_FEE_RATE: &str = "CASE_VIEW_FEE_RATE";
/// Environment variable overriding the CRN production delay (seconds)
pub const ENV_CRN_DELAY_SECS: &str = "CASE_VIEW_CRN_DELAY_SECS";
/// Environment variable overriding the document store refresh interval (seconds)
pub const ENV_REFRESH_SECS: &str = "CASE_VIEW_REFRESH_SECS";
/// Environment variable naming the case that uses the demo task roster
pub const ENV_DEMO_CASE: &str = "CASE_VIEW_DEMO_CASE";

/// Upper bound for the CRN delay and the refresh interval (one day)
pub const MAX_INTERVAL_SECS: u64 = 86_400;

/// Configuration for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Contingency fee as a fraction of the recovery
    pub fee_rate: Decimal,
    /// Delay before a CRN is produced after a settlement offer
    pub crn_delay_secs: u64,
    /// How often callers should refresh the shared document store
    pub refresh_interval_secs: u64,
    /// Case whose tasks come from the demo roster instead of its record
    pub demo_case_id: Option<String>,
    /// Key the document list is stored under
    pub document_store_key: String,
    /// Milestone offsets and SOL thresholds
    pub timeline: TimelineConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee_rate: dec!(0.33),
            crn_delay_secs: 30,
            refresh_interval_secs: 5,
            demo_case_id: None,
            document_store_key: "caseDocuments".to_string(),
            timeline: TimelineConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, decoded or validated
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config: Self = read_json_file(path, "engine configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `CASE_VIEW_*` environment variables.
    ///
    /// Unparsable values are ignored with a warning.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(rate) = env_value::<Decimal>(ENV_FEE_RATE) {
            self.fee_rate = rate;
        }
        if let Some(secs) = env_value::<u64>(ENV_CRN_DELAY_SECS) {
            self.crn_delay_secs = secs;
        }
        if let Some(secs) = env_value::<u64>(ENV_REFRESH_SECS) {
            self.refresh_interval_secs = secs;
        }
        if let Ok(case_id) = std::env::var(ENV_DEMO_CASE) {
            let case_id = case_id.trim();
            self.demo_case_id = (!case_id.is_empty()).then(|| case_id.to_string());
        }
        self
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns a configuration error describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if !(Decimal::ZERO..=Decimal::ONE).contains(&self.fee_rate) {
            return Err(Error::config(format!(
                "fee_rate must be between 0 and 1, got {}",
                self.fee_rate
            )));
        }
        if self.refresh_interval_secs == 0 {
            return Err(Error::config("refresh_interval_secs must be at least 1"));
        }
        if self.refresh_interval_secs > MAX_INTERVAL_SECS {
            return Err(Error::config(format!(
                "refresh_interval_secs must be at most {MAX_INTERVAL_SECS}, got {}",
                self.refresh_interval_secs
            )));
        }
        if self.crn_delay_secs > MAX_INTERVAL_SECS {
            return Err(Error::config(format!(
                "crn_delay_secs must be at most {MAX_INTERVAL_SECS}, got {}",
                self.crn_delay_secs
            )));
        }
        if self.document_store_key.trim().is_empty() {
            return Err(Error::config("document_store_key must not be empty"));
        }
        Ok(())
    }

    #[must_use]
    pub const fn crn_delay(&self) -> Duration {
        Duration::from_secs(self.crn_delay_secs)
    }

    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Whether the given case uses the demo task roster
    #[must_use]
    pub fn is_demo_case(&self, case_id: &str) -> bool {
        self.demo_case_id.as_deref() == Some(case_id)
    }
}

fn env_value<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring unparsable {name}={raw}");
            None
        }
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine Configuration:")?;
        writeln!(f, "  Fee Rate: {:.2}", self.fee_rate)?;
        writeln!(f, "  CRN Delay: {}s", self.crn_delay_secs)?;
        writeln!(f, "  Refresh Interval: {}s", self.refresh_interval_secs)?;
        if let Some(case_id) = &self.demo_case_id {
            writeln!(f, "  Demo Case: {case_id}")?;
        }
        writeln!(f, "  Document Store Key: {}", self.document_store_key)?;
        write!(f, "{}", self.timeline)
    }
}
