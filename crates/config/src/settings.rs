//! Configuration settings structures

use serde::{Deserialize, Serialize};

/// Default slippage tolerance applied to aggregator quotes
pub const DEFAULT_SLIPPAGE: f64 = 0.005;

/// Default aggregator API endpoint
pub const DEFAULT_AGGREGATOR_ENDPOINT: &str = "https://li.quest/v1";

/// Default timeout for aggregator requests in milliseconds
pub const DEFAULT_AGGREGATOR_TIMEOUT_MS: u64 = 10_000;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
	#[serde(default)]
	pub aggregator: AggregatorSettings,
	#[serde(default)]
	pub transfer: TransferSettings,
	#[serde(default)]
	pub logging: LoggingSettings,
}

/// Aggregator client configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AggregatorSettings {
	pub endpoint: String,
	pub timeout_ms: u64,
}

impl Default for AggregatorSettings {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_AGGREGATOR_ENDPOINT.to_string(),
			timeout_ms: DEFAULT_AGGREGATOR_TIMEOUT_MS,
		}
	}
}

/// User-tunable transfer preferences
///
/// The documented defaults below are the baseline against which the store
/// computes `has_modified_settings`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransferSettings {
	pub slippage: f64,
	#[serde(default)]
	pub deny_bridges: Vec<String>,
	#[serde(default)]
	pub deny_exchanges: Vec<String>,
}

impl Default for TransferSettings {
	fn default() -> Self {
		Self {
			slippage: DEFAULT_SLIPPAGE,
			deny_bridges: Vec::new(),
			deny_exchanges: Vec::new(),
		}
	}
}

impl TransferSettings {
	/// True if any preference differs from the documented defaults
	pub fn is_modified(&self) -> bool {
		*self != Self::default()
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_settings() {
		let settings = Settings::default();
		assert_eq!(settings.aggregator.endpoint, DEFAULT_AGGREGATOR_ENDPOINT);
		assert_eq!(settings.transfer.slippage, DEFAULT_SLIPPAGE);
		assert!(settings.transfer.deny_bridges.is_empty());
	}

	#[test]
	fn test_transfer_settings_modified() {
		assert!(!TransferSettings::default().is_modified());

		let mut slippage_changed = TransferSettings::default();
		slippage_changed.slippage = 0.01;
		assert!(slippage_changed.is_modified());

		let mut denylist_changed = TransferSettings::default();
		denylist_changed.deny_bridges.push("hop".to_string());
		assert!(denylist_changed.is_modified());
	}

	#[test]
	fn test_settings_deserialize_with_partial_body() {
		let settings: Settings = serde_json::from_str(r#"{"transfer": {"slippage": 0.01}}"#).unwrap();
		assert_eq!(settings.transfer.slippage, 0.01);
		assert_eq!(settings.aggregator.endpoint, DEFAULT_AGGREGATOR_ENDPOINT);
		assert_eq!(settings.logging.format, LogFormat::Pretty);
	}
}
