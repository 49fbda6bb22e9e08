//! Bridge Router Configuration
//!
//! Settings structures and loading utilities.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{
	AggregatorSettings, LogFormat, LoggingSettings, Settings, TransferSettings,
	DEFAULT_AGGREGATOR_ENDPOINT, DEFAULT_AGGREGATOR_TIMEOUT_MS, DEFAULT_SLIPPAGE,
};
