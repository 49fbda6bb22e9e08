//! Bridge Router Library
//!
//! A route-resolution engine for cross-chain token transfers: token
//! equivalence resolution, protocol eligibility, aggregator quote
//! orchestration, default route selection and a reactive route state store.

use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use bridge_types::{
	// External dependencies for convenience
	serde_json,
	// Error types
	AdapterError,
	AdapterResult,
	Amount,
	BridgeInfo,
	// Primary domain entities
	ChainPair,
	ProtocolData,
	Quote,
	QuoteApi,
	QuoteKey,
	QuoteOrder,
	QuoteRequest,
	RouteBadge,
	RouteContext,
	RouteData,
	RoutePayload,
	RouteState,
	RouteType,
	Token,
	TokenAddress,
	TokenOverride,
};

// Service layer
pub use bridge_service::{
	build_destination_token_list, build_route_list, get_eligible_routes, normalize_stablecoin_variant,
	resolve_token_override, route_badge, select_default_route, RouteInput, RouteStore,
	TransferParams,
};

// Adapters
pub use bridge_adapters::LifiClient;

// Config
pub use bridge_config::{load_config, LogFormat, Settings, TransferSettings};

// Module aliases for advanced usage
pub mod types {
	pub use bridge_types::*;
}

pub mod registry {
	pub use bridge_registry::*;
}

pub mod service {
	pub use bridge_service::*;
}

pub mod adapters {
	pub use bridge_adapters::*;
}

pub mod config {
	pub use bridge_config::*;
}

pub mod mocks;

// Re-export external dependencies for downstream implementations
pub use async_trait;

/// Initialize tracing with configuration-based settings
pub fn init_tracing(settings: &Settings) {
	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);
}

/// Builder pattern for configuring the route store
pub struct RouterBuilder {
	settings: Option<Settings>,
	quote_api: Option<Arc<dyn QuoteApi>>,
}

impl Default for RouterBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl RouterBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			quote_api: None,
		}
	}

	/// Set custom settings instead of loading from the config file
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use a custom aggregator client (e.g. a mock in tests)
	pub fn with_quote_api(mut self, quote_api: Arc<dyn QuoteApi>) -> Self {
		self.quote_api = Some(quote_api);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Wire everything together and return the route store
	pub fn build(self) -> Result<RouteStore, Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		let quote_api = match self.quote_api {
			Some(quote_api) => quote_api,
			None => {
				let client = LifiClient::new(
					settings.aggregator.endpoint.clone(),
					settings.aggregator.timeout_ms,
				)?;
				info!(
					"Aggregator client configured: {} ({}ms timeout)",
					settings.aggregator.endpoint, settings.aggregator.timeout_ms
				);
				Arc::new(client) as Arc<dyn QuoteApi>
			},
		};

		Ok(RouteStore::new(quote_api))
	}
}
