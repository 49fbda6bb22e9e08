//! Mock aggregator clients for examples and testing
//!
//! A simple, configurable in-memory [`QuoteApi`] implementation usable by
//! downstream consumers without network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use bridge_types::{
	AdapterError, AdapterResult, Amount, ProtocolData, Quote, QuoteApi, QuoteOrder, QuoteRequest,
	TokenAmount, WireToken,
};

/// Mock aggregator client with call tracking
///
/// Supports configurable quotes, response delays for stale-response
/// testing, and failure simulation.
#[derive(Debug, Clone)]
pub struct MockQuoteApi {
	quotes: Vec<Quote>,
	should_fail: bool,
	response_delay_ms: u64,
	call_tracker: Arc<AtomicUsize>,
}

impl MockQuoteApi {
	/// Mock returning the given quotes immediately
	pub fn with_quotes(quotes: Vec<Quote>) -> Self {
		Self {
			quotes,
			should_fail: false,
			response_delay_ms: 0,
			call_tracker: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Mock returning an empty quote list (a valid aggregator response)
	pub fn empty() -> Self {
		Self::with_quotes(Vec::new())
	}

	/// Mock that fails every fetch
	pub fn failing() -> Self {
		Self {
			quotes: Vec::new(),
			should_fail: true,
			response_delay_ms: 0,
			call_tracker: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Delay each response by the given number of milliseconds
	pub fn with_delay(mut self, response_delay_ms: u64) -> Self {
		self.response_delay_ms = response_delay_ms;
		self
	}

	/// Number of fetches issued against this mock
	pub fn call_count(&self) -> usize {
		self.call_tracker.load(Ordering::Relaxed)
	}
}

#[async_trait]
impl QuoteApi for MockQuoteApi {
	async fn fetch_quotes(&self, _request: &QuoteRequest) -> AdapterResult<Vec<Quote>> {
		self.call_tracker.fetch_add(1, Ordering::Relaxed);

		if self.response_delay_ms > 0 {
			tokio::time::sleep(Duration::from_millis(self.response_delay_ms)).await;
		}

		if self.should_fail {
			return Err(AdapterError::Connection(
				"mock aggregator unavailable".to_string(),
			));
		}

		Ok(self.quotes.clone())
	}
}

/// Build a quote fixture with the given id, received amount and order tags
pub fn mock_quote(id: &str, to_amount: &str, orders: Vec<QuoteOrder>) -> Quote {
	Quote {
		id: id.to_string(),
		tool: Some("mock-bridge".to_string()),
		to_amount: TokenAmount {
			amount: Amount::from(to_amount),
			token: WireToken {
				address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
				symbol: "USDC".to_string(),
				decimals: 6,
				chain_id: 42161,
			},
		},
		protocol_data: ProtocolData { orders },
		execution_duration: Some(120),
		transaction_request: Some(bridge_types::serde_json::json!({
			"to": "0x1231deb6f5749ef6ce6943a275a1d3e7486f4eae",
			"value": "0x0"
		})),
	}
}
