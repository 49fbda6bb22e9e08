//! Aggregator quote wire models
//!
//! Request/response shapes for the external DEX/bridge quote aggregator.
//! The aggregator's own quoting algorithm is opaque; only the wire contract
//! is modeled here.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Outbound quote request
///
/// Every field participates in the query key: changing any of them
/// invalidates an in-flight fetch for the previous tuple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	pub from_chain_id: u64,
	pub to_chain_id: u64,
	/// Source token address; the zero address denotes the native coin
	pub from_token: String,
	/// Destination token address; the zero address denotes the native coin
	pub to_token: String,
	pub from_amount: Amount,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub from_address: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub to_address: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub deny_bridges: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub deny_exchanges: Vec<String>,
	pub slippage: f64,
}

impl QuoteRequest {
	/// Validate the request before it goes on the wire
	pub fn validate(&self) -> Result<(), String> {
		self.from_amount.validate()?;
		if self.from_chain_id == self.to_chain_id {
			return Err("source and destination chain must differ".to_string());
		}
		Ok(())
	}

	pub fn key(&self) -> QuoteKey {
		QuoteKey::from(self)
	}
}

/// Identity of a quote request, usable as a map key
///
/// Stale-response rejection compares keys: a response is applied only while
/// its originating key is still the current one. Slippage is keyed by bit
/// pattern so the struct stays `Eq + Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuoteKey {
	from_chain_id: u64,
	to_chain_id: u64,
	from_token: String,
	to_token: String,
	from_amount: String,
	from_address: Option<String>,
	to_address: Option<String>,
	deny_bridges: Vec<String>,
	deny_exchanges: Vec<String>,
	slippage_bits: u64,
}

impl From<&QuoteRequest> for QuoteKey {
	fn from(request: &QuoteRequest) -> Self {
		Self {
			from_chain_id: request.from_chain_id,
			to_chain_id: request.to_chain_id,
			from_token: request.from_token.to_ascii_lowercase(),
			to_token: request.to_token.to_ascii_lowercase(),
			from_amount: request.from_amount.as_str().to_string(),
			from_address: request.from_address.clone(),
			to_address: request.to_address.clone(),
			deny_bridges: request.deny_bridges.clone(),
			deny_exchanges: request.deny_exchanges.clone(),
			slippage_bits: request.slippage.to_bits(),
		}
	}
}

/// Order preference tags the aggregator attaches to a quote
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuoteOrder {
	#[serde(rename = "CHEAPEST")]
	Cheapest,
	#[serde(rename = "FASTEST")]
	Fastest,
}

/// Token shape used inside quote responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireToken {
	pub address: String,
	pub symbol: String,
	pub decimals: u8,
	pub chain_id: u64,
}

/// An amount paired with the token it is denominated in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
	pub amount: Amount,
	pub token: WireToken,
}

/// Aggregator-internal routing metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolData {
	/// Which order preferences this quote satisfies; a quote may carry both
	#[serde(default)]
	pub orders: Vec<QuoteOrder>,
}

/// A single quote returned by the aggregator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
	pub id: String,
	/// Bridge/exchange the aggregator picked for this quote
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tool: Option<String>,
	pub to_amount: TokenAmount,
	#[serde(default)]
	pub protocol_data: ProtocolData,
	/// Estimated execution time in seconds
	#[serde(skip_serializing_if = "Option::is_none")]
	pub execution_duration: Option<u64>,
	/// Opaque prebuilt transaction payload for the executor
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_request: Option<serde_json::Value>,
}

impl Quote {
	pub fn is_cheapest(&self) -> bool {
		self.protocol_data.orders.contains(&QuoteOrder::Cheapest)
	}

	pub fn is_fastest(&self) -> bool {
		self.protocol_data.orders.contains(&QuoteOrder::Fastest)
	}
}

/// Top-level aggregator response; an empty quote list is a valid response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotesResponse {
	#[serde(default)]
	pub routes: Vec<Quote>,
}
