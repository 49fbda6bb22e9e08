//! Route models and the shared route state record

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::quotes::{Quote, QuoteOrder};

/// The closed set of transfer protocols a route can use
///
/// `LifiCheapest`/`LifiFastest` exist only when the aggregator returns
/// distinct cheapest and fastest quotes; when they coincide the single
/// entry is `Lifi`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RouteType {
	#[serde(rename = "oftV2")]
	OftV2,
	#[serde(rename = "cctp")]
	Cctp,
	#[serde(rename = "lifi")]
	Lifi,
	#[serde(rename = "lifi-cheapest")]
	LifiCheapest,
	#[serde(rename = "lifi-fastest")]
	LifiFastest,
	#[serde(rename = "arbitrum")]
	Arbitrum,
}

impl RouteType {
	/// True for any of the aggregator-backed route types
	pub fn is_aggregator(&self) -> bool {
		matches!(self, Self::Lifi | Self::LifiCheapest | Self::LifiFastest)
	}
}

impl std::fmt::Display for RouteType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::OftV2 => "oftV2",
			Self::Cctp => "cctp",
			Self::Lifi => "lifi",
			Self::LifiCheapest => "lifi-cheapest",
			Self::LifiFastest => "lifi-fastest",
			Self::Arbitrum => "arbitrum",
		};
		write!(f, "{}", name)
	}
}

/// Protocol-specific payload of a computed route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum RoutePayload {
	/// A 1:1 transfer protocol; the received amount equals the sent amount
	Transfer { amount_received: Amount },
	/// An aggregator quote with the order tags that apply to it
	Aggregator {
		quote: Quote,
		orders: Vec<QuoteOrder>,
	},
}

/// One entry in the computed route list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
	pub route_type: RouteType,
	pub payload: RoutePayload,
}

impl RouteData {
	/// Synthesize a local entry for a protocol that needs no quote
	pub fn transfer(route_type: RouteType, amount_received: Amount) -> Self {
		Self {
			route_type,
			payload: RoutePayload::Transfer { amount_received },
		}
	}

	pub fn aggregator(route_type: RouteType, quote: Quote) -> Self {
		let orders = quote.protocol_data.orders.clone();
		Self {
			route_type,
			payload: RoutePayload::Aggregator { quote, orders },
		}
	}

	pub fn amount_received(&self) -> &Amount {
		match &self.payload {
			RoutePayload::Transfer { amount_received } => amount_received,
			RoutePayload::Aggregator { quote, .. } => &quote.to_amount.amount,
		}
	}

	pub fn quote(&self) -> Option<&Quote> {
		match &self.payload {
			RoutePayload::Transfer { .. } => None,
			RoutePayload::Aggregator { quote, .. } => Some(quote),
		}
	}
}

/// Badge shown next to a route in selection UIs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RouteBadge {
	BestDeal,
	Fastest,
	SecurityGuaranteed,
}

/// Execution parameters derived from a settled aggregator quote
///
/// Never derived from an in-flight or superseded quote: the executor must
/// not act on stale pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteContext {
	pub route_type: RouteType,
	pub quote_id: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tool: Option<String>,
	pub from_amount: Amount,
	pub to_amount: Amount,
	pub slippage: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub execution_duration: Option<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub transaction_request: Option<serde_json::Value>,
}

/// The single source of truth consumed by execution/UI collaborators
///
/// Re-derived wholesale on every input change; fields are never mutated
/// incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteState {
	pub eligible_route_types: Vec<RouteType>,
	pub routes: Vec<RouteData>,
	pub is_loading: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	pub has_low_liquidity: bool,
	pub has_modified_settings: bool,
	/// The resolved selection: the user's pick while valid, else the default
	#[serde(skip_serializing_if = "Option::is_none")]
	pub selected_route: Option<RouteType>,
	/// The user's explicit pick; dropped silently once it leaves `routes`
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_selected_route: Option<RouteType>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub context: Option<RouteContext>,
}

impl RouteState {
	/// State for inputs that produce no routes at all (e.g. zero amount)
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn route(&self, route_type: RouteType) -> Option<&RouteData> {
		self.routes.iter().find(|r| r.route_type == route_type)
	}

	pub fn has_route(&self, route_type: RouteType) -> bool {
		self.route(route_type).is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_route_type_wire_names() {
		let cases = [
			(RouteType::OftV2, "\"oftV2\""),
			(RouteType::Cctp, "\"cctp\""),
			(RouteType::Lifi, "\"lifi\""),
			(RouteType::LifiCheapest, "\"lifi-cheapest\""),
			(RouteType::LifiFastest, "\"lifi-fastest\""),
			(RouteType::Arbitrum, "\"arbitrum\""),
		];

		for (route_type, expected) in cases {
			assert_eq!(serde_json::to_string(&route_type).unwrap(), expected);
			let parsed: RouteType = serde_json::from_str(expected).unwrap();
			assert_eq!(parsed, route_type);
		}
	}

	#[test]
	fn test_route_type_aggregator_grouping() {
		assert!(RouteType::Lifi.is_aggregator());
		assert!(RouteType::LifiCheapest.is_aggregator());
		assert!(RouteType::LifiFastest.is_aggregator());
		assert!(!RouteType::Cctp.is_aggregator());
		assert!(!RouteType::Arbitrum.is_aggregator());
		assert!(!RouteType::OftV2.is_aggregator());
	}

	#[test]
	fn test_transfer_route_amount_received() {
		let route = RouteData::transfer(RouteType::Cctp, Amount::from("1000000"));
		assert_eq!(route.amount_received().as_str(), "1000000");
		assert!(route.quote().is_none());
	}

	#[test]
	fn test_empty_state() {
		let state = RouteState::empty();
		assert!(state.eligible_route_types.is_empty());
		assert!(state.routes.is_empty());
		assert!(!state.is_loading);
		assert!(state.selected_route.is_none());
	}
}
