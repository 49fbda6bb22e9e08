//! Route list assembly
//!
//! Packages eligible protocols and fetched aggregator quotes into the
//! uniform route list. Entry order is fixed: oftV2, cctp, aggregator
//! variants, arbitrum; consumers must not assume any economic sorting
//! beyond that.

use bridge_types::{Amount, Quote, RouteData, RouteType};

/// Build the unified route list
///
/// Local protocols (`oftV2`, `cctp`, `arbitrum`) are 1:1 transfers, so
/// they carry the requested amount as amount-received without a quote
/// round-trip. Aggregator entries come from the fetched quotes: the
/// cheapest-tagged and fastest-tagged quotes become distinct entries
/// unless they are the same quote, which collapses to a single `lifi`
/// entry. A quote without either tag produces nothing.
pub fn build_route_list(
	eligible: &[RouteType],
	amount: &Amount,
	quotes: Option<&[Quote]>,
) -> Vec<RouteData> {
	let mut routes = Vec::new();

	if eligible.contains(&RouteType::OftV2) {
		routes.push(RouteData::transfer(RouteType::OftV2, amount.clone()));
	}
	if eligible.contains(&RouteType::Cctp) {
		routes.push(RouteData::transfer(RouteType::Cctp, amount.clone()));
	}

	if eligible.contains(&RouteType::Lifi) {
		if let Some(quotes) = quotes {
			let cheapest = quotes.iter().position(Quote::is_cheapest);
			let fastest = quotes.iter().position(Quote::is_fastest);

			match (cheapest, fastest) {
				(Some(cheapest), Some(fastest)) if cheapest == fastest => {
					routes.push(RouteData::aggregator(
						RouteType::Lifi,
						quotes[cheapest].clone(),
					));
				},
				(cheapest, fastest) => {
					if let Some(cheapest) = cheapest {
						routes.push(RouteData::aggregator(
							RouteType::LifiCheapest,
							quotes[cheapest].clone(),
						));
					}
					if let Some(fastest) = fastest {
						routes.push(RouteData::aggregator(
							RouteType::LifiFastest,
							quotes[fastest].clone(),
						));
					}
				},
			}
		}
	}

	if eligible.contains(&RouteType::Arbitrum) {
		routes.push(RouteData::transfer(RouteType::Arbitrum, amount.clone()));
	}

	routes
}

#[cfg(test)]
mod tests {
	use super::*;
	use bridge_types::{ProtocolData, QuoteOrder, TokenAmount, WireToken};

	fn quote(id: &str, orders: Vec<QuoteOrder>) -> Quote {
		Quote {
			id: id.to_string(),
			tool: Some("hop".to_string()),
			to_amount: TokenAmount {
				amount: Amount::from("990000"),
				token: WireToken {
					address: "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string(),
					symbol: "USDC".to_string(),
					decimals: 6,
					chain_id: 42161,
				},
			},
			protocol_data: ProtocolData { orders },
			execution_duration: Some(120),
			transaction_request: None,
		}
	}

	#[test]
	fn test_insertion_order_is_fixed() {
		let eligible = [RouteType::Cctp, RouteType::Lifi, RouteType::Arbitrum];
		let quotes = [quote("a", vec![QuoteOrder::Cheapest, QuoteOrder::Fastest])];

		let routes = build_route_list(&eligible, &Amount::from("1000000"), Some(&quotes));
		let types: Vec<_> = routes.iter().map(|route| route.route_type).collect();

		assert_eq!(types, vec![RouteType::Cctp, RouteType::Lifi, RouteType::Arbitrum]);
	}

	#[test]
	fn test_coinciding_tags_collapse_to_single_lifi_entry() {
		let eligible = [RouteType::Lifi];
		let quotes = [quote("a", vec![QuoteOrder::Cheapest, QuoteOrder::Fastest])];

		let routes = build_route_list(&eligible, &Amount::from("1"), Some(&quotes));

		assert_eq!(routes.len(), 1);
		assert_eq!(routes[0].route_type, RouteType::Lifi);
	}

	#[test]
	fn test_distinct_tags_produce_two_entries() {
		let eligible = [RouteType::Lifi];
		let quotes = [
			quote("cheap", vec![QuoteOrder::Cheapest]),
			quote("fast", vec![QuoteOrder::Fastest]),
		];

		let routes = build_route_list(&eligible, &Amount::from("1"), Some(&quotes));
		let types: Vec<_> = routes.iter().map(|route| route.route_type).collect();

		assert_eq!(types, vec![RouteType::LifiCheapest, RouteType::LifiFastest]);
		assert_eq!(routes[0].quote().unwrap().id, "cheap");
		assert_eq!(routes[1].quote().unwrap().id, "fast");
	}

	#[test]
	fn test_missing_tag_is_omitted_not_substituted() {
		let eligible = [RouteType::Lifi];
		let quotes = [quote("cheap", vec![QuoteOrder::Cheapest])];

		let routes = build_route_list(&eligible, &Amount::from("1"), Some(&quotes));

		assert_eq!(routes.len(), 1);
		assert_eq!(routes[0].route_type, RouteType::LifiCheapest);
	}

	#[test]
	fn test_untagged_quotes_produce_nothing() {
		let eligible = [RouteType::Lifi];
		let quotes = [quote("plain", Vec::new())];

		let routes = build_route_list(&eligible, &Amount::from("1"), Some(&quotes));
		assert!(routes.is_empty());
	}

	#[test]
	fn test_local_entries_carry_requested_amount() {
		let eligible = [RouteType::OftV2];
		let routes = build_route_list(&eligible, &Amount::from("5000"), None);

		assert_eq!(routes.len(), 1);
		assert_eq!(routes[0].amount_received().as_str(), "5000");
	}

	#[test]
	fn test_pending_quotes_leave_only_local_entries() {
		let eligible = [RouteType::Cctp, RouteType::Lifi, RouteType::Arbitrum];
		let routes = build_route_list(&eligible, &Amount::from("1000000"), None);
		let types: Vec<_> = routes.iter().map(|route| route.route_type).collect();

		assert_eq!(types, vec![RouteType::Cctp, RouteType::Arbitrum]);
	}
}
