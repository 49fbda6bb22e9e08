//! Default route selection and badge assignment

use bridge_types::{RouteBadge, RouteData, RouteType};

/// Strict default-selection priority; anything not listed falls back to
/// the first computed route
const PRIORITY: [RouteType; 5] = [
	RouteType::OftV2,
	RouteType::Cctp,
	RouteType::LifiCheapest,
	RouteType::LifiFastest,
	RouteType::Lifi,
];

/// Pick the default route when the user has not chosen one
///
/// Pure and total; an empty list yields `None`. The fallback preserves
/// insertion order.
pub fn select_default_route(routes: &[RouteData]) -> Option<RouteType> {
	for candidate in PRIORITY {
		if routes.iter().any(|route| route.route_type == candidate) {
			return Some(candidate);
		}
	}
	routes.first().map(|route| route.route_type)
}

/// Badge for a route given the other route types shown beside it
///
/// A fixed decision table, not a computation. `co_eligible` may or may not
/// include the route itself; only the other entries matter.
pub fn route_badge(route_type: RouteType, co_eligible: &[RouteType]) -> Option<RouteBadge> {
	let beside = |candidate: RouteType| {
		candidate != route_type && co_eligible.contains(&candidate)
	};
	let beside_aggregator = beside(RouteType::Lifi)
		|| beside(RouteType::LifiCheapest)
		|| beside(RouteType::LifiFastest);

	match route_type {
		RouteType::Arbitrum => Some(RouteBadge::SecurityGuaranteed),
		RouteType::Cctp => {
			if beside_aggregator || beside(RouteType::Arbitrum) {
				Some(RouteBadge::BestDeal)
			} else {
				None
			}
		},
		RouteType::Lifi => {
			if beside(RouteType::Cctp) {
				Some(RouteBadge::Fastest)
			} else {
				Some(RouteBadge::BestDeal)
			}
		},
		RouteType::LifiCheapest => {
			if beside(RouteType::Cctp) {
				None
			} else {
				Some(RouteBadge::BestDeal)
			}
		},
		RouteType::LifiFastest => Some(RouteBadge::Fastest),
		RouteType::OftV2 => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bridge_types::Amount;

	fn routes(types: &[RouteType]) -> Vec<RouteData> {
		types
			.iter()
			.map(|route_type| RouteData::transfer(*route_type, Amount::from("1000")))
			.collect()
	}

	#[test]
	fn test_priority_order() {
		let list = routes(&[RouteType::Arbitrum, RouteType::LifiCheapest, RouteType::Cctp]);
		assert_eq!(select_default_route(&list), Some(RouteType::Cctp));

		let list = routes(&[RouteType::Arbitrum, RouteType::LifiFastest, RouteType::LifiCheapest]);
		assert_eq!(select_default_route(&list), Some(RouteType::LifiCheapest));

		let list = routes(&[RouteType::Arbitrum, RouteType::Lifi]);
		assert_eq!(select_default_route(&list), Some(RouteType::Lifi));
	}

	#[test]
	fn test_fallback_preserves_insertion_order() {
		let list = routes(&[RouteType::Arbitrum]);
		assert_eq!(select_default_route(&list), Some(RouteType::Arbitrum));
	}

	#[test]
	fn test_empty_routes_select_nothing() {
		assert_eq!(select_default_route(&[]), None);
	}

	#[test]
	fn test_oft_wins_over_everything() {
		let list = routes(&[
			RouteType::Arbitrum,
			RouteType::Lifi,
			RouteType::Cctp,
			RouteType::OftV2,
		]);
		assert_eq!(select_default_route(&list), Some(RouteType::OftV2));
	}

	#[test]
	fn test_canonical_always_earns_security_guaranteed() {
		assert_eq!(
			route_badge(RouteType::Arbitrum, &[RouteType::Arbitrum]),
			Some(RouteBadge::SecurityGuaranteed)
		);
		assert_eq!(
			route_badge(RouteType::Arbitrum, &[RouteType::Cctp, RouteType::Lifi]),
			Some(RouteBadge::SecurityGuaranteed)
		);
	}

	#[test]
	fn test_cctp_earns_best_deal_beside_alternatives() {
		assert_eq!(
			route_badge(RouteType::Cctp, &[RouteType::Cctp, RouteType::Lifi]),
			Some(RouteBadge::BestDeal)
		);
		assert_eq!(
			route_badge(RouteType::Cctp, &[RouteType::Cctp, RouteType::Arbitrum]),
			Some(RouteBadge::BestDeal)
		);
		assert_eq!(route_badge(RouteType::Cctp, &[RouteType::Cctp]), None);
	}

	#[test]
	fn test_lone_aggregator_earns_best_deal_but_fastest_beside_cctp() {
		assert_eq!(
			route_badge(RouteType::Lifi, &[RouteType::Lifi]),
			Some(RouteBadge::BestDeal)
		);
		assert_eq!(
			route_badge(RouteType::Lifi, &[RouteType::Cctp, RouteType::Lifi]),
			Some(RouteBadge::Fastest)
		);
	}

	#[test]
	fn test_split_aggregator_variant_badges() {
		let co = [RouteType::LifiCheapest, RouteType::LifiFastest];
		assert_eq!(
			route_badge(RouteType::LifiCheapest, &co),
			Some(RouteBadge::BestDeal)
		);
		assert_eq!(
			route_badge(RouteType::LifiFastest, &co),
			Some(RouteBadge::Fastest)
		);

		let beside_cctp = [RouteType::Cctp, RouteType::LifiCheapest, RouteType::LifiFastest];
		assert_eq!(route_badge(RouteType::LifiCheapest, &beside_cctp), None);
		assert_eq!(
			route_badge(RouteType::LifiFastest, &beside_cctp),
			Some(RouteBadge::Fastest)
		);
	}

	#[test]
	fn test_oft_carries_no_badge() {
		assert_eq!(route_badge(RouteType::OftV2, &[RouteType::OftV2]), None);
	}
}
