//! Reusable input fixtures

#![allow(dead_code)]

use bridge_router::registry::chains::{ARBITRUM_ONE, BASE, ETHEREUM};
use bridge_router::registry::tokens::addresses::{ARB_ETHEREUM, USDC_ETHEREUM};
use bridge_router::{Amount, ChainPair, RouteInput, TokenAddress};

/// Ethereum-native USDC deposited to Arbitrum One
pub fn usdc_deposit() -> RouteInput {
	RouteInput::new(
		ChainPair::new(ETHEREUM, ARBITRUM_ONE),
		TokenAddress::parse(USDC_ETHEREUM),
		Amount::from("1000000"),
	)
}

/// ARB moved from Ethereum to Arbitrum One (aggregator + canonical)
pub fn arb_deposit() -> RouteInput {
	RouteInput::new(
		ChainPair::new(ETHEREUM, ARBITRUM_ONE),
		TokenAddress::parse(ARB_ETHEREUM),
		Amount::from("5000000000000000000"),
	)
}

/// Native ether between two chains outside the canonical hierarchy
/// (aggregator is the sole eligible protocol)
pub fn aggregator_only() -> RouteInput {
	RouteInput::new(
		ChainPair::new(ARBITRUM_ONE, BASE),
		None,
		Amount::from("1000000000000000000"),
	)
}
