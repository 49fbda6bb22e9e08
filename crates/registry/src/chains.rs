//! Chain registry and transfer-mode classification
//!
//! The parent/child hierarchy models canonical bridge membership: a child
//! chain settles on its parent. Chains without a parent here may still be
//! reachable through the aggregator.

use bridge_types::ChainPair;

/// Ethereum mainnet
pub const ETHEREUM: u64 = 1;
/// Arbitrum One
pub const ARBITRUM_ONE: u64 = 42161;
/// Arbitrum Nova
pub const ARBITRUM_NOVA: u64 = 42170;
/// Base mainnet
pub const BASE: u64 = 8453;
/// ApeChain, settling on Arbitrum One
pub const APE_CHAIN: u64 = 33139;
/// Superposition, settling on Arbitrum One
pub const SUPERPOSITION: u64 = 55244;
/// Sepolia testnet
pub const SEPOLIA: u64 = 11155111;
/// Arbitrum Sepolia testnet
pub const ARBITRUM_SEPOLIA: u64 = 421614;

/// Native coin of a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
	pub symbol: &'static str,
	pub name: &'static str,
	pub decimals: u8,
}

/// A registered chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMeta {
	pub chain_id: u64,
	pub name: &'static str,
	/// Canonical bridge parent, if the chain settles on one
	pub parent_chain_id: Option<u64>,
	pub is_testnet: bool,
	pub native_currency: NativeCurrency,
}

const ETH: NativeCurrency = NativeCurrency {
	symbol: "ETH",
	name: "Ether",
	decimals: 18,
};

static CHAINS: &[ChainMeta] = &[
	ChainMeta {
		chain_id: ETHEREUM,
		name: "Ethereum",
		parent_chain_id: None,
		is_testnet: false,
		native_currency: ETH,
	},
	ChainMeta {
		chain_id: ARBITRUM_ONE,
		name: "Arbitrum One",
		parent_chain_id: Some(ETHEREUM),
		is_testnet: false,
		native_currency: ETH,
	},
	ChainMeta {
		chain_id: ARBITRUM_NOVA,
		name: "Arbitrum Nova",
		parent_chain_id: Some(ETHEREUM),
		is_testnet: false,
		native_currency: ETH,
	},
	ChainMeta {
		chain_id: BASE,
		name: "Base",
		parent_chain_id: None,
		is_testnet: false,
		native_currency: ETH,
	},
	ChainMeta {
		chain_id: APE_CHAIN,
		name: "ApeChain",
		parent_chain_id: Some(ARBITRUM_ONE),
		is_testnet: false,
		native_currency: NativeCurrency {
			symbol: "APE",
			name: "ApeCoin",
			decimals: 18,
		},
	},
	ChainMeta {
		chain_id: SUPERPOSITION,
		name: "Superposition",
		parent_chain_id: Some(ARBITRUM_ONE),
		is_testnet: false,
		native_currency: ETH,
	},
	ChainMeta {
		chain_id: SEPOLIA,
		name: "Sepolia",
		parent_chain_id: None,
		is_testnet: true,
		native_currency: ETH,
	},
	ChainMeta {
		chain_id: ARBITRUM_SEPOLIA,
		name: "Arbitrum Sepolia",
		parent_chain_id: Some(SEPOLIA),
		is_testnet: true,
		native_currency: ETH,
	},
];

/// Look up a registered chain; unregistered ids return `None`
pub fn get_chain_by_id(chain_id: u64) -> Option<&'static ChainMeta> {
	CHAINS.iter().find(|chain| chain.chain_id == chain_id)
}

/// Ids of chains that settle directly on the given chain
pub fn get_child_chain_ids(chain_id: u64) -> Vec<u64> {
	CHAINS
		.iter()
		.filter(|chain| chain.parent_chain_id == Some(chain_id))
		.map(|chain| chain.chain_id)
		.collect()
}

/// True if the destination is a direct child of the source
pub fn is_deposit_mode(pair: ChainPair) -> bool {
	match get_chain_by_id(pair.destination_chain_id) {
		Some(destination) => destination.parent_chain_id == Some(pair.source_chain_id),
		None => false,
	}
}

/// True if the source is a direct child of the destination
pub fn is_withdrawal_mode(pair: ChainPair) -> bool {
	is_deposit_mode(pair.reversed())
}

/// True if the pair spans two parent/child hops (grandparent relationship)
pub fn is_teleport_mode(pair: ChainPair) -> bool {
	fn grandparent(chain_id: u64) -> Option<u64> {
		get_chain_by_id(chain_id)
			.and_then(|chain| chain.parent_chain_id)
			.and_then(get_chain_by_id)
			.and_then(|parent| parent.parent_chain_id)
	}

	grandparent(pair.destination_chain_id) == Some(pair.source_chain_id)
		|| grandparent(pair.source_chain_id) == Some(pair.destination_chain_id)
}

/// True if either side of the pair is a test network
pub fn is_testnet_pair(pair: ChainPair) -> bool {
	let testnet = |chain_id| {
		get_chain_by_id(chain_id)
			.map(|chain| chain.is_testnet)
			.unwrap_or(false)
	};
	testnet(pair.source_chain_id) || testnet(pair.destination_chain_id)
}

/// True if the chain's gas coin is ether
pub fn native_is_ether(chain_id: u64) -> bool {
	get_chain_by_id(chain_id)
		.map(|chain| chain.native_currency.symbol == "ETH")
		.unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_lookup() {
		assert_eq!(get_chain_by_id(ETHEREUM).unwrap().name, "Ethereum");
		assert!(get_chain_by_id(999_999).is_none());
	}

	#[test]
	fn test_child_chain_ids() {
		let ethereum_children = get_child_chain_ids(ETHEREUM);
		assert!(ethereum_children.contains(&ARBITRUM_ONE));
		assert!(ethereum_children.contains(&ARBITRUM_NOVA));
		assert!(!ethereum_children.contains(&APE_CHAIN));

		assert_eq!(
			get_child_chain_ids(ARBITRUM_ONE),
			vec![APE_CHAIN, SUPERPOSITION]
		);
		assert!(get_child_chain_ids(BASE).is_empty());
	}

	#[test]
	fn test_deposit_and_withdrawal_modes() {
		assert!(is_deposit_mode(ChainPair::new(ETHEREUM, ARBITRUM_ONE)));
		assert!(is_deposit_mode(ChainPair::new(ARBITRUM_ONE, APE_CHAIN)));
		assert!(is_withdrawal_mode(ChainPair::new(ARBITRUM_ONE, ETHEREUM)));

		assert!(!is_deposit_mode(ChainPair::new(ARBITRUM_ONE, ETHEREUM)));
		assert!(!is_deposit_mode(ChainPair::new(ETHEREUM, APE_CHAIN)));
		assert!(!is_deposit_mode(ChainPair::new(ETHEREUM, BASE)));
	}

	#[test]
	fn test_teleport_mode_spans_two_hops() {
		assert!(is_teleport_mode(ChainPair::new(ETHEREUM, APE_CHAIN)));
		assert!(is_teleport_mode(ChainPair::new(APE_CHAIN, ETHEREUM)));
		assert!(is_teleport_mode(ChainPair::new(ETHEREUM, SUPERPOSITION)));

		assert!(!is_teleport_mode(ChainPair::new(ETHEREUM, ARBITRUM_ONE)));
		assert!(!is_teleport_mode(ChainPair::new(ARBITRUM_ONE, APE_CHAIN)));
		assert!(!is_teleport_mode(ChainPair::new(ARBITRUM_NOVA, APE_CHAIN)));
	}

	#[test]
	fn test_unregistered_ids_never_classify() {
		let pair = ChainPair::new(999_999, ARBITRUM_ONE);
		assert!(!is_deposit_mode(pair));
		assert!(!is_withdrawal_mode(pair));
		assert!(!is_teleport_mode(pair));
		assert!(!is_testnet_pair(pair));
	}

	#[test]
	fn test_testnet_pair() {
		assert!(is_testnet_pair(ChainPair::new(SEPOLIA, ARBITRUM_SEPOLIA)));
		assert!(!is_testnet_pair(ChainPair::new(ETHEREUM, ARBITRUM_ONE)));
	}

	#[test]
	fn test_native_is_ether() {
		assert!(native_is_ether(ETHEREUM));
		assert!(native_is_ether(SUPERPOSITION));
		assert!(!native_is_ether(APE_CHAIN));
		assert!(!native_is_ether(999_999));
	}
}
