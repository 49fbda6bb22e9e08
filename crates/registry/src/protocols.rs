//! Protocol support tables
//!
//! Which protocol can structurally carry which (token, chain pair). These
//! tables are consulted by the eligibility classifier; they perform no I/O.

use bridge_types::{ChainPair, TokenAddress};
use once_cell::sync::Lazy;

use crate::chains::{
	is_testnet_pair, APE_CHAIN, ARBITRUM_NOVA, ARBITRUM_ONE, ARBITRUM_SEPOLIA, BASE, ETHEREUM,
	SEPOLIA,
};
use crate::tokens::addresses::*;

fn addr(value: &str) -> TokenAddress {
	TokenAddress::parse(value).expect("malformed static protocol address")
}

/// Configuration of a registered OFT deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OftConfig {
	/// The OFT adapter contract on the source chain
	pub adapter_address: TokenAddress,
	pub version: u8,
}

struct OftMapping {
	erc20: TokenAddress,
	source_chain_id: u64,
	destination_chain_id: u64,
	config: OftConfig,
}

static OFT_MAPPINGS: Lazy<Vec<OftMapping>> = Lazy::new(|| {
	vec![
		// USDT0 between Ethereum and Arbitrum One, both directions
		OftMapping {
			erc20: addr(USDT_ETHEREUM),
			source_chain_id: ETHEREUM,
			destination_chain_id: ARBITRUM_ONE,
			config: OftConfig {
				adapter_address: addr("0x6C96dE32CEa08842dcc4058c14d3aaAD7Fa41dee"),
				version: 2,
			},
		},
		OftMapping {
			erc20: addr(USDT_ARBITRUM_ONE),
			source_chain_id: ARBITRUM_ONE,
			destination_chain_id: ETHEREUM,
			config: OftConfig {
				adapter_address: addr("0x14E4A1B13bf7F943c8ff7C51fb60FA964A298D92"),
				version: 2,
			},
		},
	]
});

/// OFT configuration registered for (erc20, source, destination), if any
pub fn oft_config(
	erc20: &TokenAddress,
	source_chain_id: u64,
	destination_chain_id: u64,
) -> Option<&'static OftConfig> {
	OFT_MAPPINGS
		.iter()
		.find(|mapping| {
			&mapping.erc20 == erc20
				&& mapping.source_chain_id == source_chain_id
				&& mapping.destination_chain_id == destination_chain_id
		})
		.map(|mapping| &mapping.config)
}

struct CctpRoute {
	usdc: TokenAddress,
	source_chain_id: u64,
	destination_chain_id: u64,
}

/// Recognized native-USDC routes. Deposits and withdrawals carry different
/// recognized source addresses because the canonical issuance differs by
/// direction.
static CCTP_ROUTES: Lazy<Vec<CctpRoute>> = Lazy::new(|| {
	vec![
		// Deposits
		CctpRoute {
			usdc: addr(USDC_ETHEREUM),
			source_chain_id: ETHEREUM,
			destination_chain_id: ARBITRUM_ONE,
		},
		CctpRoute {
			usdc: addr(USDC_SEPOLIA),
			source_chain_id: SEPOLIA,
			destination_chain_id: ARBITRUM_SEPOLIA,
		},
		// Withdrawals
		CctpRoute {
			usdc: addr(USDC_ARBITRUM_ONE),
			source_chain_id: ARBITRUM_ONE,
			destination_chain_id: ETHEREUM,
		},
		CctpRoute {
			usdc: addr(USDC_ARBITRUM_SEPOLIA),
			source_chain_id: ARBITRUM_SEPOLIA,
			destination_chain_id: SEPOLIA,
		},
	]
});

/// True if the token is the recognized chain-native stablecoin for this
/// pair and direction
pub fn cctp_transfer_supported(token: &TokenAddress, pair: ChainPair) -> bool {
	CCTP_ROUTES.iter().any(|route| {
		&route.usdc == token
			&& route.source_chain_id == pair.source_chain_id
			&& route.destination_chain_id == pair.destination_chain_id
	})
}

/// Chains the aggregator serves
const LIFI_CHAIN_IDS: &[u64] = &[ETHEREUM, ARBITRUM_ONE, ARBITRUM_NOVA, BASE, APE_CHAIN];

/// True if the aggregator serves this chain pair
pub fn is_lifi_enabled_pair(pair: ChainPair) -> bool {
	!pair.is_same_chain()
		&& !is_testnet_pair(pair)
		&& LIFI_CHAIN_IDS.contains(&pair.source_chain_id)
		&& LIFI_CHAIN_IDS.contains(&pair.destination_chain_id)
}

static LIFI_TOKENS: Lazy<Vec<(u64, Vec<TokenAddress>)>> = Lazy::new(|| {
	vec![
		(
			ETHEREUM,
			vec![
				addr(WETH_ETHEREUM),
				addr(USDC_ETHEREUM),
				addr(USDT_ETHEREUM),
				addr(APE_ETHEREUM),
				addr(ARB_ETHEREUM),
			],
		),
		(
			ARBITRUM_ONE,
			vec![
				addr(WETH_ARBITRUM_ONE),
				addr(USDC_ARBITRUM_ONE),
				addr(USDCE_ARBITRUM_ONE),
				addr(USDT_ARBITRUM_ONE),
				addr(APE_ARBITRUM_ONE),
				addr(ARB_ARBITRUM_ONE),
			],
		),
		(
			ARBITRUM_NOVA,
			vec![addr(WETH_ARBITRUM_NOVA), addr(USDC_ARBITRUM_NOVA)],
		),
		(BASE, vec![addr(WETH_BASE), addr(USDC_BASE)]),
		(APE_CHAIN, vec![addr(WETH_APE_CHAIN)]),
	]
});

/// True if the aggregator knows the token on the given chain
pub fn lifi_supports_token(chain_id: u64, token: &TokenAddress) -> bool {
	LIFI_TOKENS
		.iter()
		.find(|(id, _)| *id == chain_id)
		.map(|(_, tokens)| tokens.contains(token))
		.unwrap_or(false)
}

/// Tokens the canonical bridge refuses entirely
static TRANSFER_DISABLED: Lazy<Vec<(u64, TokenAddress)>> =
	Lazy::new(|| vec![(ETHEREUM, addr(STETH_ETHEREUM))]);

/// Tokens that may only leave a child chain, never enter it
static WITHDRAW_ONLY: Lazy<Vec<(u64, TokenAddress)>> =
	Lazy::new(|| vec![(ETHEREUM, addr(RETH_ETHEREUM))]);

/// Pairs whose canonical bridge accepts only a closed token set
static CANONICAL_ALLOW_LISTS: Lazy<Vec<(ChainPair, Vec<TokenAddress>)>> = Lazy::new(|| {
	vec![(
		ChainPair::new(ARBITRUM_ONE, APE_CHAIN),
		vec![addr(APE_ARBITRUM_ONE), addr(WETH_ARBITRUM_ONE)],
	)]
});

pub fn is_transfer_disabled(chain_id: u64, token: &TokenAddress) -> bool {
	TRANSFER_DISABLED
		.iter()
		.any(|(id, disabled)| *id == chain_id && disabled == token)
}

pub fn is_withdraw_only(source_chain_id: u64, token: &TokenAddress) -> bool {
	WITHDRAW_ONLY
		.iter()
		.any(|(id, restricted)| *id == source_chain_id && restricted == token)
}

/// The closed allow-list restricting canonical transfers on a pair, if any
pub fn canonical_allow_list(pair: ChainPair) -> Option<&'static [TokenAddress]> {
	CANONICAL_ALLOW_LISTS
		.iter()
		.find(|(candidate, _)| *candidate == pair)
		.map(|(_, tokens)| tokens.as_slice())
}
