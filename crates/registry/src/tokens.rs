//! Per-chain token catalogs
//!
//! Addresses are the real mainnet/testnet deployments. Coin keys join the
//! same asset across catalogs; bridged-only chains list their bridged USDC
//! under the unified `USDC` key (see
//! `bridge_service::token_override::normalize_stablecoin_variant`).

use std::collections::HashMap;

use bridge_types::{Token, TokenAddress};
use once_cell::sync::Lazy;

use crate::chains::{
	APE_CHAIN, ARBITRUM_NOVA, ARBITRUM_ONE, ARBITRUM_SEPOLIA, BASE, ETHEREUM, SEPOLIA,
	SUPERPOSITION,
};

/// Well-known deployment addresses, checksummed
pub mod addresses {
	pub const WETH_ETHEREUM: &str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
	pub const WETH_ARBITRUM_ONE: &str = "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1";
	pub const WETH_ARBITRUM_NOVA: &str = "0x722E8BdD2ce80A4422E880164f2079488e115365";
	pub const WETH_BASE: &str = "0x4200000000000000000000000000000000000006";
	pub const WETH_APE_CHAIN: &str = "0xcF800F4948D16F23333508191B1B1591daF70438";

	pub const USDC_ETHEREUM: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
	pub const USDC_ARBITRUM_ONE: &str = "0xaf88d065e77c8cC2239327C5EDb3A432268e5831";
	pub const USDC_BASE: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
	pub const USDC_SEPOLIA: &str = "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238";
	pub const USDC_ARBITRUM_SEPOLIA: &str = "0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d";

	pub const USDCE_ARBITRUM_ONE: &str = "0xFF970A61A04b1cA14834A43f5dE4533eBDDB5CC8";
	pub const USDC_ARBITRUM_NOVA: &str = "0x750ba8b76187092B0D1E87E28daaf484d1b5273b";
	pub const USDC_SUPERPOSITION: &str = "0x6c030c5CC283F791B26816f325b9C632d964F8A1";

	pub const USDT_ETHEREUM: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";
	pub const USDT_ARBITRUM_ONE: &str = "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9";

	pub const APE_ETHEREUM: &str = "0x4d224452801ACEd8B2F0aebE155379bb5D594381";
	pub const APE_ARBITRUM_ONE: &str = "0x7f9FBf9bDd3F4105C478b996B648FE6e828a1e98";

	pub const ARB_ETHEREUM: &str = "0xB50721BCf8d664c30412Cfbc6cf7a15145234ad1";
	pub const ARB_ARBITRUM_ONE: &str = "0x912CE59144191C1204E64559FE8253a0e49E6548";

	pub const STETH_ETHEREUM: &str = "0xae7ab96520DE3A18E5e111B5EaAb095312D7fE84";
	pub const RETH_ETHEREUM: &str = "0xae78736Cd615f374D3085123A210448E74Fc6393";
}

use addresses::*;

static ETHEREUM_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(ETHEREUM, "ETH", "Ether", 18, "ETH")
			.with_logo("https://tokens.bridge.dev/eth.svg"),
		Token::erc20(ETHEREUM, WETH_ETHEREUM, "WETH", "Wrapped Ether", 18, "WETH")
			.with_logo("https://tokens.bridge.dev/weth.svg"),
		Token::erc20(ETHEREUM, USDC_ETHEREUM, "USDC", "USD Coin", 6, "USDC")
			.with_logo("https://tokens.bridge.dev/usdc.svg"),
		Token::erc20(ETHEREUM, USDT_ETHEREUM, "USDT", "Tether USD", 6, "USDT")
			.with_logo("https://tokens.bridge.dev/usdt.svg"),
		Token::erc20(ETHEREUM, APE_ETHEREUM, "APE", "ApeCoin", 18, "APE")
			.with_logo("https://tokens.bridge.dev/ape.svg"),
		Token::erc20(ETHEREUM, ARB_ETHEREUM, "ARB", "Arbitrum", 18, "ARB")
			.with_logo("https://tokens.bridge.dev/arb.svg"),
		Token::erc20(ETHEREUM, RETH_ETHEREUM, "rETH", "Rocket Pool ETH", 18, "rETH"),
	]
});

static ARBITRUM_ONE_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(ARBITRUM_ONE, "ETH", "Ether", 18, "ETH")
			.with_logo("https://tokens.bridge.dev/eth.svg"),
		Token::erc20(
			ARBITRUM_ONE,
			WETH_ARBITRUM_ONE,
			"WETH",
			"Wrapped Ether",
			18,
			"WETH",
		)
		.with_logo("https://tokens.bridge.dev/weth.svg"),
		Token::erc20(ARBITRUM_ONE, USDC_ARBITRUM_ONE, "USDC", "USD Coin", 6, "USDC")
			.with_logo("https://tokens.bridge.dev/usdc.svg"),
		Token::erc20(
			ARBITRUM_ONE,
			USDCE_ARBITRUM_ONE,
			"USDC.e",
			"Bridged USDC",
			6,
			"USDC.e",
		),
		Token::erc20(
			ARBITRUM_ONE,
			USDT_ARBITRUM_ONE,
			"USDT",
			"Tether USD",
			6,
			"USDT",
		)
		.with_logo("https://tokens.bridge.dev/usdt.svg"),
		Token::erc20(ARBITRUM_ONE, APE_ARBITRUM_ONE, "APE", "ApeCoin", 18, "APE")
			.with_logo("https://tokens.bridge.dev/ape.svg"),
		Token::erc20(ARBITRUM_ONE, ARB_ARBITRUM_ONE, "ARB", "Arbitrum", 18, "ARB")
			.with_logo("https://tokens.bridge.dev/arb.svg"),
	]
});

static ARBITRUM_NOVA_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(ARBITRUM_NOVA, "ETH", "Ether", 18, "ETH")
			.with_logo("https://tokens.bridge.dev/eth.svg"),
		Token::erc20(
			ARBITRUM_NOVA,
			WETH_ARBITRUM_NOVA,
			"WETH",
			"Wrapped Ether",
			18,
			"WETH",
		),
		// Nova only ever sees the bridged issuance, listed under the
		// unified USDC coin key.
		Token::erc20(ARBITRUM_NOVA, USDC_ARBITRUM_NOVA, "USDC", "USD Coin", 6, "USDC"),
	]
});

static BASE_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(BASE, "ETH", "Ether", 18, "ETH")
			.with_logo("https://tokens.bridge.dev/eth.svg"),
		Token::erc20(BASE, WETH_BASE, "WETH", "Wrapped Ether", 18, "WETH"),
		Token::erc20(BASE, USDC_BASE, "USDC", "USD Coin", 6, "USDC")
			.with_logo("https://tokens.bridge.dev/usdc.svg"),
	]
});

static APE_CHAIN_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(APE_CHAIN, "APE", "ApeCoin", 18, "APE")
			.with_logo("https://tokens.bridge.dev/ape.svg"),
		Token::erc20(APE_CHAIN, WETH_APE_CHAIN, "WETH", "Wrapped Ether", 18, "WETH"),
	]
});

static SUPERPOSITION_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(SUPERPOSITION, "ETH", "Ether", 18, "ETH"),
		// Bridged issuance only, unified USDC coin key.
		Token::erc20(SUPERPOSITION, USDC_SUPERPOSITION, "USDC", "USD Coin", 6, "USDC"),
	]
});

static SEPOLIA_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(SEPOLIA, "ETH", "Ether", 18, "ETH"),
		Token::erc20(SEPOLIA, USDC_SEPOLIA, "USDC", "USD Coin", 6, "USDC"),
	]
});

static ARBITRUM_SEPOLIA_TOKENS: Lazy<Vec<Token>> = Lazy::new(|| {
	vec![
		Token::native(ARBITRUM_SEPOLIA, "ETH", "Ether", 18, "ETH"),
		Token::erc20(
			ARBITRUM_SEPOLIA,
			USDC_ARBITRUM_SEPOLIA,
			"USDC",
			"USD Coin",
			6,
			"USDC",
		),
	]
});

static EMPTY: Vec<Token> = Vec::new();

/// Full catalog of a chain, in listing order
pub fn tokens_by_chain(chain_id: u64) -> &'static [Token] {
	match chain_id {
		ETHEREUM => &ETHEREUM_TOKENS,
		ARBITRUM_ONE => &ARBITRUM_ONE_TOKENS,
		ARBITRUM_NOVA => &ARBITRUM_NOVA_TOKENS,
		BASE => &BASE_TOKENS,
		APE_CHAIN => &APE_CHAIN_TOKENS,
		SUPERPOSITION => &SUPERPOSITION_TOKENS,
		SEPOLIA => &SEPOLIA_TOKENS,
		ARBITRUM_SEPOLIA => &ARBITRUM_SEPOLIA_TOKENS,
		_ => &EMPTY,
	}
}

/// Look up a catalog entry by coin key
pub fn token_by_coin_key(chain_id: u64, coin_key: &str) -> Option<&'static Token> {
	tokens_by_chain(chain_id)
		.iter()
		.find(|token| token.coin_key.as_deref() == Some(coin_key))
}

/// Owned coin-key index of a chain's catalog
pub fn coin_key_index(chain_id: u64) -> HashMap<String, Token> {
	tokens_by_chain(chain_id)
		.iter()
		.filter_map(|token| {
			token
				.coin_key
				.clone()
				.map(|coin_key| (coin_key, token.clone()))
		})
		.collect()
}

/// Look up a catalog entry by contract address
pub fn token_by_address(chain_id: u64, address: &TokenAddress) -> Option<&'static Token> {
	tokens_by_chain(chain_id).iter().find(|token| {
		token
			.address
			.as_ref()
			.map(|candidate| candidate == address)
			.unwrap_or(false)
	})
}

/// The chain's native-coin catalog entry
pub fn native_token(chain_id: u64) -> Option<&'static Token> {
	tokens_by_chain(chain_id).iter().find(|token| token.is_native())
}
