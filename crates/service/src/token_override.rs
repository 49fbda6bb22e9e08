//! Token equivalence resolution across chain pairs
//!
//! Maps a token on one chain to "the same asset" on another chain when the
//! representations differ: native ether vs wrapped ether, native vs bridged
//! USDC, and the APE coin that is an ERC-20 on most chains but the gas coin
//! on ApeChain. Everything here is pure and total; unknown input resolves
//! to "no override", never an error.

use std::collections::HashMap;

use bridge_registry::chains::{self, APE_CHAIN, ARBITRUM_NOVA, ARBITRUM_ONE, BASE, ETHEREUM, SUPERPOSITION};
use bridge_registry::tokens;
use bridge_types::{is_native_ref, BridgeInfo, Token, TokenAddress, TokenOverride};

/// Chains with a first-party USDC issuance
const NATIVE_USDC_CHAINS: &[u64] = &[ETHEREUM, ARBITRUM_ONE, BASE];

/// Chains that only ever see the bridged USDC variant, listed under the
/// unified coin key
const BRIDGED_USDC_CHAINS: &[u64] = &[ARBITRUM_NOVA, SUPERPOSITION];

fn compose(primary: &Token, counterpart: &Token) -> Token {
	primary.clone().or_logo_from(counterpart)
}

fn is_native_usdc(token: &Token) -> bool {
	token.coin_key.as_deref() == Some("USDC") && NATIVE_USDC_CHAINS.contains(&token.chain_id)
}

fn is_bridged_usdc(token: &Token) -> bool {
	token.coin_key.as_deref() == Some("USDC") && BRIDGED_USDC_CHAINS.contains(&token.chain_id)
}

/// Resolve the cross-chain override for a selected token, if any
///
/// `{None, None}` means no special case applies and the ordinary token
/// lookup path decides. Composed tokens prefer their own logo and borrow
/// the counterpart side's only when theirs is absent.
pub fn resolve_token_override(
	from_token: Option<&TokenAddress>,
	source_chain_id: u64,
	destination_chain_id: u64,
) -> TokenOverride {
	if source_chain_id == destination_chain_id {
		return TokenOverride::none();
	}

	// Ether travelling into a chain that only carries it wrapped.
	if destination_chain_id == APE_CHAIN
		&& is_native_ref(from_token)
		&& chains::native_is_ether(source_chain_id)
	{
		if let (Some(ether), Some(wrapped)) = (
			tokens::token_by_coin_key(source_chain_id, "ETH"),
			tokens::token_by_coin_key(APE_CHAIN, "WETH"),
		) {
			return TokenOverride {
				source: Some(compose(ether, wrapped)),
				destination: Some(compose(wrapped, ether)),
			};
		}
	}

	// Ether leaving that chain: a bare native reference and the wrapped
	// ether address both mean ether here.
	if source_chain_id == APE_CHAIN && chains::native_is_ether(destination_chain_id) {
		let wrapped = tokens::token_by_coin_key(APE_CHAIN, "WETH");
		let references_ether = is_native_ref(from_token)
			|| matches!(
				(wrapped, from_token),
				(Some(w), Some(t)) if w.address.as_ref() == Some(t)
			);
		if references_ether {
			if let (Some(wrapped), Some(ether)) = (
				wrapped,
				tokens::token_by_coin_key(destination_chain_id, "ETH"),
			) {
				return TokenOverride {
					source: Some(compose(wrapped, ether)),
					destination: Some(compose(ether, wrapped)),
				};
			}
		}
	}

	let Some(address) = from_token.filter(|address| !address.is_zero()) else {
		return TokenOverride::none();
	};
	let Some(token) = tokens::token_by_address(source_chain_id, address) else {
		return TokenOverride::none();
	};

	// The APE coin gains first-class (native) status on ApeChain and has
	// no sane destination on chains that never deployed it.
	if token.coin_key.as_deref() == Some("APE") && !token.is_native() {
		if destination_chain_id == APE_CHAIN {
			if let Some(native_ape) = tokens::native_token(APE_CHAIN) {
				return TokenOverride {
					source: Some(compose(token, native_ape)),
					destination: Some(compose(native_ape, token)),
				};
			}
		}
		if tokens::token_by_coin_key(destination_chain_id, "APE").is_none() {
			return TokenOverride {
				source: Some(token.clone()),
				destination: None,
			};
		}
		return TokenOverride::none();
	}

	// USDC crossing an issuance boundary maps to the other variant, with
	// metadata taken verbatim from the respective catalog side.
	if is_native_usdc(token) && BRIDGED_USDC_CHAINS.contains(&destination_chain_id) {
		if let Some(bridged) = tokens::token_by_coin_key(destination_chain_id, "USDC") {
			return TokenOverride {
				source: Some(compose(token, bridged)),
				destination: Some(compose(bridged, token)),
			};
		}
	}
	if is_bridged_usdc(token) && NATIVE_USDC_CHAINS.contains(&destination_chain_id) {
		if let Some(native) = tokens::token_by_coin_key(destination_chain_id, "USDC") {
			return TokenOverride {
				source: Some(compose(token, native)),
				destination: Some(compose(native, token)),
			};
		}
	}

	TokenOverride::none()
}

/// Fold the bridged-USDC coin key into the unified key on chains that only
/// ever see the bridged variant
///
/// Identity everywhere else; applying it twice equals applying it once.
pub fn normalize_stablecoin_variant(token: &Token, chain_id: u64) -> Token {
	if BRIDGED_USDC_CHAINS.contains(&chain_id) && token.coin_key.as_deref() == Some("USDC.e") {
		let mut normalized = token.clone();
		normalized.coin_key = Some("USDC".to_string());
		return normalized;
	}
	token.clone()
}

/// Inner-join parent and child catalogs by coin key
///
/// Output follows parent ordering; tokens without a join partner are
/// dropped. A parent-side native coin joins the child's wrapped coin key
/// when the child chain has no native representation of that asset. Each
/// joined record carries the parent-side metadata under `bridge_info`,
/// keyed by the parent chain id.
pub fn build_destination_token_list(
	parent_tokens: &[Token],
	child_tokens_by_coin_key: &HashMap<String, Token>,
	parent_chain_id: u64,
	child_chain_id: u64,
) -> Vec<Token> {
	let child_native_symbol =
		chains::get_chain_by_id(child_chain_id).map(|chain| chain.native_currency.symbol);

	parent_tokens
		.iter()
		.filter_map(|parent| {
			let coin_key = parent.coin_key.as_deref()?;
			let join_key = if parent.is_native() && child_native_symbol != Some(coin_key) {
				format!("W{}", coin_key)
			} else {
				coin_key.to_string()
			};
			let child = child_tokens_by_coin_key.get(&join_key)?;

			let mut joined = child.clone().or_logo_from(parent);
			joined.bridge_info.insert(
				parent_chain_id,
				BridgeInfo {
					token_address: parent.address.clone(),
					name: parent.name.clone(),
					symbol: parent.symbol.clone(),
					decimals: parent.decimals,
					logo_uri: parent.logo_uri.clone(),
				},
			);
			Some(joined)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use bridge_registry::tokens::addresses::*;

	fn address(value: &str) -> TokenAddress {
		TokenAddress::parse(value).unwrap()
	}

	#[test]
	fn test_native_ether_into_apechain_maps_to_wrapped() {
		let overrides = resolve_token_override(None, ARBITRUM_ONE, APE_CHAIN);

		let destination = overrides.destination.unwrap();
		assert_eq!(destination.chain_id, APE_CHAIN);
		assert_eq!(destination.address, Some(address(WETH_APE_CHAIN)));
		assert_eq!(destination.symbol, "WETH");

		let source = overrides.source.unwrap();
		assert!(source.is_native());
		assert_eq!(source.chain_id, ARBITRUM_ONE);

		// Same result for an explicit zero-address reference.
		let zero = TokenAddress::zero();
		let via_zero = resolve_token_override(Some(&zero), ARBITRUM_ONE, APE_CHAIN);
		assert_eq!(via_zero.destination.unwrap().address, Some(address(WETH_APE_CHAIN)));
	}

	#[test]
	fn test_native_reference_out_of_apechain_maps_to_ether() {
		let overrides = resolve_token_override(None, APE_CHAIN, ARBITRUM_ONE);

		let destination = overrides.destination.unwrap();
		assert!(destination.is_native());
		assert_eq!(destination.chain_id, ARBITRUM_ONE);
		assert_eq!(destination.symbol, "ETH");

		let source = overrides.source.unwrap();
		assert_eq!(source.address, Some(address(WETH_APE_CHAIN)));
	}

	#[test]
	fn test_ether_round_trip_through_apechain() {
		let outbound = resolve_token_override(None, ETHEREUM, APE_CHAIN);
		let destination = outbound.destination.unwrap();

		let inbound = resolve_token_override(
			destination.address.as_ref(),
			APE_CHAIN,
			ETHEREUM,
		);

		let recovered = inbound.destination.unwrap();
		let original = outbound.source.unwrap();
		assert_eq!(recovered.address, original.address);
		assert_eq!(recovered.chain_id, original.chain_id);
		assert_eq!(recovered.symbol, original.symbol);
	}

	#[test]
	fn test_logo_fallback_prefers_own_side() {
		// ApeChain's wrapped ether has no logo of its own, so the composed
		// destination borrows the source-side ether logo.
		let overrides = resolve_token_override(None, ETHEREUM, APE_CHAIN);
		let destination = overrides.destination.unwrap();
		assert_eq!(
			destination.logo_uri.as_deref(),
			Some("https://tokens.bridge.dev/eth.svg")
		);

		// The source side has its own logo and keeps it.
		let source = overrides.source.unwrap();
		assert_eq!(
			source.logo_uri.as_deref(),
			Some("https://tokens.bridge.dev/eth.svg")
		);

		// Reverse lookup: the composed source is the wrapped token and
		// borrows the destination-side logo.
		let reverse = resolve_token_override(None, APE_CHAIN, ETHEREUM);
		let reverse_source = reverse.source.unwrap();
		assert_eq!(
			reverse_source.logo_uri.as_deref(),
			Some("https://tokens.bridge.dev/eth.svg")
		);
	}

	#[test]
	fn test_ape_into_apechain_becomes_native() {
		let ape = address(APE_ARBITRUM_ONE);
		let overrides = resolve_token_override(Some(&ape), ARBITRUM_ONE, APE_CHAIN);

		let destination = overrides.destination.unwrap();
		assert!(destination.is_native());
		assert_eq!(destination.chain_id, APE_CHAIN);
		assert_eq!(destination.symbol, "APE");
	}

	#[test]
	fn test_ape_to_chain_without_deployment_has_no_destination() {
		let ape = address(APE_ETHEREUM);
		let overrides = resolve_token_override(Some(&ape), ETHEREUM, ARBITRUM_NOVA);

		assert!(overrides.source.is_some());
		assert!(overrides.destination.is_none());
	}

	#[test]
	fn test_ape_between_erc20_chains_has_no_override() {
		let ape = address(APE_ETHEREUM);
		let overrides = resolve_token_override(Some(&ape), ETHEREUM, ARBITRUM_ONE);
		assert!(overrides.is_none());
	}

	#[test]
	fn test_usdc_issuance_boundary_round_trip() {
		let native = address(USDC_ETHEREUM);
		let outbound = resolve_token_override(Some(&native), ETHEREUM, ARBITRUM_NOVA);

		let bridged = outbound.destination.unwrap();
		assert_eq!(bridged.address, Some(address(USDC_ARBITRUM_NOVA)));
		// Metadata comes verbatim from the destination catalog side.
		assert_eq!(bridged.symbol, "USDC");
		assert_eq!(bridged.decimals, 6);

		let inbound =
			resolve_token_override(bridged.address.as_ref(), ARBITRUM_NOVA, ETHEREUM);
		let recovered = inbound.destination.unwrap();
		assert_eq!(recovered.address, outbound.source.unwrap().address);
	}

	#[test]
	fn test_usdc_between_native_issuance_chains_has_no_override() {
		let native = address(USDC_ETHEREUM);
		let overrides = resolve_token_override(Some(&native), ETHEREUM, ARBITRUM_ONE);
		assert!(overrides.is_none());
	}

	#[test]
	fn test_unknown_input_resolves_to_no_override() {
		let unknown = address("0x1111111111111111111111111111111111111111");
		assert!(resolve_token_override(Some(&unknown), ETHEREUM, ARBITRUM_ONE).is_none());
		assert!(resolve_token_override(None, 999_999, 888_888).is_none());
		assert!(resolve_token_override(None, ETHEREUM, ETHEREUM).is_none());
	}

	#[test]
	fn test_normalize_stablecoin_variant_is_idempotent() {
		let bridged = Token::erc20(
			SUPERPOSITION,
			USDC_SUPERPOSITION,
			"USDC.e",
			"Bridged USDC",
			6,
			"USDC.e",
		);

		let once = normalize_stablecoin_variant(&bridged, SUPERPOSITION);
		assert_eq!(once.coin_key.as_deref(), Some("USDC"));

		let twice = normalize_stablecoin_variant(&once, SUPERPOSITION);
		assert_eq!(twice, once);
	}

	#[test]
	fn test_normalize_stablecoin_variant_is_identity_elsewhere() {
		let bridged = tokens::token_by_coin_key(ARBITRUM_ONE, "USDC.e").unwrap();
		let unchanged = normalize_stablecoin_variant(bridged, ARBITRUM_ONE);
		assert_eq!(&unchanged, bridged);

		let ether = tokens::native_token(ETHEREUM).unwrap();
		assert_eq!(&normalize_stablecoin_variant(ether, ARBITRUM_NOVA), ether);
	}

	#[test]
	fn test_destination_list_joins_by_coin_key_in_parent_order() {
		let parent_tokens = tokens::tokens_by_chain(ETHEREUM);
		let child_index = tokens::coin_key_index(ARBITRUM_ONE);

		let joined =
			build_destination_token_list(parent_tokens, &child_index, ETHEREUM, ARBITRUM_ONE);

		// rETH has no Arbitrum partner and is dropped; everything else
		// joins in parent order.
		let keys: Vec<_> = joined
			.iter()
			.map(|token| token.coin_key.as_deref().unwrap())
			.collect();
		assert_eq!(keys, vec!["ETH", "WETH", "USDC", "USDT", "APE", "ARB"]);

		for token in &joined {
			assert_eq!(token.chain_id, ARBITRUM_ONE);
			let info = token.bridge_info.get(&ETHEREUM).unwrap();
			assert_eq!(info.decimals, token.decimals);
		}
	}

	#[test]
	fn test_destination_list_native_joins_wrapped_when_child_lacks_native() {
		let parent_tokens = tokens::tokens_by_chain(ARBITRUM_ONE);
		let child_index = tokens::coin_key_index(APE_CHAIN);

		let joined =
			build_destination_token_list(parent_tokens, &child_index, ARBITRUM_ONE, APE_CHAIN);

		// Parent native ETH lands on ApeChain's wrapped ether.
		let ether = joined
			.iter()
			.find(|token| token.bridge_info[&ARBITRUM_ONE].token_address.is_none())
			.unwrap();
		assert_eq!(ether.address, Some(address(WETH_APE_CHAIN)));
		// The child side has no logo, so the parent-side one is borrowed.
		assert_eq!(
			ether.logo_uri.as_deref(),
			Some("https://tokens.bridge.dev/eth.svg")
		);

		// ApeChain lists no USDC, USDT or ARB: those parent entries drop.
		assert!(joined
			.iter()
			.all(|token| token.coin_key.as_deref() != Some("USDC")));
	}

	#[test]
	fn test_destination_list_bridge_info_carries_parent_metadata() {
		let parent_tokens = tokens::tokens_by_chain(ETHEREUM);
		let child_index = tokens::coin_key_index(ARBITRUM_ONE);

		let joined =
			build_destination_token_list(parent_tokens, &child_index, ETHEREUM, ARBITRUM_ONE);
		let usdc = joined
			.iter()
			.find(|token| token.coin_key.as_deref() == Some("USDC"))
			.unwrap();

		let info = usdc.bridge_info.get(&ETHEREUM).unwrap();
		assert_eq!(info.token_address, Some(address(USDC_ETHEREUM)));
		assert_eq!(info.symbol, "USDC");
		assert_eq!(info.name, "USD Coin");
	}
}
