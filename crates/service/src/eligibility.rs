//! Protocol eligibility classification
//!
//! Pure predicates deciding, from chain pair + token + amount, which
//! transfer protocols are structural candidates. No network I/O; all data
//! comes from the static registry.

use bridge_registry::{chains, protocols, tokens};
use bridge_types::{is_native_ref, Amount, ChainPair, RouteType, Token, TokenAddress};

use crate::token_override::{normalize_stablecoin_variant, resolve_token_override};

/// Input snapshot for eligibility classification
#[derive(Debug, Clone)]
pub struct TransferParams {
	pub chain_pair: ChainPair,
	/// Selected source token; `None` means the native coin
	pub from_token: Option<TokenAddress>,
	/// Selected destination token; `None` means "the counterpart asset"
	pub to_token: Option<TokenAddress>,
	pub amount: Amount,
}

impl TransferParams {
	pub fn new(chain_pair: ChainPair, from_token: Option<TokenAddress>, amount: Amount) -> Self {
		Self {
			chain_pair,
			from_token,
			to_token: None,
			amount,
		}
	}

	pub fn with_destination_token(mut self, to_token: Option<TokenAddress>) -> Self {
		self.to_token = to_token;
		self
	}
}

/// Catalog entry behind a token reference (`None` = the native coin)
pub(crate) fn catalog_token(
	reference: Option<&TokenAddress>,
	chain_id: u64,
) -> Option<&'static Token> {
	if is_native_ref(reference) {
		tokens::native_token(chain_id)
	} else {
		tokens::token_by_address(chain_id, reference?)
	}
}

/// Coin keys naming the same asset, with the bridged stablecoin variant
/// folded into its parent key
fn coin_keys_equivalent(a: &str, b: &str) -> bool {
	let fold = |key: &str| if key == "USDC.e" { "USDC" } else { key }.to_string();
	fold(a) == fold(b)
}

fn token_ref_matches(a: Option<&TokenAddress>, b: Option<&TokenAddress>) -> bool {
	match (a, b) {
		(None, None) => true,
		(None, Some(address)) | (Some(address), None) => address.is_zero(),
		(Some(a), Some(b)) => a == b,
	}
}

/// True if the selected destination token is a different asset than the
/// selected source token
pub fn is_swap_transfer(params: &TransferParams) -> bool {
	let pair = params.chain_pair;
	let Some(to_token) = params.to_token.as_ref() else {
		// No explicit destination token: the counterpart is implied.
		return false;
	};

	let overrides = resolve_token_override(
		params.from_token.as_ref(),
		pair.source_chain_id,
		pair.destination_chain_id,
	);
	if let Some(destination) = &overrides.destination {
		return !token_ref_matches(destination.address.as_ref(), Some(to_token));
	}

	let from = catalog_token(params.from_token.as_ref(), pair.source_chain_id);
	let to = catalog_token(Some(to_token), pair.destination_chain_id);
	match (from, to) {
		(Some(from), Some(to)) => {
			let from = normalize_stablecoin_variant(from, pair.source_chain_id);
			let to = normalize_stablecoin_variant(to, pair.destination_chain_id);
			match (from.coin_key.as_deref(), to.coin_key.as_deref()) {
				(Some(a), Some(b)) => !coin_keys_equivalent(a, b),
				_ => true,
			}
		},
		// An unknown side cannot be proven to be the same asset.
		_ => true,
	}
}

/// True if a registered OFT deployment covers (token, source, destination)
pub fn is_oft_transfer_eligible(params: &TransferParams) -> bool {
	let pair = params.chain_pair;
	if chains::is_teleport_mode(pair) || is_swap_transfer(params) {
		return false;
	}

	match params.from_token.as_ref().filter(|address| !address.is_zero()) {
		Some(address) => {
			protocols::oft_config(address, pair.source_chain_id, pair.destination_chain_id)
				.is_some()
		},
		None => false,
	}
}

/// True if the selected token is the recognized chain-native stablecoin
/// for this pair and direction
pub fn is_cctp_transfer_eligible(params: &TransferParams) -> bool {
	let pair = params.chain_pair;
	if chains::is_teleport_mode(pair) || is_swap_transfer(params) {
		return false;
	}

	match params.from_token.as_ref() {
		Some(address) => protocols::cctp_transfer_supported(address, pair),
		None => false,
	}
}

/// True if the aggregator serves the pair and knows both selected tokens
pub fn is_aggregator_transfer_eligible(params: &TransferParams) -> bool {
	let pair = params.chain_pair;
	if !protocols::is_lifi_enabled_pair(pair) {
		return false;
	}

	let side_supported = |reference: Option<&TokenAddress>, chain_id: u64| match reference {
		None => true,
		Some(address) if address.is_zero() => true,
		Some(address) => protocols::lifi_supports_token(chain_id, address),
	};

	side_supported(params.from_token.as_ref(), pair.source_chain_id)
		&& side_supported(params.to_token.as_ref(), pair.destination_chain_id)
}

/// True if the chain's own bridge can carry the transfer
pub fn is_canonical_transfer_eligible(params: &TransferParams) -> bool {
	let pair = params.chain_pair;
	let direct = chains::is_deposit_mode(pair) || chains::is_withdrawal_mode(pair);
	if !direct || is_swap_transfer(params) {
		return false;
	}

	let Some(address) = params.from_token.as_ref().filter(|address| !address.is_zero()) else {
		// The native coin always rides the canonical bridge on direct pairs.
		return true;
	};

	if protocols::is_transfer_disabled(pair.source_chain_id, address) {
		return false;
	}
	if chains::is_deposit_mode(pair) && protocols::is_withdraw_only(pair.source_chain_id, address)
	{
		return false;
	}
	if let Some(allowed) = protocols::canonical_allow_list(pair) {
		if !allowed.contains(address) {
			return false;
		}
	}

	true
}

/// All structurally eligible route types for the given inputs
///
/// A zero amount short-circuits to empty: no route computation happens at
/// all. OFT eligibility is exclusive by construction.
pub fn get_eligible_routes(params: &TransferParams) -> Vec<RouteType> {
	if params.amount.validate().is_err() || params.amount.is_zero() {
		return Vec::new();
	}

	let pair = params.chain_pair;
	if chains::get_chain_by_id(pair.source_chain_id).is_none()
		|| chains::get_chain_by_id(pair.destination_chain_id).is_none()
	{
		return Vec::new();
	}

	if is_oft_transfer_eligible(params) {
		return vec![RouteType::OftV2];
	}

	if is_cctp_transfer_eligible(params) {
		let mut eligible = vec![RouteType::Cctp];
		if protocols::is_lifi_enabled_pair(pair) {
			eligible.push(RouteType::Lifi);
		}
		if chains::is_deposit_mode(pair) {
			eligible.push(RouteType::Arbitrum);
		}
		return eligible;
	}

	let mut eligible = Vec::new();
	if is_aggregator_transfer_eligible(params) {
		eligible.push(RouteType::Lifi);
	}
	if is_canonical_transfer_eligible(params) {
		eligible.push(RouteType::Arbitrum);
	}
	eligible
}
