//! Token and token-override models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A lower-cased EVM contract address
///
/// Addresses are compared case-insensitively everywhere, so the canonical
/// internal form is lower case. Parsing is total: malformed input yields
/// `None`, never a panic, because callers are typically fed unvalidated
/// user input mid-typing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TokenAddress(String);

impl TokenAddress {
	/// Parse an address, normalizing to lower case
	pub fn parse(value: &str) -> Option<Self> {
		let value = value.trim();
		if value.len() != 42 || !value.starts_with("0x") {
			return None;
		}
		if !value[2..].chars().all(|c| c.is_ascii_hexdigit()) {
			return None;
		}
		Some(Self(value.to_ascii_lowercase()))
	}

	/// The zero address, used interchangeably with `None` for native coins
	pub fn zero() -> Self {
		Self(format!("0x{}", "0".repeat(40)))
	}

	pub fn is_zero(&self) -> bool {
		self.0[2..].chars().all(|c| c == '0')
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Case-insensitive comparison against a raw string
	pub fn matches(&self, other: &str) -> bool {
		self.0.eq_ignore_ascii_case(other.trim())
	}
}

impl std::fmt::Display for TokenAddress {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// True if the reference denotes the chain's native coin
///
/// Both `None` and the zero address are accepted as native references.
pub fn is_native_ref(token: Option<&TokenAddress>) -> bool {
	match token {
		None => true,
		Some(address) => address.is_zero(),
	}
}

/// Cross-chain metadata attached to a joined token record
///
/// Carries the counterpart-side representation of the same asset, keyed in
/// `Token::bridge_info` by the counterpart chain id. Additive display
/// context only; routing decisions never read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeInfo {
	/// Counterpart token address (`None` for a native coin)
	pub token_address: Option<TokenAddress>,
	pub name: String,
	pub symbol: String,
	pub decimals: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<String>,
}

/// A token catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	/// Chain this entry lives on
	pub chain_id: u64,
	/// Contract address, or `None` for the chain's native coin
	pub address: Option<TokenAddress>,
	pub symbol: String,
	pub name: String,
	pub decimals: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub logo_uri: Option<String>,
	/// Stable cross-chain asset identifier used to join catalogs
	#[serde(skip_serializing_if = "Option::is_none")]
	pub coin_key: Option<String>,
	/// Counterpart metadata keyed by counterpart chain id
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub bridge_info: HashMap<u64, BridgeInfo>,
}

impl Token {
	/// Create a native-coin entry
	pub fn native(chain_id: u64, symbol: &str, name: &str, decimals: u8, coin_key: &str) -> Self {
		Self {
			chain_id,
			address: None,
			symbol: symbol.to_string(),
			name: name.to_string(),
			decimals,
			logo_uri: None,
			coin_key: Some(coin_key.to_string()),
			bridge_info: HashMap::new(),
		}
	}

	/// Create an ERC-20 entry; panics only on malformed static table data
	pub fn erc20(
		chain_id: u64,
		address: &str,
		symbol: &str,
		name: &str,
		decimals: u8,
		coin_key: &str,
	) -> Self {
		let address = TokenAddress::parse(address).expect("malformed static token address");
		Self {
			chain_id,
			address: Some(address),
			symbol: symbol.to_string(),
			name: name.to_string(),
			decimals,
			logo_uri: None,
			coin_key: Some(coin_key.to_string()),
			bridge_info: HashMap::new(),
		}
	}

	pub fn with_logo(mut self, logo_uri: &str) -> Self {
		self.logo_uri = Some(logo_uri.to_string());
		self
	}

	pub fn is_native(&self) -> bool {
		match &self.address {
			None => true,
			Some(address) => address.is_zero(),
		}
	}

	/// Address of this token as seen on the wire (zero address for native)
	pub fn address_or_zero(&self) -> TokenAddress {
		self.address.clone().unwrap_or_else(TokenAddress::zero)
	}

	/// Fill a missing logo from the other side of a cross-chain mapping
	///
	/// The caller decides fallback direction: the receiver keeps its own
	/// logo and only borrows `other`'s when it has none.
	pub fn or_logo_from(mut self, other: &Token) -> Self {
		if self.logo_uri.is_none() {
			self.logo_uri = other.logo_uri.clone();
		}
		self
	}
}

/// Result of resolving a token across a chain pair
///
/// `{None, None}` means "no special case applies, use the ordinary lookup
/// path". A present `source` with an absent `destination` means the asset
/// has no sane representation on the destination chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenOverride {
	pub source: Option<Token>,
	pub destination: Option<Token>,
}

impl TokenOverride {
	pub fn none() -> Self {
		Self::default()
	}

	pub fn is_none(&self) -> bool {
		self.source.is_none() && self.destination.is_none()
	}
}
