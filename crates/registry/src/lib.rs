//! Bridge Router Registry
//!
//! Statically known chains, token catalogs and protocol support tables.
//! Everything here is data: lookups are total and never panic on
//! unregistered ids, because callers feed them unvalidated input.

pub mod chains;
pub mod protocols;
pub mod tokens;

pub use chains::{
	get_chain_by_id, get_child_chain_ids, is_deposit_mode, is_teleport_mode, is_testnet_pair,
	is_withdrawal_mode, native_is_ether, ChainMeta, NativeCurrency,
};

pub use tokens::{
	coin_key_index, native_token, token_by_address, token_by_coin_key, tokens_by_chain,
};

pub use protocols::{
	canonical_allow_list, cctp_transfer_supported, is_lifi_enabled_pair, is_transfer_disabled,
	is_withdraw_only, lifi_supports_token, oft_config, OftConfig,
};
