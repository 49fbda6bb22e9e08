//! Bridge Router Types
//!
//! Shared models and traits for the cross-chain route resolver.
//! This crate contains all domain models organized by business entity.

pub mod adapters;
pub mod amount;
pub mod chains;
pub mod quotes;
pub mod routes;
pub mod tokens;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use amount::Amount;

pub use chains::ChainPair;

pub use tokens::{is_native_ref, BridgeInfo, Token, TokenAddress, TokenOverride};

pub use routes::{RouteBadge, RouteContext, RouteData, RoutePayload, RouteState, RouteType};

pub use quotes::{
	ProtocolData, Quote, QuoteKey, QuoteOrder, QuoteRequest, QuotesResponse, TokenAmount,
	WireToken,
};

pub use adapters::{AdapterError, AdapterResult, QuoteApi};
