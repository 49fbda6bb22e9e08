//! Bridge Router Adapters
//!
//! Clients for the external quote aggregator.

pub mod lifi;

pub use bridge_types::{AdapterError, AdapterResult, QuoteApi};
pub use lifi::LifiClient;
