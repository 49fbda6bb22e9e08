//! Bridge Router Service
//!
//! Core logic of the route-resolution engine: token equivalence, protocol
//! eligibility, route list assembly, default selection and the shared
//! route state store.

pub mod eligibility;
pub mod routes;
pub mod selector;
pub mod store;
pub mod token_override;

pub use eligibility::{
	get_eligible_routes, is_aggregator_transfer_eligible, is_canonical_transfer_eligible,
	is_cctp_transfer_eligible, is_oft_transfer_eligible, is_swap_transfer, TransferParams,
};
pub use routes::build_route_list;
pub use selector::{route_badge, select_default_route};
pub use store::{RouteInput, RouteStore};
pub use token_override::{
	build_destination_token_list, normalize_stablecoin_variant, resolve_token_override,
};
