//! Route state store
//!
//! The single source of truth consumed by UI/executor collaborators. Every
//! call to [`RouteStore::update`] re-derives the whole [`RouteState`] from
//! an immutable input snapshot and replaces it atomically through a watch
//! channel; nothing is mutated incrementally. The aggregator query is
//! keyed by its full parameter tuple, so a response is applied only while
//! its originating key is still the current one.

use std::collections::HashMap;
use std::sync::Arc;

use bridge_config::TransferSettings;
use bridge_types::{
	Amount, ChainPair, Quote, QuoteApi, QuoteKey, QuoteRequest, RouteContext, RouteData,
	RouteState, RouteType, TokenAddress,
};
use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::eligibility::{catalog_token, get_eligible_routes, TransferParams};
use crate::routes::build_route_list;
use crate::selector::select_default_route;
use crate::token_override::{normalize_stablecoin_variant, resolve_token_override};

/// One immutable input snapshot for a recomputation
#[derive(Debug, Clone)]
pub struct RouteInput {
	pub chain_pair: ChainPair,
	/// Selected source token; `None` means the native coin
	pub from_token: Option<TokenAddress>,
	/// Selected destination token; `None` means "the counterpart asset"
	pub to_token: Option<TokenAddress>,
	pub amount: Amount,
	pub from_address: Option<String>,
	pub to_address: Option<String>,
	pub preferences: TransferSettings,
}

impl RouteInput {
	pub fn new(chain_pair: ChainPair, from_token: Option<TokenAddress>, amount: Amount) -> Self {
		Self {
			chain_pair,
			from_token,
			to_token: None,
			amount,
			from_address: None,
			to_address: None,
			preferences: TransferSettings::default(),
		}
	}

	pub fn with_destination_token(mut self, to_token: Option<TokenAddress>) -> Self {
		self.to_token = to_token;
		self
	}

	pub fn with_addresses(
		mut self,
		from_address: Option<String>,
		to_address: Option<String>,
	) -> Self {
		self.from_address = from_address;
		self.to_address = to_address;
		self
	}

	pub fn with_preferences(mut self, preferences: TransferSettings) -> Self {
		self.preferences = preferences;
		self
	}

	fn transfer_params(&self) -> TransferParams {
		TransferParams::new(self.chain_pair, self.from_token.clone(), self.amount.clone())
			.with_destination_token(self.to_token.clone())
	}

	/// Destination token for the aggregator request: the explicit pick,
	/// else the override destination, else the coin-key counterpart, else
	/// the native coin
	fn destination_token_address(&self) -> TokenAddress {
		if let Some(address) = &self.to_token {
			return address.clone();
		}

		let pair = self.chain_pair;
		let overrides = resolve_token_override(
			self.from_token.as_ref(),
			pair.source_chain_id,
			pair.destination_chain_id,
		);
		if let Some(destination) = overrides.destination {
			return destination.address_or_zero();
		}

		catalog_token(self.from_token.as_ref(), pair.source_chain_id)
			.map(|token| normalize_stablecoin_variant(token, pair.source_chain_id))
			.and_then(|token| token.coin_key)
			.and_then(|coin_key| {
				bridge_registry::token_by_coin_key(pair.destination_chain_id, &coin_key)
			})
			.map(|token| token.address_or_zero())
			.unwrap_or_else(TokenAddress::zero)
	}

	fn quote_request(&self) -> QuoteRequest {
		QuoteRequest {
			from_chain_id: self.chain_pair.source_chain_id,
			to_chain_id: self.chain_pair.destination_chain_id,
			from_token: self
				.from_token
				.clone()
				.unwrap_or_else(TokenAddress::zero)
				.to_string(),
			to_token: self.destination_token_address().to_string(),
			from_amount: self.amount.clone(),
			from_address: self.from_address.clone(),
			to_address: self.to_address.clone(),
			deny_bridges: self.preferences.deny_bridges.clone(),
			deny_exchanges: self.preferences.deny_exchanges.clone(),
			slippage: self.preferences.slippage,
		}
	}
}

/// Shared observable route state
pub struct RouteStore {
	api: Arc<dyn QuoteApi>,
	default_preferences: TransferSettings,
	state_tx: watch::Sender<RouteState>,
	user_route: Mutex<Option<RouteType>>,
	current_key: Mutex<Option<QuoteKey>>,
	quote_cache: Mutex<HashMap<QuoteKey, Arc<Vec<Quote>>>>,
	last_input: Mutex<Option<RouteInput>>,
}

impl RouteStore {
	pub fn new(api: Arc<dyn QuoteApi>) -> Self {
		let (state_tx, _) = watch::channel(RouteState::empty());
		Self {
			api,
			default_preferences: TransferSettings::default(),
			state_tx,
			user_route: Mutex::new(None),
			current_key: Mutex::new(None),
			quote_cache: Mutex::new(HashMap::new()),
			last_input: Mutex::new(None),
		}
	}

	/// Observe state replacements
	pub fn subscribe(&self) -> watch::Receiver<RouteState> {
		self.state_tx.subscribe()
	}

	/// Cheap read of the current state
	pub fn snapshot(&self) -> RouteState {
		self.state_tx.borrow().clone()
	}

	/// Record an explicit user route choice and re-derive the state
	///
	/// A choice that does not exist in the freshly computed routes is
	/// dropped silently and default selection takes over.
	pub async fn select_route(&self, route_type: RouteType) {
		*self.user_route.lock().await = Some(route_type);
		self.recompute_last().await;
	}

	/// Forget the user's route choice and fall back to default selection
	pub async fn clear_route_selection(&self) {
		*self.user_route.lock().await = None;
		self.recompute_last().await;
	}

	async fn recompute_last(&self) {
		let last = self.last_input.lock().await.clone();
		if let Some(input) = last {
			self.update(input).await;
		}
	}

	/// Re-derive the whole state from one input snapshot
	///
	/// Safe to invoke concurrently with itself for different snapshots:
	/// the snapshot whose key was registered last wins, and settled
	/// fetches for superseded keys are discarded.
	pub async fn update(&self, input: RouteInput) {
		*self.last_input.lock().await = Some(input.clone());

		let params = input.transfer_params();
		let eligible = get_eligible_routes(&params);
		let has_modified_settings = input.preferences != self.default_preferences;

		let request = input.quote_request();
		let key = request.key();
		*self.current_key.lock().await = Some(key.clone());

		let wants_aggregator = eligible.contains(&RouteType::Lifi);
		if !wants_aggregator {
			let routes = build_route_list(&eligible, &input.amount, None);
			let (user_selected, selected) = self.resolve_selection(&routes).await;
			self.publish_if_current(
				&key,
				RouteState {
					eligible_route_types: eligible,
					routes,
					is_loading: false,
					error: None,
					has_low_liquidity: false,
					has_modified_settings,
					selected_route: selected,
					user_selected_route: user_selected,
					context: None,
				},
			)
			.await;
			return;
		}

		// Loading snapshot: the locally-synthesizable entries are already
		// known while the aggregator fetch is in flight. The user's pick is
		// not dropped here; only the settled route list decides its fate.
		let local_routes = build_route_list(&eligible, &input.amount, None);
		let (user_selected, selected) = self.provisional_selection(&local_routes).await;
		self.publish_if_current(
			&key,
			RouteState {
				eligible_route_types: eligible.clone(),
				routes: local_routes,
				is_loading: true,
				error: None,
				has_low_liquidity: false,
				has_modified_settings,
				selected_route: selected,
				user_selected_route: user_selected,
				context: None,
			},
		)
		.await;

		let result = self.fetch_or_reuse(&key, &request).await;

		if !self.is_current(&key).await {
			debug!(
				"discarding stale aggregator response for {}",
				input.chain_pair
			);
			return;
		}

		let sole_aggregator = eligible.len() == 1;
		match result {
			Ok(quotes) => {
				let routes = build_route_list(&eligible, &input.amount, Some(&quotes));
				let usable_aggregator_routes = routes
					.iter()
					.filter(|route| route.route_type.is_aggregator())
					.count();
				let has_low_liquidity = sole_aggregator && usable_aggregator_routes == 0;
				let (user_selected, selected) = self.resolve_selection(&routes).await;
				let context = selected
					.filter(RouteType::is_aggregator)
					.and_then(|route_type| derive_context(route_type, &routes, &input));
				self.publish_if_current(
					&key,
					RouteState {
						eligible_route_types: eligible,
						routes,
						is_loading: false,
						error: None,
						has_low_liquidity,
						has_modified_settings,
						selected_route: selected,
						user_selected_route: user_selected,
						context,
					},
				)
				.await;
			},
			Err(error) => {
				warn!("aggregator fetch failed: {}", error);
				// Alternate protocols may still carry the transfer, so the
				// failure is surfaced only when nothing else is eligible.
				let routes = build_route_list(&eligible, &input.amount, None);
				let surfaced = sole_aggregator.then(|| error.to_string());
				let (user_selected, selected) = self.resolve_selection(&routes).await;
				self.publish_if_current(
					&key,
					RouteState {
						eligible_route_types: eligible,
						routes,
						is_loading: false,
						error: surfaced,
						has_low_liquidity: false,
						has_modified_settings,
						selected_route: selected,
						user_selected_route: user_selected,
						context: None,
					},
				)
				.await;
			},
		}
	}

	/// One live fetch per distinct key; completed fetches are reused
	async fn fetch_or_reuse(
		&self,
		key: &QuoteKey,
		request: &QuoteRequest,
	) -> Result<Arc<Vec<Quote>>, bridge_types::AdapterError> {
		if let Some(cached) = self.quote_cache.lock().await.get(key) {
			debug!("reusing aggregator quotes for unchanged query key");
			return Ok(Arc::clone(cached));
		}

		let quotes = Arc::new(self.api.fetch_quotes(request).await?);
		self.quote_cache
			.lock()
			.await
			.insert(key.clone(), Arc::clone(&quotes));
		Ok(quotes)
	}

	/// Selection for an in-flight snapshot: the user's pick is kept on
	/// record even when the provisional list does not contain it yet
	async fn provisional_selection(
		&self,
		routes: &[RouteData],
	) -> (Option<RouteType>, Option<RouteType>) {
		let user_route = self.user_route.lock().await;
		match *user_route {
			Some(route_type) if routes.iter().any(|route| route.route_type == route_type) => {
				(Some(route_type), Some(route_type))
			},
			Some(route_type) => (Some(route_type), select_default_route(routes)),
			None => (None, select_default_route(routes)),
		}
	}

	/// Retain the user's pick while it exists in `routes`, else drop it
	/// silently and apply default selection
	async fn resolve_selection(
		&self,
		routes: &[RouteData],
	) -> (Option<RouteType>, Option<RouteType>) {
		let mut user_route = self.user_route.lock().await;
		if let Some(route_type) = *user_route {
			if routes.iter().any(|route| route.route_type == route_type) {
				return (Some(route_type), Some(route_type));
			}
			*user_route = None;
		}
		(None, select_default_route(routes))
	}

	async fn is_current(&self, key: &QuoteKey) -> bool {
		self.current_key.lock().await.as_ref() == Some(key)
	}

	async fn publish_if_current(&self, key: &QuoteKey, state: RouteState) {
		let current = self.current_key.lock().await;
		if current.as_ref() == Some(key) {
			self.state_tx.send_replace(state);
		}
	}
}

/// Execution parameters from the winning quote of a settled fetch
fn derive_context(
	route_type: RouteType,
	routes: &[RouteData],
	input: &RouteInput,
) -> Option<RouteContext> {
	let route = routes.iter().find(|route| route.route_type == route_type)?;
	let quote = route.quote()?;

	Some(RouteContext {
		route_type,
		quote_id: quote.id.clone(),
		tool: quote.tool.clone(),
		from_amount: input.amount.clone(),
		to_amount: quote.to_amount.amount.clone(),
		slippage: input.preferences.slippage,
		execution_duration: quote.execution_duration,
		transaction_request: quote.transaction_request.clone(),
	})
}
