//! Chain pair model

use serde::{Deserialize, Serialize};

/// An ordered (source, destination) pair of chain ids
///
/// Whether the pair is a deposit, withdrawal or teleport is a property of the
/// chain registry, not of the pair itself; the registry exposes the mode
/// predicates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ChainPair {
	/// Chain id the transfer leaves from
	pub source_chain_id: u64,
	/// Chain id the transfer arrives on
	pub destination_chain_id: u64,
}

impl ChainPair {
	pub fn new(source_chain_id: u64, destination_chain_id: u64) -> Self {
		Self {
			source_chain_id,
			destination_chain_id,
		}
	}

	/// The same pair with source and destination swapped
	pub fn reversed(&self) -> Self {
		Self {
			source_chain_id: self.destination_chain_id,
			destination_chain_id: self.source_chain_id,
		}
	}

	pub fn is_same_chain(&self) -> bool {
		self.source_chain_id == self.destination_chain_id
	}
}

impl std::fmt::Display for ChainPair {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} -> {}", self.source_chain_id, self.destination_chain_id)
	}
}
