use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{Capacity, MarkovError, Result};

use super::vocabulary::TokenId;

/// Outgoing edges of one token in the Markov chain.
///
/// Every observation of "`token` was followed by `next`" is stored as its own
/// entry, so a follower seen three times appears three times. Drawing
/// uniformly over the entries therefore reproduces the empirical next-token
/// distribution without keeping counters.
///
/// ## Invariants
/// - Entries keep the order in which they were observed
/// - Every entry is an id of the vocabulary the list was built against
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Successors {
	ids: Vec<TokenId>,
}

impl Successors {
	/// Records one observation of `next`.
	///
	/// # Errors
	/// Returns `CapacityExceeded` if `limit` is set and the list already holds
	/// that many entries.
	pub fn push(&mut self, next: TokenId, limit: Option<usize>) -> Result<()> {
		if let Some(limit) = limit {
			if self.ids.len() >= limit {
				return Err(MarkovError::CapacityExceeded { what: Capacity::Successors, limit });
			}
		}
		self.ids.push(next);
		Ok(())
	}

	/// Draws one successor uniformly at random.
	///
	/// Returns `None` if the token was never followed by anything.
	pub fn pick(&self, rng: &mut impl Rng) -> Option<TokenId> {
		self.ids.choose(rng).copied()
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = TokenId> + '_ {
		self.ids.iter().copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn empty_list_picks_nothing() {
		let successors = Successors::default();
		assert_eq!(successors.pick(&mut StdRng::seed_from_u64(1)), None);
	}

	#[test]
	fn duplicates_are_kept_in_order() {
		let mut successors = Successors::default();
		for id in [3, 1, 3, 3] {
			successors.push(id, None).unwrap();
		}
		assert_eq!(successors.iter().collect::<Vec<_>>(), vec![3, 1, 3, 3]);
	}

	#[test]
	fn pick_follows_observed_frequency() {
		let mut successors = Successors::default();
		for id in [7, 7, 7, 9] {
			successors.push(id, None).unwrap();
		}
		let mut rng = StdRng::seed_from_u64(42);
		let sevens = (0..4000).filter(|_| successors.pick(&mut rng) == Some(7)).count();
		// Expected 3000; generous bounds keep the check stable
		assert!((2700..3300).contains(&sevens), "got {sevens}");
	}

	#[test]
	fn bounded_list_overflows() {
		let mut successors = Successors::default();
		successors.push(0, Some(1)).unwrap();
		let err = successors.push(0, Some(1)).unwrap_err();
		assert!(matches!(err, MarkovError::CapacityExceeded { what: Capacity::Successors, limit: 1 }));
		assert_eq!(successors.len(), 1);
	}
}
