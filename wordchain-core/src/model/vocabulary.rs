use std::collections::HashMap;

use crate::error::{Capacity, MarkovError, Result};

/// Stable identity of a token: its position in the vocabulary.
pub type TokenId = usize;

/// Ordered, deduplicated set of tokens.
///
/// Tokens are owned copies of the corpus substrings, so the vocabulary does
/// not borrow the text it was built from.
///
/// # Invariants
/// - No two entries are equal as strings
/// - Ids are assigned in order of first appearance and never change
/// - `lookup` and `tokens` always describe the same set
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
	/// Tokens in insertion order, indexed by `TokenId`.
	tokens: Vec<String>,
	/// Reverse mapping used for interning.
	lookup: HashMap<String, TokenId>,
	/// Optional upper bound on the number of distinct tokens.
	max_size: Option<usize>,
}

impl Vocabulary {
	/// Creates an empty vocabulary that grows without limit.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty vocabulary holding at most `max_size` tokens.
	pub fn with_max_size(max_size: usize) -> Self {
		Self { max_size: Some(max_size), ..Self::default() }
	}

	/// Returns the id of `token`, inserting it first if it is new.
	///
	/// Interning the same string twice always yields the same id.
	///
	/// # Errors
	/// Returns `CapacityExceeded` if the token is new and the vocabulary
	/// already holds `max_size` tokens.
	pub fn intern(&mut self, token: &str) -> Result<TokenId> {
		if let Some(&id) = self.lookup.get(token) {
			return Ok(id);
		}

		if let Some(limit) = self.max_size {
			if self.tokens.len() >= limit {
				return Err(MarkovError::CapacityExceeded { what: Capacity::Vocabulary, limit });
			}
		}

		let id = self.tokens.len();
		self.tokens.push(token.to_owned());
		self.lookup.insert(token.to_owned(), id);
		Ok(id)
	}

	/// Returns the id of an already interned token.
	pub fn id(&self, token: &str) -> Option<TokenId> {
		self.lookup.get(token).copied()
	}

	/// Returns the token text for `id`.
	pub fn get(&self, id: TokenId) -> Option<&str> {
		self.tokens.get(id).map(String::as_str)
	}

	pub fn contains(&self, token: &str) -> bool {
		self.lookup.contains_key(token)
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates over `(id, token)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
		self.tokens.iter().enumerate().map(|(id, token)| (id, token.as_str()))
	}
}
