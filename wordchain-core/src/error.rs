use std::fmt;

use thiserror::Error;

use crate::model::vocabulary::TokenId;

/// Bounded container that overflowed during indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
	Vocabulary,
	Successors,
}

impl fmt::Display for Capacity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Capacity::Vocabulary => write!(f, "vocabulary"),
			Capacity::Successors => write!(f, "successor list"),
		}
	}
}

/// Errors produced by the indexer, the generator and the retry driver.
///
/// Running out of successors or out of output space while generating is a
/// normal end of the random walk and is never reported through this type.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// A bounded vocabulary or successor list would overflow.
	#[error("{what} is full (limit: {limit})")]
	CapacityExceeded { what: Capacity, limit: usize },

	/// Nothing can be generated from this corpus.
	#[error("degenerate corpus: {0}")]
	DegenerateCorpus(&'static str),

	/// The retry driver gave up without producing the wanted ending.
	#[error("no sentence ending with '{ending}' after {attempts} attempts")]
	NoMatchingSentence { ending: char, attempts: usize },

	/// A token id outside the vocabulary.
	#[error("unknown token id {0}")]
	UnknownToken(TokenId),

	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkovError>;
