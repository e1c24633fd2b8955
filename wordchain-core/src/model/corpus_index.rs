use log::debug;
use serde::Serialize;

use crate::error::{MarkovError, Result};

use super::generator::ends_a_sentence;
use super::successors::Successors;
use super::vocabulary::{TokenId, Vocabulary};

/// Delimiters used by the reference program: space, newline, carriage return.
pub const DEFAULT_DELIMITERS: [char; 3] = [' ', '\n', '\r'];

/// Parameters of the indexing phase.
///
/// Bounds are optional: with `None` the containers grow with the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexerConfig {
	/// Characters separating tokens.
	pub delimiters: Vec<char>,
	/// Maximum number of distinct tokens.
	pub max_vocabulary: Option<usize>,
	/// Maximum number of entries in a single successor list.
	pub max_successors: Option<usize>,
}

impl Default for IndexerConfig {
	fn default() -> Self {
		Self {
			delimiters: DEFAULT_DELIMITERS.to_vec(),
			max_vocabulary: None,
			max_successors: None,
		}
	}
}

impl IndexerConfig {
	/// Checks that the delimiter set can split a sanitized corpus.
	///
	/// Sanitizing turns every non-printable character into a space and
	/// generated sentences are joined with spaces, so the set must contain
	/// `' '`. Other printable delimiters are allowed next to it.
	///
	/// # Errors
	/// Returns `InvalidConfig` for an empty set or a set without a space.
	pub fn validate(&self) -> Result<()> {
		if self.delimiters.is_empty() {
			return Err(MarkovError::InvalidConfig("delimiter set is empty".to_owned()));
		}
		if !self.delimiters.contains(&' ') {
			return Err(MarkovError::InvalidConfig(format!(
				"delimiter set {:?} must contain a space",
				self.delimiters
			)));
		}
		Ok(())
	}
}

/// Summary of an indexed corpus.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CorpusStats {
	/// Number of tokens read from the corpus, repeats included.
	pub tokens: usize,
	/// Number of distinct tokens.
	pub distinct: usize,
	/// Distinct tokens that may start a sentence.
	pub start_candidates: usize,
	/// Distinct tokens that end a sentence.
	pub terminal_tokens: usize,
}

/// Returns whether `c` survives sanitizing.
///
/// ASCII follows the C `isprint` test. Outside ASCII, letters, digits and
/// symbols are kept while control, formatting and replacement characters are
/// not.
fn is_printable(c: char) -> bool {
	if c.is_ascii() {
		return c == ' ' || c.is_ascii_graphic();
	}
	!(c.is_control() || c.is_whitespace() || matches!(c, '\u{FFFD}' | '\u{FEFF}' | '\u{200B}'))
}

/// Replaces every non-printable character with a single space.
///
/// Stray encoding artifacts would otherwise glue onto neighbouring words and
/// produce tokens such as `"\u{FFFD}the"` that look like `"the"` but are
/// interned separately.
pub fn sanitize(text: &str) -> String {
	text.chars().map(|c| if is_printable(c) { c } else { ' ' }).collect()
}

/// First-order Markov chain over whitespace-delimited tokens.
///
/// Holds the vocabulary and, for every token, the list of tokens observed
/// right after it. Built once, then only read: generators borrow it
/// immutably and several of them may run in parallel.
///
/// # Invariants
/// - `successors.len() == vocabulary.len()`
/// - Every id stored in a successor list is a valid vocabulary id
#[derive(Clone, Debug, Default)]
pub struct CorpusIndex {
	vocabulary: Vocabulary,
	/// Successor lists indexed by `TokenId`.
	successors: Vec<Successors>,
	max_successors: Option<usize>,
	/// Total number of tokens consumed.
	token_count: usize,
}

impl CorpusIndex {
	/// Creates an empty index with the bounds of `config`.
	pub fn with_config(config: &IndexerConfig) -> Self {
		let vocabulary = match config.max_vocabulary {
			Some(limit) => Vocabulary::with_max_size(limit),
			None => Vocabulary::new(),
		};
		Self {
			vocabulary,
			successors: Vec::new(),
			max_successors: config.max_successors,
			token_count: 0,
		}
	}

	/// Sanitizes `text` and indexes it in one go.
	///
	/// # Errors
	/// - `InvalidConfig` if the delimiter set is rejected by
	///   [`IndexerConfig::validate`]
	/// - `CapacityExceeded` if a configured bound is hit. The partially
	///   built index is dropped.
	pub fn build(text: &str, config: &IndexerConfig) -> Result<Self> {
		config.validate()?;
		let mut index = Self::with_config(config);
		let clean = sanitize(text);
		index.tokenize_and_index(&clean, &config.delimiters)?;

		debug!(
			"indexed {} tokens, {} distinct, {} successor entries",
			index.token_count,
			index.vocabulary.len(),
			index.successors.iter().map(Successors::len).sum::<usize>()
		);
		Ok(index)
	}

	/// Splits `text` on `delimiters` and records every adjacent token pair.
	///
	/// Tokens are maximal runs of non-delimiter characters, trailing
	/// punctuation included. The first token is interned without a
	/// predecessor. Text without any token leaves the index untouched.
	///
	/// Calling this again appends another independent run: the last token of
	/// the previous text is not linked to the first token of this one.
	///
	/// # Errors
	/// Returns `CapacityExceeded` if the vocabulary or a successor list would
	/// overflow its configured bound.
	pub fn tokenize_and_index(&mut self, text: &str, delimiters: &[char]) -> Result<()> {
		let mut tokens = text.split(|c: char| delimiters.contains(&c)).filter(|t| !t.is_empty());

		let Some(first) = tokens.next() else {
			return Ok(());
		};
		let mut prev = self.intern(first)?;
		self.token_count += 1;

		for token in tokens {
			let next = self.intern(token)?;
			self.successors[prev].push(next, self.max_successors)?;
			self.token_count += 1;
			prev = next;
		}

		Ok(())
	}

	/// Interns `token` and keeps the successor table aligned with the vocabulary.
	pub fn intern(&mut self, token: &str) -> Result<TokenId> {
		let id = self.vocabulary.intern(token)?;
		if id == self.successors.len() {
			self.successors.push(Successors::default());
		}
		Ok(id)
	}

	/// Returns the token vocabulary.
	pub fn vocabulary(&self) -> &Vocabulary {
		&self.vocabulary
	}

	/// Returns the successor list of `id`, or `None` for an unknown id.
	pub fn successors(&self, id: TokenId) -> Option<&Successors> {
		self.successors.get(id)
	}

	/// Returns the text of token `id`.
	pub fn token(&self, id: TokenId) -> Option<&str> {
		self.vocabulary.get(id)
	}

	/// Returns `true` if no token has been indexed.
	pub fn is_empty(&self) -> bool {
		self.vocabulary.is_empty()
	}

	/// Computes token counts and start / terminal candidates.
	pub fn stats(&self) -> CorpusStats {
		CorpusStats {
			tokens: self.token_count,
			distinct: self.vocabulary.len(),
			start_candidates: self.vocabulary.iter().filter(|(_, t)| starts_a_sentence(t)).count(),
			terminal_tokens: self.vocabulary.iter().filter(|(_, t)| ends_a_sentence(t)).count(),
		}
	}
}

/// Returns whether the first character of `token` is an uppercase letter.
pub(crate) fn starts_a_sentence(token: &str) -> bool {
	token.chars().next().is_some_and(char::is_uppercase)
}
