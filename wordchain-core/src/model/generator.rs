use log::{debug, trace, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{MarkovError, Result};

use super::corpus_index::{CorpusIndex, starts_a_sentence};
use super::generation_input::GenerationInput;
use super::vocabulary::TokenId;

/// Returns whether `token` ends with `.`, `!` or `?`.
///
/// The empty string never ends a sentence.
pub fn ends_a_sentence(token: &str) -> bool {
	matches!(token.chars().next_back(), Some('.' | '!' | '?'))
}

/// Random sentence generator over a [`CorpusIndex`].
///
/// # Responsibilities
/// - Pick a capitalized token to start from
/// - Walk the successor lists at random, joining tokens with single spaces
/// - Stop on terminal punctuation, on a token without successors, or when
///   the next token would not fit in the character budget
/// - Retry a bounded number of times until a sentence has a requested ending
///
/// The generator never mutates the index. It owns only the cached list of
/// start candidates, which depends on the index and not on the random draw.
#[derive(Debug)]
pub struct SentenceGenerator<'a> {
	index: &'a CorpusIndex,
	/// Ids of the tokens starting with an uppercase letter.
	starts: Vec<TokenId>,
}

impl<'a> SentenceGenerator<'a> {
	pub fn new(index: &'a CorpusIndex) -> Self {
		let starts = index
			.vocabulary()
			.iter()
			.filter(|(_, token)| starts_a_sentence(token))
			.map(|(id, _)| id)
			.collect();
		Self { index, starts }
	}

	/// Returns the index this generator walks.
	pub fn index(&self) -> &'a CorpusIndex {
		self.index
	}

	/// Draws a start token uniformly among the capitalized ones.
	///
	/// Falls back to the first token of the vocabulary when no token is
	/// capitalized.
	///
	/// # Errors
	/// Returns `DegenerateCorpus` if the vocabulary is empty.
	pub fn pick_start_token(&self, rng: &mut impl Rng) -> Result<TokenId> {
		if self.index.is_empty() {
			return Err(MarkovError::DegenerateCorpus("empty vocabulary"));
		}
		Ok(self.starts.choose(rng).copied().unwrap_or(0))
	}

	/// Generates one sentence from a random start token.
	///
	/// The result holds fewer than `max_length` characters. It does not
	/// necessarily end with terminal punctuation: the walk also stops on a
	/// token without successors or when the budget runs out.
	///
	/// # Errors
	/// Returns `DegenerateCorpus` if the vocabulary is empty.
	pub fn generate(&self, max_length: usize, rng: &mut impl Rng) -> Result<String> {
		let start = self.pick_start_token(rng)?;
		self.generate_from(start, max_length, rng)
	}

	/// Generates one sentence starting at token `start`.
	///
	/// If `start` alone does not fit in `max_length` the result is empty.
	///
	/// # Errors
	/// Returns `UnknownToken` if `start` is not a vocabulary id.
	pub fn generate_from(&self, start: TokenId, max_length: usize, rng: &mut impl Rng) -> Result<String> {
		let token = self.index.token(start).ok_or(MarkovError::UnknownToken(start))?;

		let mut len = token.chars().count();
		if len >= max_length {
			debug!("start token {token:?} does not fit in {max_length} characters");
			return Ok(String::new());
		}

		let mut sentence = token.to_owned();
		if ends_a_sentence(token) {
			return Ok(sentence);
		}

		let mut current = start;
		loop {
			let Some(next) = self.index.successors(current).and_then(|s| s.pick(rng)) else {
				// Dead end, the sentence stays unterminated
				break;
			};
			let Some(next_token) = self.index.token(next) else {
				break;
			};

			let next_len = len + 1 + next_token.chars().count();
			if next_len >= max_length {
				break;
			}

			sentence.push(' ');
			sentence.push_str(next_token);
			len = next_len;
			current = next;

			if ends_a_sentence(next_token) {
				break;
			}
		}

		Ok(sentence)
	}

	/// Generates sentences until one ends with the requested character.
	///
	/// Without a requested ending the first sentence is returned.
	///
	/// # Errors
	/// - `DegenerateCorpus` if the vocabulary is empty
	/// - `NoMatchingSentence` if no token of the corpus ends with the
	///   requested character (no attempt is made) or if `max_attempts`
	///   sentences were generated without a match
	pub fn generate_ending_with(&self, input: &GenerationInput, rng: &mut impl Rng) -> Result<String> {
		if self.index.is_empty() {
			return Err(MarkovError::DegenerateCorpus("empty vocabulary"));
		}

		let Some(ending) = input.ending() else {
			return self.generate(input.max_length(), rng);
		};

		if !self.index.vocabulary().iter().any(|(_, token)| token.ends_with(ending)) {
			warn!("no token of the corpus ends with {ending:?}");
			return Err(MarkovError::NoMatchingSentence { ending, attempts: 0 });
		}

		for attempt in 1..=input.max_attempts() {
			let sentence = self.generate(input.max_length(), rng)?;
			if sentence.ends_with(ending) {
				debug!("found a sentence ending with {ending:?} after {attempt} attempts");
				return Ok(sentence);
			}
			trace!("attempt {attempt} rejected: {sentence:?}");
		}

		Err(MarkovError::NoMatchingSentence { ending, attempts: input.max_attempts() })
	}
}
