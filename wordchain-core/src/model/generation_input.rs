use crate::error::{MarkovError, Result};

/// Output budget of the reference program, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 1000;

/// Default cap on regenerations when looking for a given ending.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Largest accepted character budget.
pub const MAX_LENGTH_LIMIT: usize = 100_000;

/// Largest accepted retry cap.
pub const MAX_ATTEMPTS_LIMIT: usize = 100_000;

/// Characters accepted as a requested sentence ending.
pub const SENTENCE_ENDINGS: [char; 3] = ['.', '!', '?'];

/// Parameters for generating one sentence with [`SentenceGenerator::generate_ending_with`].
///
/// [`SentenceGenerator::generate_ending_with`]: super::generator::SentenceGenerator::generate_ending_with
///
/// # Invariants
/// - `2 <= max_length <= MAX_LENGTH_LIMIT`
/// - `1 <= max_attempts <= MAX_ATTEMPTS_LIMIT`
/// - `ending` is `None` or one of `.`, `!`, `?`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationInput {
	/// Character budget of the output. Generation stops before reaching it.
	max_length: usize,

	/// Number of sentences generated before giving up on `ending`.
	max_attempts: usize,

	/// Required last character, or `None` to accept any sentence.
	ending: Option<char>,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			max_length: DEFAULT_MAX_LENGTH,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
			ending: None,
		}
	}
}

impl GenerationInput {
	/// Returns the character budget.
	pub fn max_length(&self) -> usize {
		self.max_length
	}

	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	pub fn ending(&self) -> Option<char> {
		self.ending
	}

	/// Sets the character budget.
	///
	/// # Errors
	/// Returns an error if the budget cannot hold a single character plus
	/// room for a terminator, or if it exceeds `MAX_LENGTH_LIMIT`.
	pub fn set_max_length(&mut self, max_length: usize) -> Result<()> {
		if !(2..=MAX_LENGTH_LIMIT).contains(&max_length) {
			return Err(MarkovError::InvalidConfig(format!(
				"max_length must be between 2 and {MAX_LENGTH_LIMIT}, got {max_length}"
			)));
		}
		self.max_length = max_length;
		Ok(())
	}

	/// Sets how many sentences may be generated before giving up.
	///
	/// # Errors
	/// Returns an error if `max_attempts` is zero or exceeds `MAX_ATTEMPTS_LIMIT`.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<()> {
		if !(1..=MAX_ATTEMPTS_LIMIT).contains(&max_attempts) {
			return Err(MarkovError::InvalidConfig(format!(
				"max_attempts must be between 1 and {MAX_ATTEMPTS_LIMIT}, got {max_attempts}"
			)));
		}
		self.max_attempts = max_attempts;
		Ok(())
	}

	/// Sets the required sentence ending.
	///
	/// # Errors
	/// Returns an error if `ending` is not sentence-ending punctuation.
	pub fn set_ending(&mut self, ending: Option<char>) -> Result<()> {
		if let Some(c) = ending {
			if !SENTENCE_ENDINGS.contains(&c) {
				return Err(MarkovError::InvalidConfig(format!("ending must be one of '.', '!', '?', got {c:?}")));
			}
		}
		self.ending = ending;
		Ok(())
	}
}
