//! Top-level module for the Markov chain sentence generator.
//!
//! This module provides:
//! - The token vocabulary (`Vocabulary`)
//! - Per-token successor lists (`Successors`)
//! - The corpus indexer (`CorpusIndex`)
//! - Generation parameters (`GenerationInput`)
//! - The random walk itself (`SentenceGenerator`)

/// Ordered, deduplicated token storage with hash-backed interning.
pub mod vocabulary;

/// Observed followers of a single token, repeats included.
///
/// Supports uniform random sampling, which follows the empirical
/// next-token distribution.
pub mod successors;

/// Sanitizing, tokenization and construction of the Markov chain.
pub mod corpus_index;

/// Validated generation parameters: character budget, retry cap and
/// requested ending.
pub mod generation_input;

/// Random walk over the chain and the bounded retry driver.
pub mod generator;
