//! Word-level Markov chain sentence generation library.
//!
//! This crate provides a first-order Markov text generator, including:
//! - A corpus indexer building a deduplicated vocabulary and successor lists
//! - A sentence generator walking the successor lists at random
//! - A bounded retry driver producing sentences with a chosen ending
//! - I/O helpers for loading a corpus from disk
//!
//! The model is built once and only read afterwards, so a `CorpusIndex` can be
//! shared between threads without synchronization. Every random draw goes
//! through a caller-supplied [`rand::Rng`], which makes runs reproducible
//! with a seeded generator.

/// Corpus indexing and sentence generation.
pub mod model;

/// Typed errors returned by the indexer and the generator.
pub mod error;

/// Corpus loading helpers.
pub mod io;

/// Built-in sample corpus.
pub mod sample;

pub use error::{Capacity, MarkovError, Result};
pub use model::corpus_index::{CorpusIndex, CorpusStats, IndexerConfig, sanitize};
pub use model::generation_input::GenerationInput;
pub use model::generator::{SentenceGenerator, ends_a_sentence};
pub use model::vocabulary::{TokenId, Vocabulary};
pub use sample::SAMPLE_CORPUS;
