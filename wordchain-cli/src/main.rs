use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordchain_core::io::read_corpus;
use wordchain_core::{CorpusIndex, GenerationInput, IndexerConfig, SAMPLE_CORPUS, SentenceGenerator};

#[derive(Parser)]
#[command(name = "wordchain", about = "Generate random sentences from a word-level Markov chain")]
struct Cli {
	/// Corpus file (defaults to a built-in excerpt of Frankenstein)
	#[arg(long)]
	corpus: Option<PathBuf>,

	/// Seed of the random source, for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Character budget of each sentence
	#[arg(long, default_value_t = 1000)]
	max_length: usize,

	/// Sentences generated before giving up on an ending
	#[arg(long, default_value_t = 10_000)]
	max_attempts: usize,

	/// Required ending of each printed sentence, one sentence per flag
	#[arg(long = "ending", default_values_t = ['?', '!'])]
	endings: Vec<char>,

	/// Characters separating tokens, a space included
	#[arg(long, default_value = " \n\r")]
	delimiters: String,

	/// Maximum number of distinct tokens
	#[arg(long)]
	max_vocabulary: Option<usize>,

	/// Maximum number of followers recorded per token
	#[arg(long)]
	max_successors: Option<usize>,

	/// Print corpus statistics before generating
	#[arg(long)]
	stats: bool,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,
}

fn init_logging(verbose: bool) {
	let level = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
		.format_timestamp(None)
		.init();
}

fn load_corpus(cli: &Cli) -> Result<String> {
	match &cli.corpus {
		Some(path) => read_corpus(path).with_context(|| format!("failed to read corpus {}", path.display())),
		None => Ok(SAMPLE_CORPUS.to_owned()),
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let config = IndexerConfig {
		delimiters: cli.delimiters.chars().collect(),
		max_vocabulary: cli.max_vocabulary,
		max_successors: cli.max_successors,
	};

	let text = load_corpus(&cli)?;
	let index = CorpusIndex::build(&text, &config).context("failed to index corpus")?;

	if cli.stats {
		let stats = index.stats();
		println!("tokens:      {}", stats.tokens);
		println!("distinct:    {}", stats.distinct);
		println!("starts:      {}", stats.start_candidates);
		println!("terminals:   {}", stats.terminal_tokens);
		println!();
	}

	let mut rng = match cli.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};
	info!("random source seeded {}", if cli.seed.is_some() { "explicitly" } else { "from the OS" });

	let generator = SentenceGenerator::new(&index);
	for (i, ending) in cli.endings.iter().enumerate() {
		let mut input = GenerationInput::default();
		input.set_max_length(cli.max_length)?;
		input.set_max_attempts(cli.max_attempts)?;
		input.set_ending(Some(*ending))?;

		let sentence = generator
			.generate_ending_with(&input, &mut rng)
			.with_context(|| format!("failed to generate a sentence ending with '{ending}'"))?;
		if i > 0 {
			println!();
		}
		println!("{sentence}");
	}

	Ok(())
}
