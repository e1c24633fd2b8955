//! CLI integration tests. Every run is seeded so the output is stable.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wordchain() -> Command {
	#[allow(deprecated)]
	Command::cargo_bin("wordchain").unwrap()
}

#[test]
fn default_run_prints_question_then_exclamation() {
	let output = wordchain().args(["--seed", "1"]).output().unwrap();
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout).unwrap();
	let sentences: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
	assert_eq!(sentences.len(), 2, "{stdout}");
	assert!(sentences[0].ends_with('?'));
	assert!(sentences[1].ends_with('!'));
}

#[test]
fn seeded_runs_are_reproducible() {
	let first = wordchain().args(["--seed", "99"]).output().unwrap();
	let second = wordchain().args(["--seed", "99"]).output().unwrap();
	assert_eq!(first.stdout, second.stdout);
}

#[test]
fn corpus_file_and_single_ending() {
	let dir = TempDir::new().unwrap();
	let input = dir.path().join("corpus.txt");
	std::fs::write(&input, "Hello world. Goodbye world!").unwrap();

	wordchain()
		.arg("--corpus")
		.arg(&input)
		.args(["--seed", "5", "--ending", "."])
		.assert()
		.success()
		.stdout("Hello world.\n");
}

#[test]
fn stats_are_printed() {
	let dir = TempDir::new().unwrap();
	let input = dir.path().join("corpus.txt");
	std::fs::write(&input, "Hello world. Goodbye world!").unwrap();

	wordchain()
		.arg("--corpus")
		.arg(&input)
		.args(["--stats", "--seed", "5", "--ending", "!"])
		.assert()
		.success()
		.stdout(predicate::str::contains("distinct:    4"))
		.stdout(predicate::str::contains("Goodbye world!"));
}

#[test]
fn unreachable_ending_fails() {
	let dir = TempDir::new().unwrap();
	let input = dir.path().join("corpus.txt");
	std::fs::write(&input, "Nothing here asks anything.").unwrap();

	wordchain()
		.arg("--corpus")
		.arg(&input)
		.args(["--ending", "?"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("no sentence ending with '?'"));
}

#[test]
fn empty_corpus_fails() {
	let dir = TempDir::new().unwrap();
	let input = dir.path().join("empty.txt");
	std::fs::write(&input, "").unwrap();

	wordchain()
		.arg("--corpus")
		.arg(&input)
		.assert()
		.failure()
		.stderr(predicate::str::contains("degenerate corpus"));
}

#[test]
fn missing_corpus_file_fails() {
	wordchain()
		.args(["--corpus", "/no/such/corpus.txt"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("failed to read corpus"));
}

#[test]
fn capacity_overflow_is_reported() {
	wordchain()
		.args(["--max-vocabulary", "3"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("vocabulary is full"));
}

#[test]
fn delimiters_without_space_are_rejected() {
	for delimiters in ["", ",", "\n"] {
		wordchain()
			.args(["--delimiters", delimiters])
			.assert()
			.failure()
			.stderr(predicate::str::contains("invalid configuration"));
	}
}

#[test]
fn oversized_length_is_rejected() {
	wordchain()
		.args(["--max-length", "100001"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("max_length must be between"));
}
