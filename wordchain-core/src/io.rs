use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Reads a corpus file and returns its whole content as text.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 sequences are replaced by U+FFFD, which the indexer's
///   sanitizing pass later turns into plain spaces
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	let bytes = fs::read(&filename)?;
	let text = String::from_utf8_lossy(&bytes).into_owned();
	debug!("read {} bytes of corpus from {}", bytes.len(), filename.as_ref().display());
	Ok(text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MarkovError;

	#[test]
	fn missing_file_is_io_error() {
		let err = read_corpus("/definitely/not/here.txt").unwrap_err();
		assert!(matches!(err, MarkovError::Io(_)));
	}

	#[test]
	fn invalid_utf8_is_replaced() {
		let path = std::env::temp_dir().join(format!("wordchain-io-{}.txt", std::process::id()));
		fs::write(&path, b"Hello \xefworld.").unwrap();
		let text = read_corpus(&path).unwrap();
		fs::remove_file(&path).unwrap();
		assert_eq!(text, "Hello \u{FFFD}world.");
	}
}
