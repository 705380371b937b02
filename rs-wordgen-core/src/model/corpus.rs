use std::path::Path;

use crate::error::GenError;
use crate::io::{corpus_name, read_lines, tokenize};

/// An ordered, in-memory stream of word tokens.
///
/// A corpus is read once and kept in memory so the generator can walk it
/// again when it needs a fresh seed, instead of re-reading the source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Corpus {
	name: String,
	tokens: Vec<String>,
}

impl Corpus {
	/// Creates an empty, named corpus.
	pub fn new(name: &str) -> Self {
		Self { name: name.to_owned(), tokens: Vec::new() }
	}

	/// Wraps tokens that are already normalized.
	pub fn from_tokens(name: &str, tokens: Vec<String>) -> Self {
		Self { name: name.to_owned(), tokens }
	}

	/// Tokenizes every line, in order.
	pub fn from_lines<I, S>(name: &str, lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut corpus = Self::new(name);
		for line in lines {
			corpus.add_line(line.as_ref());
		}
		corpus
	}

	/// Reads and tokenizes a text file. The corpus is named after the file stem.
	///
	/// # Errors
	/// Returns `GenError::Io` if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenError> {
		let name = corpus_name(&path)?;
		let lines = read_lines(&path)?;
		Ok(Self::from_lines(&name, lines))
	}

	/// Appends the tokens of one line of raw text.
	pub fn add_line(&mut self, line: &str) {
		self.tokens.extend(tokenize(line));
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn lines_are_tokenized_in_order() {
		let corpus = Corpus::from_lines("dream", ["I have a dream", "that one day..."]);
		assert_eq!(corpus.name(), "dream");
		assert_eq!(corpus.tokens(), ["i", "have", "a", "dream", "that", "one", "day"]);
		assert_eq!(corpus.len(), 7);
	}

	#[test]
	fn reads_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("speech.txt");
		let mut file = std::fs::File::create(&path).unwrap();
		writeln!(file, "Let freedom ring!").unwrap();
		writeln!(file, "Let Freedom ring.").unwrap();

		let corpus = Corpus::from_file(&path).unwrap();
		assert_eq!(corpus.name(), "speech");
		assert_eq!(corpus.tokens(), ["let", "freedom", "ring", "let", "freedom", "ring"]);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = Corpus::from_file(dir.path().join("missing.txt"));
		assert!(matches!(result, Err(GenError::Io(_))));
	}
}
