use std::path::Path;

use log::{debug, info, warn};
use serde::Serialize;

use super::Word;
use super::corpus::Corpus;
use super::generation_input::{GenerationInput, StartSeed};
use super::markov_table::MarkovTable;
use super::uniform::UniformSource;
use crate::error::GenError;
use crate::io;

/// Upper bound on the output buffer reserved up front; longer outputs grow it.
const MAX_PREALLOCATED_WORDS: usize = 4096;

/// Size statistics of a trained generator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ModelSummary {
	pub corpora: Vec<String>,
	pub tokens: usize,
	pub contexts: usize,
	pub observations: usize,
	pub vocabulary: usize,
}

/// High-level generator: a Markov table plus the token streams it learned.
///
/// # Responsibilities
/// - Train the table on one or more corpora (one sliding window per corpus,
///   so no triple spans two corpora)
/// - Keep the token streams to reseed generation after a dead end
/// - Generate exactly the requested number of words
#[derive(Clone, Debug, Default)]
pub struct TextGenerator {
	table: MarkovTable,
	corpora: Vec<Corpus>,
}

impl TextGenerator {
	/// Creates a generator with an empty table and no corpus.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a generator trained on a single corpus.
	pub fn from_corpus(corpus: Corpus) -> Self {
		let mut generator = Self::new();
		generator.learn_corpus(corpus);
		generator
	}

	/// Creates a generator trained on every `.txt` corpus of a directory.
	///
	/// # Parameters
	/// - `filepath`: Path to a directory containing text files.
	///   Both `"folder"` and `"folder/"` are accepted.
	///
	/// # Errors
	/// - Returns an error if the path is not a directory.
	/// - Returns an error if a corpus fails to load.
	pub fn from_folder<P: AsRef<Path>>(filepath: P) -> Result<Self, GenError> {
		let string_path = filepath
			.as_ref()
			.to_str()
			.ok_or_else(|| GenError::InvalidArgument("Invalid filepath".to_owned()))?;
		let folder = io::resolve_folder(string_path);

		if !folder.is_dir() {
			return Err(GenError::InvalidArgument(format!(
				"Expected a directory, got: {}",
				folder.display()
			)));
		}

		let mut generator = Self::new();
		for file in io::list_files(&folder, "txt")? {
			generator.load_corpus(folder.join(&file))?;
		}
		Ok(generator)
	}

	/// Reads a corpus file and learns it.
	///
	/// # Errors
	/// Returns an error if a corpus with the same name is already loaded or
	/// if the file cannot be read.
	pub fn load_corpus<P: AsRef<Path>>(&mut self, filepath: P) -> Result<(), GenError> {
		let name = io::corpus_name(&filepath)?;
		if self.corpora.iter().any(|corpus| corpus.name() == name) {
			return Err(GenError::InvalidArgument(format!("Corpus {} already loaded", name)));
		}
		let corpus = Corpus::from_file(&filepath)?;
		self.learn_corpus(corpus);
		Ok(())
	}

	/// Learns every triple of `corpus` and keeps its tokens for reseeding.
	///
	/// Returns the number of triples learned.
	pub fn learn_corpus(&mut self, corpus: Corpus) -> usize {
		let triples = self.table.train(corpus.tokens());
		info!(
			"learned corpus '{}': {} tokens, {} triples",
			corpus.name(),
			corpus.len(),
			triples
		);
		self.corpora.push(corpus);
		triples
	}

	/// Names of the learned corpora, in learning order.
	pub fn corpus_names(&self) -> Vec<String> {
		self.corpora.iter().map(|corpus| corpus.name().to_owned()).collect()
	}

	pub fn table(&self) -> &MarkovTable {
		&self.table
	}

	pub fn summary(&self) -> ModelSummary {
		ModelSummary {
			corpora: self.corpus_names(),
			tokens: self.corpora.iter().map(Corpus::len).sum(),
			contexts: self.table.len(),
			observations: self.table.observations(),
			vocabulary: self.table.vocabulary(),
		}
	}

	/// Creates a `GenerationInput` with default settings.
	pub fn make_generation_input(&self, word_count: usize) -> GenerationInput {
		GenerationInput::new(word_count)
	}

	/// Generates exactly `input.word_count` words.
	///
	/// # Behavior
	/// - Seeds the context pair according to `input.start_seed`.
	/// - Draws each successor with a fresh value from `source`, then shifts
	///   the context by one word.
	/// - On a dead end, reseeds with the next two tokens of the stream, or
	///   restarts the stream from its beginning when fewer than two remain.
	///
	/// # Errors
	/// - `InsufficientData` if no corpus holds at least 2 tokens.
	/// - `ExhaustedModel` if the stream restarts more than
	///   `input.restart_limit()` times in a row without emitting a word.
	pub fn generate<S: UniformSource + ?Sized>(
		&self,
		input: &GenerationInput,
		source: &mut S,
	) -> Result<Vec<Word>, GenError> {
		let longest = self.corpora.iter().map(Corpus::len).max().unwrap_or(0);
		if longest < 2 {
			return Err(GenError::InsufficientData(longest));
		}

		let (mut first, mut second, mut cursor) = self.seed(&input.start_seed, &mut *source);

		let mut words: Vec<Word> = Vec::with_capacity(input.word_count.min(MAX_PREALLOCATED_WORDS));
		let mut restarts = 0;
		let mut reseeds = 0;
		while words.len() < input.word_count {
			match self.table.next_word(&first, &second, &mut *source)? {
				Some(word) => {
					words.push(word.clone());
					first = std::mem::replace(&mut second, word.clone());
					restarts = 0;
				}
				None => {
					let (next_first, next_second, restarted) = cursor.next_pair();
					reseeds += 1;
					if restarted {
						restarts += 1;
						if restarts > input.restart_limit() {
							warn!("no successor found after {} restarts of the token stream", restarts);
							return Err(GenError::ExhaustedModel { restarts });
						}
					}
					debug!(
						"dead end at <{},{}>, reseeding with <{},{}> (restarted: {})",
						first, second, next_first, next_second, restarted
					);
					first = Word::from(next_first);
					second = Word::from(next_second);
				}
			}
		}

		info!("generated {} words ({} reseeds)", words.len(), reseeds);
		Ok(words)
	}

	/// Generates words and renders them, `input.line_width()` words per line.
	pub fn generate_text<S: UniformSource + ?Sized>(
		&self,
		input: &GenerationInput,
		source: &mut S,
	) -> Result<String, GenError> {
		let words = self.generate(input, source)?;
		Ok(io::wrap_words(&words, input.line_width()))
	}

	/// Picks the first context pair and positions the reseed cursor after it.
	///
	/// Requires at least one corpus with 2 tokens or more.
	fn seed<S: UniformSource + ?Sized>(
		&self,
		start_seed: &StartSeed,
		source: &mut S,
	) -> (Word, Word, SeedCursor<'_>) {
		match start_seed {
			StartSeed::Corpus => {
				let mut cursor = SeedCursor::new(&self.corpora, 0, 0);
				let (first, second, _) = cursor.next_pair();
				(Word::from(first), Word::from(second), cursor)
			}
			StartSeed::Random => {
				let pairs: usize = self.corpora.iter().map(|corpus| corpus.len().saturating_sub(1)).sum();
				let mut pick = ((source.next_unit() * pairs as f64) as usize).min(pairs - 1);
				for (segment, corpus) in self.corpora.iter().enumerate() {
					let available = corpus.len().saturating_sub(1);
					if pick < available {
						let tokens = corpus.tokens();
						let cursor = SeedCursor::new(&self.corpora, segment, pick + 2);
						return (Word::from(tokens[pick].as_str()), Word::from(tokens[pick + 1].as_str()), cursor);
					}
					pick -= available;
				}
				// Unreachable while `pairs` matches the corpora
				self.seed(&StartSeed::Corpus, source)
			}
			StartSeed::Custom(first, second) => (
				Word::from(first.to_lowercase()),
				Word::from(second.to_lowercase()),
				SeedCursor::new(&self.corpora, 0, 0),
			),
		}
	}
}

/// Walks the learned token streams two tokens at a time.
///
/// Pairs never span two corpora. Once every stream is consumed, the walk
/// restarts from the first one. At least one corpus must hold 2 tokens or
/// `next_pair` never returns.
struct SeedCursor<'a> {
	corpora: &'a [Corpus],
	segment: usize,
	offset: usize,
}

impl<'a> SeedCursor<'a> {
	fn new(corpora: &'a [Corpus], segment: usize, offset: usize) -> Self {
		Self { corpora, segment, offset }
	}

	/// Returns the next pair and whether the walk had to restart to find it.
	fn next_pair(&mut self) -> (&'a str, &'a str, bool) {
		let corpora = self.corpora;
		let mut restarted = false;
		loop {
			if self.segment >= corpora.len() {
				self.segment = 0;
				self.offset = 0;
				restarted = true;
			}
			let tokens = corpora[self.segment].tokens();
			if self.offset + 1 < tokens.len() {
				let pair = (tokens[self.offset].as_str(), tokens[self.offset + 1].as_str());
				self.offset += 2;
				return (pair.0, pair.1, restarted);
			}
			self.segment += 1;
			self.offset = 0;
		}
	}
}
