use crate::error::GenError;

/// Strategy used to select the first context pair of a generation.
///
/// # Variants
/// - `Corpus`: the first two tokens of the token stream.
/// - `Random`: a random pair of adjacent tokens of the stream, picked with
///   the same uniform source as the generation itself.
/// - `Custom(first, second)`: a caller-supplied pair. Words are lowercased
///   before use. An unknown pair simply hits a dead end and reseeds.
#[derive(Clone, Debug, PartialEq)]
pub enum StartSeed {
	Corpus,
	Random,
	Custom(String, String),
}

/// Parameters of a single generation pass.
///
/// Generation has no natural end: the model has no end-of-text marker, so
/// the caller always bounds the output with `word_count`.
///
/// # Invariants
/// - `restart_limit >= 1`
/// - `line_width >= 1`
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationInput {
	/// Exact number of words to emit.
	pub word_count: usize,

	/// How the first context pair is chosen.
	pub start_seed: StartSeed,

	/// Stream restarts allowed without emitting a word before giving up.
	restart_limit: usize,

	/// Words per line when the output is rendered as text.
	line_width: usize,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self::new(400)
	}
}

impl GenerationInput {
	/// Default number of words per rendered line.
	pub const DEFAULT_LINE_WIDTH: usize = 20;

	/// One full pass over the stream without a successor already proves the
	/// model has none to offer.
	pub const DEFAULT_RESTART_LIMIT: usize = 1;

	/// Creates an input emitting `word_count` words, seeded from the corpus start.
	pub fn new(word_count: usize) -> Self {
		Self {
			word_count,
			start_seed: StartSeed::Corpus,
			restart_limit: Self::DEFAULT_RESTART_LIMIT,
			line_width: Self::DEFAULT_LINE_WIDTH,
		}
	}

	pub fn restart_limit(&self) -> usize {
		self.restart_limit
	}

	pub fn line_width(&self) -> usize {
		self.line_width
	}

	/// Sets the number of stream restarts tolerated between two emitted words.
	///
	/// # Errors
	/// Returns an error if `restart_limit` is 0.
	pub fn set_restart_limit(&mut self, restart_limit: usize) -> Result<(), GenError> {
		if restart_limit == 0 {
			return Err(GenError::InvalidArgument("restart limit must be at least 1".to_owned()));
		}
		self.restart_limit = restart_limit;
		Ok(())
	}

	/// Sets the number of words per rendered line.
	///
	/// # Errors
	/// Returns an error if `line_width` is 0.
	pub fn set_line_width(&mut self, line_width: usize) -> Result<(), GenError> {
		if line_width == 0 {
			return Err(GenError::InvalidArgument("line width must be at least 1".to_owned()));
		}
		self.line_width = line_width;
		Ok(())
	}
}
