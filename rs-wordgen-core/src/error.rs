use std::io;

/// Errors raised while training on or generating from a Markov table.
///
/// Dead ends (a context pair without any recorded successor) are not errors:
/// lookups report them as `Ok(None)` and the generation loop reseeds.
/// None of these errors leaves a table in an invalid state.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
	/// A probability outside `[0, 1]`, or an invalid generation setting.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// Fewer than two tokens are available to seed generation.
	#[error("insufficient data: need at least 2 tokens to seed, got {0}")]
	InsufficientData(usize),

	/// The stream was restarted too many times without emitting a single word.
	#[error("exhausted model: {restarts} restarts without finding a successor")]
	ExhaustedModel { restarts: usize },

	/// A corpus file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
}
