use std::collections::{HashMap, HashSet};
use std::fmt;

use log::debug;

use super::Word;
use super::context_pair::ContextPair;
use super::frequency_list::FrequencyList;
use super::uniform::UniformSource;
use crate::error::GenError;

/// Second-order Markov table over words.
///
/// The `MarkovTable` maps every ordered pair of consecutive words to the
/// frequency list of words observed right after that pair.
///
/// # Responsibilities
/// - Learn `<first,second> -> third` observations
/// - Draw a weighted successor for a given pair
/// - Intern words so keys and successors share one allocation per word
///
/// # Invariants
/// - Each `ContextPair` key is unique
/// - Every stored frequency list holds at least one observation
/// - Entries are never removed and counts never decrease
#[derive(Clone, Debug, Default)]
pub struct MarkovTable {
	/// Every distinct word seen by `learn`.
	words: HashSet<Word>,

	/// Mapping from a context pair to its successor distribution
	contexts: HashMap<ContextPair, FrequencyList<Word>>,
}

impl MarkovTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	fn intern(&mut self, word: &str) -> Word {
		if let Some(existing) = self.words.get(word) {
			return existing.clone();
		}
		let word = Word::from(word);
		self.words.insert(word.clone());
		word
	}

	/// Builds the key for `<first,second>` without allocating.
	///
	/// Returns `None` when either word was never learned, in which case no
	/// entry can exist for the pair.
	fn key(&self, first: &str, second: &str) -> Option<ContextPair> {
		let first = self.words.get(first)?;
		let second = self.words.get(second)?;
		Some(ContextPair::new(first.clone(), second.clone()))
	}

	/// Records that `third` followed the pair `<first,second>`.
	///
	/// Calling it N times with the same triple leaves `third` with a count of
	/// exactly N for that pair.
	pub fn learn(&mut self, first: &str, second: &str, third: &str) {
		let pair = ContextPair::new(self.intern(first), self.intern(second));
		let third = self.intern(third);
		self.contexts.entry(pair).or_default().add(third);
	}

	/// Learns every consecutive triple of `tokens`.
	///
	/// Returns the number of triples learned (0 for fewer than 3 tokens).
	pub fn train<S: AsRef<str>>(&mut self, tokens: &[S]) -> usize {
		for window in tokens.windows(3) {
			self.learn(window[0].as_ref(), window[1].as_ref(), window[2].as_ref());
		}
		let triples = tokens.len().saturating_sub(2);
		debug!(
			"trained {} triples, table now holds {} contexts over {} words",
			triples,
			self.contexts.len(),
			self.words.len()
		);
		triples
	}

	/// Returns the successor distribution of `<first,second>`, if any.
	pub fn successors(&self, first: &str, second: &str) -> Option<&FrequencyList<Word>> {
		self.contexts.get(&self.key(first, second)?)
	}

	/// Draws a successor of `<first,second>` from a uniform value `p`.
	///
	/// An unknown pair is a dead end and yields `Ok(None)` whatever `p` is.
	///
	/// # Errors
	/// Returns `GenError::InvalidArgument` if the pair is known and `p` is
	/// outside `[0, 1]`.
	pub fn sample(&self, first: &str, second: &str, p: f64) -> Result<Option<&Word>, GenError> {
		match self.successors(first, second) {
			Some(list) => list.sample(p),
			None => Ok(None),
		}
	}

	/// Draws a successor of `<first,second>` using a fresh value from `source`.
	///
	/// The source is only consumed when the pair is known.
	pub fn next_word<S: UniformSource + ?Sized>(
		&self,
		first: &str,
		second: &str,
		source: &mut S,
	) -> Result<Option<&Word>, GenError> {
		match self.successors(first, second) {
			Some(list) => list.sample(source.next_unit()),
			None => Ok(None),
		}
	}

	/// Number of context pairs.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Number of distinct words seen.
	pub fn vocabulary(&self) -> usize {
		self.words.len()
	}

	/// Number of learned triples.
	pub fn observations(&self) -> usize {
		self.contexts.values().map(FrequencyList::total).sum()
	}

	/// Iterates over every pair with its successors (unordered).
	pub fn iter(&self) -> impl Iterator<Item = (&ContextPair, &FrequencyList<Word>)> {
		self.contexts.iter()
	}
}

impl fmt::Display for MarkovTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Frequency Map:")?;
		for (pair, list) in &self.contexts {
			write!(f, "\n{}={}", pair, list)?;
		}
		Ok(())
	}
}
