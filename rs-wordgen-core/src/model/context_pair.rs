use std::fmt;

use super::Word;

/// Ordered pair of consecutive words used as a Markov table key.
///
/// Equality and hashing are derived from both fields, in order, so
/// `<a,b>` and `<b,a>` are distinct keys unless `a == b`.
/// A pair is never mutated once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextPair {
	first: Word,
	second: Word,
}

impl ContextPair {
	pub fn new(first: Word, second: Word) -> Self {
		Self { first, second }
	}

	pub fn first(&self) -> &Word {
		&self.first
	}

	pub fn second(&self) -> &Word {
		&self.second
	}
}

impl fmt::Display for ContextPair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{},{}>", self.first, self.second)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn pair(first: &str, second: &str) -> ContextPair {
		ContextPair::new(Word::from(first), Word::from(second))
	}

	#[test]
	fn equality_is_structural_and_ordered() {
		assert_eq!(pair("hello", "world"), pair("hello", "world"));
		assert_ne!(pair("hello", "world"), pair("goodbye", "world"));
		assert_ne!(pair("hello", "world"), pair("world", "hello"));
		assert_eq!(pair("echo", "echo"), pair("echo", "echo"));
	}

	#[test]
	fn usable_as_map_key() {
		let mut map = HashMap::new();
		map.insert(pair("hello", "world"), "test1");
		assert_eq!(map.get(&pair("hello", "world")), Some(&"test1"));
		assert_eq!(map.get(&pair("goodbye", "world")), None);
		assert_eq!(map.get(&pair("world", "hello")), None);
	}

	#[test]
	fn display_format() {
		assert_eq!(pair("i", "have").to_string(), "<i,have>");
	}
}
