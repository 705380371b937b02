use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::GenError;

/// Weighted frequency list of observed items.
///
/// A `FrequencyList` counts how many times each item was added and draws
/// items with a probability proportional to their count. It is the successor
/// distribution stored behind every context pair of a Markov table.
///
/// ## Responsibilities:
/// - Accumulate occurrences during learning
/// - Select an item from a caller-supplied uniform value in `[0, 1]`
///
/// ## Invariants
/// - Every tracked item has a count of at least 1
/// - `total` is the sum of all counts (the number of `add` calls)
/// - Items are enumerated in first-insertion order, which never changes for
///   the lifetime of the list
#[derive(Clone, Debug)]
pub struct FrequencyList<T> {
	/// Position of each item inside `entries`.
	index: HashMap<T, usize>,
	/// Items with their occurrence count, in first-insertion order.
	/// Example: [("dream", 4), ("hope", 1)]
	entries: Vec<(T, usize)>,
	/// Number of observations across all items.
	total: usize,
}

impl<T> Default for FrequencyList<T> {
	fn default() -> Self {
		Self {
			index: HashMap::new(),
			entries: Vec::new(),
			total: 0,
		}
	}
}

impl<T: Eq + Hash + Clone> FrequencyList<T> {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `item`.
	///
	/// - If the item is already tracked, its count is increased.
	/// - Otherwise, it is appended with an initial count of 1.
	pub fn add(&mut self, item: T) {
		match self.index.get(&item) {
			Some(&slot) => self.entries[slot].1 += 1,
			None => {
				self.index.insert(item.clone(), self.entries.len());
				self.entries.push((item, 1));
			}
		}
		self.total += 1;
	}

	/// Returns how many times `item` was added (0 when never seen).
	pub fn count<Q>(&self, item: &Q) -> usize
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.index.get(item).map_or(0, |&slot| self.entries[slot].1)
	}

	/// Selects an item weighted by its count.
	///
	/// The counts are viewed as a virtual sequence of `total` slots where each
	/// item occupies `count` consecutive slots, in enumeration order. The slot
	/// picked is `floor(p * total)`, clamped to the last slot so that `p == 1.0`
	/// stays in range. The cumulative walk is an O(n) scan over the items.
	///
	/// Returns `Ok(None)` when the list is empty: there is no data to draw
	/// from, which is not an error.
	///
	/// # Errors
	/// Returns `GenError::InvalidArgument` if `p` is outside `[0, 1]` or NaN.
	pub fn sample(&self, p: f64) -> Result<Option<&T>, GenError> {
		if !(0.0..=1.0).contains(&p) {
			return Err(GenError::InvalidArgument(format!(
				"probability must be between 0.0 and 1.0, got {}",
				p
			)));
		}
		if self.total == 0 {
			return Ok(None);
		}

		let mut slot = ((p * self.total as f64) as usize).min(self.total - 1);
		for (item, occurrence) in &self.entries {
			if slot < *occurrence {
				return Ok(Some(item));
			}
			slot -= occurrence;
		}

		// Unreachable while `total` matches the entries
		Ok(self.entries.last().map(|(item, _)| item))
	}
}

impl<T> FrequencyList<T> {
	/// Number of distinct items.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of observations (sum of all counts).
	pub fn total(&self) -> usize {
		self.total
	}

	/// Iterates over `(item, count)` in enumeration order.
	pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
		self.entries.iter().map(|(item, occurrence)| (item, *occurrence))
	}
}

impl<T: fmt::Display> fmt::Display for FrequencyList<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Frequency List: ")?;
		for (item, occurrence) in &self.entries {
			write!(f, "<{}={}>", item, occurrence)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	fn fruits() -> FrequencyList<String> {
		let mut list = FrequencyList::new();
		for word in ["apple", "banana", "apple", "carrot", "apple", "banana", "date", "egg", "fig", "grape"] {
			list.add(word.to_owned());
		}
		list
	}

	#[test]
	fn add_counts_occurrences() {
		let list = fruits();
		assert_eq!(list.count("apple"), 3);
		assert_eq!(list.count("banana"), 2);
		assert_eq!(list.count("grape"), 1);
		assert_eq!(list.count("kiwi"), 0);
		assert_eq!(list.len(), 7);
		assert_eq!(list.total(), 10);
	}

	#[test]
	fn empty_list_samples_nothing() {
		let list: FrequencyList<String> = FrequencyList::new();
		assert_eq!(list.sample(0.0).unwrap(), None);
		assert_eq!(list.sample(0.5).unwrap(), None);
		assert_eq!(list.sample(1.0).unwrap(), None);
	}

	#[test]
	fn rejects_out_of_range_probability() {
		let list = fruits();
		for p in [-0.1, 1.000_001, f64::NAN, f64::INFINITY] {
			assert!(matches!(list.sample(p), Err(GenError::InvalidArgument(_))));
		}
		// Checked even without data
		let empty: FrequencyList<String> = FrequencyList::new();
		assert!(matches!(empty.sample(2.0), Err(GenError::InvalidArgument(_))));
	}

	#[test]
	fn single_item_is_always_selected() {
		let mut list = FrequencyList::new();
		for _ in 0..4 {
			list.add("dream");
		}
		for i in 0..=100 {
			let p = i as f64 / 100.0;
			assert_eq!(list.sample(p).unwrap(), Some(&"dream"));
		}
	}

	#[test]
	fn slots_follow_insertion_order() {
		// Virtual sequence: apple apple apple banana banana carrot date egg fig grape
		let list = fruits();
		assert_eq!(list.sample(0.0).unwrap().map(String::as_str), Some("apple"));
		assert_eq!(list.sample(0.25).unwrap().map(String::as_str), Some("apple"));
		assert_eq!(list.sample(0.35).unwrap().map(String::as_str), Some("banana"));
		assert_eq!(list.sample(0.5).unwrap().map(String::as_str), Some("carrot"));
		assert_eq!(list.sample(0.95).unwrap().map(String::as_str), Some("grape"));
	}

	#[test]
	fn upper_bound_is_clamped_to_last_slot() {
		let list = fruits();
		let at_one = list.sample(1.0).unwrap();
		assert_eq!(at_one.map(String::as_str), Some("grape"));
		assert_eq!(at_one, list.sample(1.0 - 1e-9).unwrap());

		let mut even = FrequencyList::new();
		even.add('a');
		even.add('b');
		assert_eq!(even.sample(1.0).unwrap(), even.sample(1.0 - 1e-12).unwrap());
	}

	#[test]
	fn never_returns_unrecorded_items() {
		let list = fruits();
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..1_000 {
			let item = list.sample(rng.random()).unwrap().unwrap();
			assert!(list.count(item.as_str()) > 0);
		}
	}

	#[test]
	fn frequencies_converge_to_counts() {
		let mut list = FrequencyList::new();
		for _ in 0..7 {
			list.add("seven");
		}
		for _ in 0..3 {
			list.add("three");
		}

		let mut rng = StdRng::seed_from_u64(42);
		let draws = 10_000;
		let mut threes = 0;
		for _ in 0..draws {
			if list.sample(rng.random()).unwrap() == Some(&"three") {
				threes += 1;
			}
		}
		let ratio = threes as f64 / draws as f64;
		assert!((ratio - 0.3).abs() < 0.02, "ratio was {}", ratio);
	}

	#[test]
	fn display_lists_counts() {
		let mut list = FrequencyList::new();
		list.add("a");
		list.add("b");
		list.add("a");
		assert_eq!(list.to_string(), "Frequency List: <a=2><b=1>");
	}
}
