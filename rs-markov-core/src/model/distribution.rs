use std::collections::HashMap;
use std::fmt;

use rand::Rng;

/// One observed successor and how many times it was seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Successor {
	/// Casing of the first occurrence.
	pub symbol: String,
	pub count: usize,
}

/// Empirical distribution of the symbols following one context.
///
/// Conceptually, the outgoing edges of a Markov state weighted by their
/// number of observations.
///
/// ## Invariants
/// - One entry per distinct symbol, compared case-insensitively
/// - Entries keep first-observed order and first-observed casing
/// - Each count is strictly positive
#[derive(Clone, Debug, Default)]
pub struct SuccessorDistribution {
	entries: Vec<Successor>,
	/// Lowercased symbol -> position in `entries`.
	index: HashMap<String, usize>,
}

impl SuccessorDistribution {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `symbol`.
	///
	/// - If a case-insensitive match exists, its count is increased and its
	///   stored casing is kept.
	/// - Otherwise a new entry is appended with a count of 1.
	pub fn add(&mut self, symbol: &str) {
		self.add_many(symbol, 1);
	}

	fn add_many(&mut self, symbol: &str, count: usize) {
		let normalized = symbol.to_lowercase();
		match self.index.get(&normalized) {
			Some(&position) => self.entries[position].count += count,
			None => {
				self.index.insert(normalized, self.entries.len());
				self.entries.push(Successor { symbol: symbol.to_owned(), count });
			}
		}
	}

	/// Returns how many times `symbol` (any casing) was observed.
	pub fn count_of(&self, symbol: &str) -> usize {
		self.index
			.get(&symbol.to_lowercase())
			.map_or(0, |&position| self.entries[position].count)
	}

	/// Total number of observations.
	pub fn total(&self) -> usize {
		self.entries.iter().map(|entry| entry.count).sum()
	}

	/// Number of distinct successors.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over entries in first-observed order.
	pub fn iter(&self) -> impl Iterator<Item = &Successor> {
		self.entries.iter()
	}

	/// Expands the distribution so each symbol appears once per observation.
	pub fn flatten(&self) -> Vec<&str> {
		self.entries
			.iter()
			.flat_map(|entry| std::iter::repeat_n(entry.symbol.as_str(), entry.count))
			.collect()
	}

	/// Draws a successor with probability proportional to its count.
	///
	/// Picks a uniform position in the flattened population and walks the
	/// entries with a cumulative subtraction instead of materializing it, so
	/// the result is exactly `flatten()[r]` for the drawn `r`.
	///
	/// Returns `None` if the distribution is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}
		self.at(rng.random_range(0..total))
	}

	/// Symbol found at position `r` of the flattened population.
	fn at(&self, mut r: usize) -> Option<&str> {
		for entry in &self.entries {
			if r < entry.count {
				return Some(entry.symbol.as_str());
			}
			r -= entry.count;
		}
		None
	}

	/// Adds every observation of `other` to this distribution.
	///
	/// Existing entries keep their casing, new ones are appended in the
	/// order they appear in `other`.
	pub fn merge(&mut self, other: &Self) {
		for entry in &other.entries {
			self.add_many(&entry.symbol, entry.count);
		}
	}
}

impl fmt::Display for SuccessorDistribution {
	/// Renders entries as `symbol(count)`, space separated.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{}({})", entry.symbol, entry.count)?;
		}
		Ok(())
	}
}
