use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::path::Path;

use log::{debug, info, trace, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::context::ContextKey;
use super::distribution::SuccessorDistribution;
use super::tokenizer::{TokenMode, Tokenizer};
use crate::config::ModelConfig;
use crate::error::{MarkovError, Result};
use crate::io::read_corpus;

/// Fixed-order Markov chain over words or characters.
///
/// The model maps every context of `degree` symbols seen in the training
/// text to the distribution of the symbols that followed it, and generates
/// new text by walking that mapping with weighted random draws.
///
/// # Responsibilities
/// - Build the table from one or more corpora (training is additive)
/// - Generate text of an exact length from a random starting context
/// - Merge with another model of the same degree and mode
///
/// # Invariants
/// - `degree` is always >= 1, `degree` and `mode` never change
/// - Every key of `table` holds exactly `degree` lowercased symbols
/// - `contexts` lists the keys of `table` once each, in insertion order
/// - Every distribution in `table` holds at least one observation
#[derive(Clone, Debug)]
pub struct MarkovModel {
	degree: usize,
	mode: TokenMode,
	table: HashMap<ContextKey, SuccessorDistribution>,
	/// Index space for picking a uniformly random starting context.
	contexts: Vec<ContextKey>,
}

impl MarkovModel {
	/// Creates an empty model.
	///
	/// # Errors
	/// Returns `InvalidConfiguration` if `degree < 1`.
	pub fn new(degree: usize, mode: TokenMode) -> Result<Self> {
		Self::from_config(&ModelConfig { degree, mode })
	}

	/// Creates an empty model from a validated configuration.
	pub fn from_config(config: &ModelConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			degree: config.degree,
			mode: config.mode,
			table: HashMap::new(),
			contexts: Vec::new(),
		})
	}

	pub fn degree(&self) -> usize {
		self.degree
	}

	pub fn mode(&self) -> TokenMode {
		self.mode
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Known contexts, in the order they were first observed.
	pub fn contexts(&self) -> &[ContextKey] {
		&self.contexts
	}

	pub fn distribution(&self, context: &ContextKey) -> Option<&SuccessorDistribution> {
		self.table.get(context)
	}

	/// Trains the model on a corpus.
	///
	/// The corpus is padded cyclically (see `Tokenizer`) and a window of
	/// `degree + 1` symbols slides over it one symbol at a time: the first
	/// `degree` symbols form the context, the last one is its successor.
	/// Counts are added to whatever the model already holds.
	///
	/// # Errors
	/// Returns `CorpusTooShort` if the corpus itself, before padding, holds
	/// fewer than `degree + 1` symbols. The model is left untouched.
	pub fn train(&mut self, text: &str) -> Result<()> {
		let tokenizer = Tokenizer::new(self.mode, self.degree);
		let required = self.degree + 1;
		// Padding can only copy what exists, a shorter corpus cannot wrap around
		let tokens = tokenizer.tokenize(text).len();
		if tokens < required {
			return Err(MarkovError::CorpusTooShort { tokens, required });
		}
		let symbols = tokenizer.symbols(text);

		let known = self.contexts.len();
		for window in symbols.windows(required) {
			let (context, successor) = window.split_at(self.degree);
			self.observe(ContextKey::new(context), &successor[0]);
		}

		debug!(
			"trained on {} symbols: {} new contexts, {} total",
			symbols.len(),
			self.contexts.len() - known,
			self.contexts.len()
		);
		Ok(())
	}

	/// Reads a corpus from disk and trains on it.
	///
	/// # Errors
	/// Returns `CorpusRead` if the file cannot be read, in which case no
	/// training happens. Training errors are those of `train`.
	pub fn train_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
		let content = read_corpus(&path)?;
		info!("read corpus {} ({} bytes)", path.as_ref().display(), content.len());
		self.train(&content)
	}

	/// Records one (context, successor) observation.
	fn observe(&mut self, context: ContextKey, successor: &str) {
		match self.table.entry(context) {
			Entry::Occupied(mut entry) => entry.get_mut().add(successor),
			Entry::Vacant(entry) => {
				self.contexts.push(entry.key().clone());
				entry.insert(SuccessorDistribution::new()).add(successor);
			}
		}
	}

	/// Returns the flattened successor population of a context.
	///
	/// Each successor appears once per observation. Returns `None` if the
	/// context does not hold `degree` symbols or was never observed.
	pub fn flattened<S: AsRef<str>>(&self, context: &[S]) -> Option<Vec<&str>> {
		Some(self.lookup(context)?.flatten())
	}

	/// Draws the next symbol for an explicit context.
	///
	/// The context is matched case-insensitively. Returns `None` if it does
	/// not hold `degree` symbols or was never observed.
	pub fn predict<S, R>(&self, context: &[S], rng: &mut R) -> Option<String>
	where
		S: AsRef<str>,
		R: Rng + ?Sized,
	{
		self.lookup(context)?.sample(rng).map(str::to_owned)
	}

	fn lookup<S: AsRef<str>>(&self, context: &[S]) -> Option<&SuccessorDistribution> {
		if context.len() != self.degree {
			return None;
		}
		self.table.get(&ContextKey::new(context))
	}

	/// Generates `count` symbols using the thread-local random generator.
	///
	/// See `generate_with`.
	pub fn generate(&self, count: usize) -> Result<String> {
		self.generate_with(count, &mut rand::rng())
	}

	/// Generates exactly `count` symbols.
	///
	/// The starting context is drawn uniformly among the distinct contexts,
	/// whatever their number of observations. Its (lowercased) symbols open
	/// the output, then each next symbol is drawn from the distribution of
	/// the last `degree` symbols produced.
	///
	/// Word mode puts a space after every word, the last one included.
	/// Character mode concatenates characters.
	///
	/// # Errors
	/// - `EmptyModel` if the model was never trained
	/// - `CountBelowDegree` if `count < degree`
	/// - `UnseenContext` if the walk reaches a context that was only ever
	///   seen as a successor. The whole call fails, there is no re-seeding.
	pub fn generate_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<String> {
		let start = self.contexts.choose(rng).ok_or(MarkovError::EmptyModel)?;
		if count < self.degree {
			return Err(MarkovError::CountBelowDegree { count, degree: self.degree });
		}

		let mut symbols: Vec<String> = start.clone().into_symbols();
		symbols.reserve(count - self.degree);
		trace!("generating {} symbols from {:?}", count, symbols);

		while symbols.len() < count {
			let context = ContextKey::new(&symbols[symbols.len() - self.degree..]);
			let next = self
				.table
				.get(&context)
				.and_then(|distribution| distribution.sample(rng))
				.ok_or_else(|| {
					warn!("generation reached unseen context {:?}", context.symbols());
					MarkovError::UnseenContext { context: context.symbols().to_vec() }
				})?;
			symbols.push(next.to_owned());
		}

		Ok(match self.mode {
			TokenMode::Word => symbols.iter().map(|word| format!("{word} ")).collect(),
			TokenMode::Character => symbols.concat(),
		})
	}

	/// Merges another model into this one.
	///
	/// Counts of shared contexts are summed, unknown contexts are appended
	/// in the order of `other`. The result is the same as training this
	/// model on every corpus `other` was trained on.
	///
	/// # Errors
	/// Returns an error if degrees or modes do not match.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.degree != other.degree {
			return Err(MarkovError::DegreeMismatch { left: self.degree, right: other.degree });
		}
		if self.mode != other.mode {
			return Err(MarkovError::ModeMismatch { left: self.mode, right: other.mode });
		}

		for context in &other.contexts {
			let Some(distribution) = other.table.get(context) else {
				continue;
			};
			match self.table.entry(context.clone()) {
				Entry::Occupied(mut entry) => entry.get_mut().merge(distribution),
				Entry::Vacant(entry) => {
					self.contexts.push(context.clone());
					entry.insert(distribution.clone());
				}
			}
		}

		Ok(())
	}
}

impl fmt::Display for MarkovModel {
	/// Debug dump, one `context: successor(count) ...` line per context.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for context in &self.contexts {
			if let Some(distribution) = self.table.get(context) {
				writeln!(f, "{}: {}", context.join(self.mode.separator()), distribution)?;
			}
		}
		Ok(())
	}
}
