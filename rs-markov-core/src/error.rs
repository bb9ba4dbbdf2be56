use std::path::PathBuf;

use crate::model::tokenizer::TokenMode;

/// Errors raised while configuring, training or sampling a Markov model.
///
/// Every variant is a local, recoverable condition: a failed call never
/// leaves a partially updated model behind.
#[derive(Debug, thiserror::Error)]
pub enum MarkovError {
	/// The training corpus could not be read from disk.
	#[error("cannot read corpus {}: {source}", .path.display())]
	CorpusRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// Construction parameters or configuration document are invalid.
	#[error("invalid configuration: {0}")]
	InvalidConfiguration(String),

	/// The padded corpus does not hold a single `degree + 1` window.
	#[error("corpus too short: {tokens} symbols after padding, at least {required} required")]
	CorpusTooShort { tokens: usize, required: usize },

	/// Generation was requested on a model with no context.
	#[error("model is empty, train it before generating")]
	EmptyModel,

	/// The random walk reached a context that was never trained.
	#[error("context {context:?} was never observed during training")]
	UnseenContext { context: Vec<String> },

	/// Fewer symbols were requested than the seed context holds.
	#[error("cannot generate {count} symbols with a degree {degree} model")]
	CountBelowDegree { count: usize, degree: usize },

	#[error("degree mismatch: {left} vs {right}")]
	DegreeMismatch { left: usize, right: usize },

	#[error("mode mismatch: {left:?} vs {right:?}")]
	ModeMismatch { left: TokenMode, right: TokenMode },
}

pub type Result<T> = std::result::Result<T, MarkovError>;
