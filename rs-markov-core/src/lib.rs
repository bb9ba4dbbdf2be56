//! Markov chain text generation library.
//!
//! This crate provides a fixed-order Markov text generator including:
//! - Word-level and character-level tokenization with cyclic padding
//! - Additive training from in-memory text or corpus files
//! - Exact-length generation with frequency-weighted sampling
//! - An injectable random source for reproducible output
//!
//! File handling is kept internal: the public surface is the model,
//! its configuration and its error type.

/// Markov model, successor distributions, context keys and tokenizer.
pub mod model;

/// Model construction parameters.
pub mod config;

/// Error type shared by every operation.
pub mod error;

/// I/O utilities (corpus loading).
///
/// Not exposed
pub(crate) mod io;

pub use config::ModelConfig;
pub use error::{MarkovError, Result};
pub use model::{ContextKey, MarkovModel, Successor, SuccessorDistribution, TokenMode};
