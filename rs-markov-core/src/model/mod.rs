//! Top-level module for the Markov text generator.
//!
//! Data flows one way: raw text -> `Tokenizer` -> symbols -> `MarkovModel`
//! (context -> `SuccessorDistribution` table) -> generated text.

/// Fixed-order Markov model over words or characters.
///
/// Handles training, exact-length generation, merging and the debug dump.
pub mod markov_model;

/// Distribution of the symbols observed after one context.
///
/// Case-insensitive counting, case-preserving storage and weighted sampling.
pub mod distribution;

/// Typed, case-normalized context key.
pub mod context;

/// Token modes, symbol splitting and cyclic corpus padding.
pub mod tokenizer;

pub use context::ContextKey;
pub use distribution::{Successor, SuccessorDistribution};
pub use markov_model::MarkovModel;
pub use tokenizer::{TokenMode, Tokenizer};
