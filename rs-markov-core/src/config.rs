use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};
use crate::model::tokenizer::TokenMode;

/// Construction parameters of a `MarkovModel`.
///
/// Deserializable so callers can keep them next to their corpus, e.g.
/// `{"degree": 3, "mode": "character"}`. Missing fields take defaults.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
	/// Number of preceding symbols forming a context (>= 1).
	pub degree: usize,
	pub mode: TokenMode,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self { degree: 2, mode: TokenMode::Word }
	}
}

impl ModelConfig {
	/// Parses a JSON document, then validates it.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)
			.map_err(|e| MarkovError::InvalidConfiguration(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// # Errors
	/// Returns `InvalidConfiguration` if `degree < 1`.
	pub fn validate(&self) -> Result<()> {
		if self.degree < 1 {
			return Err(MarkovError::InvalidConfiguration("degree must be >= 1".to_owned()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_json() {
		let config = ModelConfig::from_json(r#"{"degree": 3, "mode": "character"}"#).unwrap();
		assert_eq!(config, ModelConfig { degree: 3, mode: TokenMode::Character });
	}

	#[test]
	fn test_missing_fields_take_defaults() {
		assert_eq!(ModelConfig::from_json("{}").unwrap(), ModelConfig::default());
		assert_eq!(ModelConfig::from_json(r#"{"degree": 4}"#).unwrap().mode, TokenMode::Word);
	}

	#[test]
	fn test_invalid_documents() {
		for json in [r#"{"degree": 0}"#, r#"{"mode": "sentence"}"#, r#"{"degree": -1}"#, "degree"] {
			assert!(
				matches!(ModelConfig::from_json(json), Err(MarkovError::InvalidConfiguration(_))),
				"{json} should be rejected"
			);
		}
	}
}
