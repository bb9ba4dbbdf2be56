/// Identifier of a Markov state: the `degree` symbols preceding a successor.
///
/// Symbols are stored lowercased, so two contexts that only differ by case
/// are the same state. Equality and hashing are structural, there is no
/// delimiter that could collide with corpus content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContextKey(Vec<String>);

impl ContextKey {
	/// Builds a key from a window of symbols, normalizing their case.
	pub fn new<S: AsRef<str>>(symbols: &[S]) -> Self {
		Self(symbols.iter().map(|s| s.as_ref().to_lowercase()).collect())
	}

	/// Returns the normalized symbols, oldest first.
	pub fn symbols(&self) -> &[String] {
		&self.0
	}

	/// Joins the symbols with `separator` (see `TokenMode::separator`).
	pub fn join(&self, separator: &str) -> String {
		self.0.join(separator)
	}

	pub(crate) fn into_symbols(self) -> Vec<String> {
		self.0
	}
}
