use serde::{Deserialize, Serialize};

/// Marker substituted for line breaks in word mode before padding.
///
/// Line breaks split tokens like any whitespace, but they do not count as
/// the space that bounds a "word" when the head of the corpus is copied to
/// its tail.
const LINE_BREAK: char = '\u{0}';

const SPACE: char = ' ';

/// Granularity of the symbols a model works on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenMode {
	/// Whitespace separated words.
	#[default]
	Word,
	/// Single characters, whitespace included.
	Character,
}

impl TokenMode {
	/// Separator placed between symbols when they are rendered back as text.
	pub fn separator(&self) -> &'static str {
		match self {
			TokenMode::Word => " ",
			TokenMode::Character => "",
		}
	}
}

/// Splits a corpus into symbols and closes it cyclically.
///
/// The head of the corpus (`degree` words or characters) is appended to its
/// tail, so the last contexts of the text get successors taken from its
/// beginning. Every window of `degree + 1` symbols over the output is then
/// a valid (context, successor) observation.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer {
	mode: TokenMode,
	degree: usize,
}

impl Tokenizer {
	pub fn new(mode: TokenMode, degree: usize) -> Self {
		Self { mode, degree }
	}

	/// Returns the padded corpus, still as raw text.
	///
	/// - Word mode: trims the text, turns line breaks into token separators
	///   and appends the first `degree` space-delimited segments.
	/// - Character mode: appends the first `degree` characters verbatim.
	pub fn pad(&self, content: &str) -> String {
		match self.mode {
			TokenMode::Word => {
				let content: String = content
					.trim()
					.chars()
					.map(|c| if c == '\n' { LINE_BREAK } else { c })
					.collect();
				// Literal segments up to the next space, not collapsed tokens
				let head = content.split(SPACE).take(self.degree).collect::<Vec<_>>().join(" ");
				format!("{content}{SPACE}{head}")
			}
			TokenMode::Character => {
				let head: String = content.chars().take(self.degree).collect();
				format!("{content}{head}")
			}
		}
	}

	/// Splits already padded text into symbols.
	pub fn tokenize(&self, padded: &str) -> Vec<String> {
		match self.mode {
			TokenMode::Word => padded
				.split(|c: char| c.is_whitespace() || c == LINE_BREAK)
				.filter(|word| !word.is_empty())
				.map(str::to_owned)
				.collect(),
			TokenMode::Character => padded.chars().map(String::from).collect(),
		}
	}

	/// Pads then tokenizes a raw corpus.
	pub fn symbols(&self, content: &str) -> Vec<String> {
		self.tokenize(&self.pad(content))
	}
}
