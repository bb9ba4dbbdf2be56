use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{MarkovError, Result};

/// Reads a whole corpus file into memory.
///
/// A missing or unreadable file is reported as `CorpusRead`, never as an
/// empty corpus.
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| MarkovError::CorpusRead { path: path.to_path_buf(), source })?;
	Ok(contents)
}
