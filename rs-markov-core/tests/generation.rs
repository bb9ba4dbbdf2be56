use std::collections::HashMap;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::model::Tokenizer;
use rs_markov_core::{ContextKey, MarkovError, MarkovModel, ModelConfig, TokenMode};

const CORPUS: &str = "It was the best of times, it was the worst of times,\n\
	it was the age of wisdom, it was the age of foolishness,\n\
	it was the epoch of belief, it was the epoch of incredulity.";

fn corpus_file(name: &str, content: &str) -> PathBuf {
	let path = std::env::temp_dir().join(format!("rs-markov-core-{name}.txt"));
	std::fs::write(&path, content).unwrap();
	path
}

#[test]
fn test_counts_match_context_occurrences() {
	for (degree, mode) in [(1, TokenMode::Word), (3, TokenMode::Word), (4, TokenMode::Character)] {
		let mut model = MarkovModel::new(degree, mode).unwrap();
		model.train(CORPUS).unwrap();

		let symbols = Tokenizer::new(mode, degree).symbols(CORPUS);
		let mut occurrences: HashMap<ContextKey, usize> = HashMap::new();
		for window in symbols.windows(degree + 1) {
			*occurrences.entry(ContextKey::new(&window[..degree])).or_insert(0) += 1;
		}

		assert_eq!(model.len(), occurrences.len());
		for (context, expected) in &occurrences {
			assert_eq!(model.distribution(context).unwrap().total(), *expected, "{context:?}");
		}
	}
}

#[test]
fn test_generation_is_reproducible() {
	let mut model = MarkovModel::new(2, TokenMode::Word).unwrap();
	model.train(CORPUS).unwrap();

	let first = model.generate_with(40, &mut StdRng::seed_from_u64(2019)).unwrap();
	let second = model.generate_with(40, &mut StdRng::seed_from_u64(2019)).unwrap();
	assert_eq!(first, second);
	assert_eq!(first.split(' ').filter(|word| !word.is_empty()).count(), 40);
}

#[test]
fn test_character_generation_length() {
	let mut model = MarkovModel::new(3, TokenMode::Character).unwrap();
	model.train(CORPUS).unwrap();

	let mut rng = StdRng::seed_from_u64(8);
	for count in [3, 4, 50, 500] {
		assert_eq!(model.generate_with(count, &mut rng).unwrap().chars().count(), count);
	}
}

#[test]
fn test_generation_only_uses_trained_transitions() {
	let mut model = MarkovModel::new(1, TokenMode::Word).unwrap();
	model.train(CORPUS).unwrap();

	let text = model.generate_with(200, &mut StdRng::seed_from_u64(31)).unwrap();
	let words: Vec<&str> = text.split_whitespace().collect();
	for pair in words.windows(2) {
		let distribution = model.distribution(&ContextKey::new(&pair[..1])).unwrap();
		assert!(distribution.count_of(pair[1]) > 0, "{} -> {}", pair[0], pair[1]);
	}
}

#[test]
fn test_train_from_file() {
	let path = corpus_file("dickens", CORPUS);
	let config = ModelConfig::from_json(r#"{"degree": 2}"#).unwrap();

	let mut from_file = MarkovModel::from_config(&config).unwrap();
	from_file.train_from_file(&path).unwrap();
	let mut from_text = MarkovModel::from_config(&config).unwrap();
	from_text.train(CORPUS).unwrap();

	assert_eq!(from_file.to_string(), from_text.to_string());
	std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_read_failure_is_not_empty_training() {
	let mut model = MarkovModel::new(1, TokenMode::Word).unwrap();
	model.train("a b a b").unwrap();
	let before = model.to_string();

	let missing = std::env::temp_dir().join("rs-markov-core-does-not-exist.txt");
	assert!(matches!(model.train_from_file(&missing), Err(MarkovError::CorpusRead { .. })));
	assert_eq!(model.to_string(), before);

	let empty = corpus_file("empty", "");
	assert!(matches!(model.train_from_file(&empty), Err(MarkovError::CorpusTooShort { .. })));
	assert_eq!(model.to_string(), before);
	std::fs::remove_file(&empty).unwrap();
}

#[test]
fn test_debug_dump_shape() {
	let mut model = MarkovModel::new(2, TokenMode::Word).unwrap();
	model.train(CORPUS).unwrap();

	let dump = model.to_string();
	assert_eq!(dump.lines().count(), model.len());
	for line in dump.lines() {
		let (context, successors) = line.split_once(": ").unwrap();
		assert_eq!(context.split(' ').count(), 2);
		let symbols: Vec<&str> = context.split(' ').collect();
		let key = ContextKey::new(&symbols[..]);
		let total: usize = successors
			.split(' ')
			.map(|entry| {
				let (_, count) = entry.trim_end_matches(')').rsplit_once('(').unwrap();
				count.parse::<usize>().unwrap()
			})
			.sum();
		assert_eq!(model.distribution(&key).unwrap().total(), total);
	}
}
