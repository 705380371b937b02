use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a corpus file line by line.
///
/// Line endings (`\n` or `\r\n`) are stripped; empty lines are kept so the
/// caller sees the file as written.
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	BufReader::new(File::open(filename)?).lines().collect()
}

/// Splits a line into lowercase word tokens.
///
/// Anything that is neither alphanumeric nor an apostrophe separates words.
/// Apostrophes are kept inside words (`don't`) but trimmed at both ends, so
/// quoted words come out bare.
///
/// Example:
/// `"I have a Dream, 'today'!"` → `["i", "have", "a", "dream", "today"]`
pub fn tokenize(line: &str) -> Vec<String> {
	line.split(|c: char| !(c.is_alphanumeric() || c == '\''))
		.map(|raw| raw.trim_matches('\''))
		.filter(|word| !word.is_empty())
		.map(str::to_lowercase)
		.collect()
}

/// Joins words with single spaces, breaking the line every `per_line` words.
///
/// Word order is preserved exactly. A `per_line` of 0 is treated as 1.
///
/// Example (`per_line = 2`):
/// `["a", "b", "c"]` → `"a b\nc"`
pub fn wrap_words<S: AsRef<str>>(words: &[S], per_line: usize) -> String {
	words
		.chunks(per_line.max(1))
		.map(|line| line.iter().map(|word| word.as_ref()).collect::<Vec<&str>>().join(" "))
		.collect::<Vec<_>>()
		.join("\n")
}

/// Name under which a corpus file is loaded: its file stem.
///
/// `"./data/dream.txt"` and `"dream.txt"` both load as `"dream"`.
pub fn corpus_name<P: AsRef<Path>>(corpus_path: P) -> io::Result<String> {
	corpus_path
		.as_ref()
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Corpus path has no file name"))
}

/// Resolves the folder holding corpora.
///
/// An empty path or `"."` / `"./"` means the working directory; anything
/// else is taken verbatim.
pub fn resolve_folder(input: &str) -> PathBuf {
	match input {
		"" | "." | "./" => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
		other => PathBuf::from(other),
	}
}

/// File names (not paths) of the regular files in `dir` ending in `.{extension}`.
///
/// Sorted, so corpora always load in the same order.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		let wanted = path.is_file() && path.extension().is_some_and(|ext| ext == extension);
		if let (true, Some(name)) = (wanted, path.file_name()) {
			files.push(name.to_string_lossy().into_owned());
		}
	}
	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn tokenize_lowercases_and_strips_punctuation() {
		assert_eq!(
			tokenize("I have a Dream, 'today'!"),
			vec!["i", "have", "a", "dream", "today"]
		);
	}

	#[test]
	fn tokenize_keeps_inner_apostrophes() {
		assert_eq!(tokenize("We can't -- won't  stop"), vec!["we", "can't", "won't", "stop"]);
	}

	#[test]
	fn tokenize_empty_line() {
		assert!(tokenize("  ... !! ").is_empty());
	}

	#[test]
	fn wrap_words_breaks_lines() {
		let words = ["one", "two", "three", "four", "five"];
		assert_eq!(wrap_words(&words, 2), "one two\nthree four\nfive");
		assert_eq!(wrap_words(&words, 5), "one two three four five");
		assert_eq!(wrap_words(&words, 0), "one\ntwo\nthree\nfour\nfive");
		assert_eq!(wrap_words::<&str>(&[], 20), "");
	}

	#[test]
	fn corpus_name_is_the_file_stem() {
		assert_eq!(corpus_name("./data/dream.txt").unwrap(), "dream");
		assert_eq!(corpus_name("dream.txt").unwrap(), "dream");
		assert!(corpus_name("").is_err());
	}

	#[test]
	fn resolve_folder_defaults_to_working_directory() {
		let cwd = env::current_dir().unwrap();
		assert_eq!(resolve_folder("."), cwd);
		assert_eq!(resolve_folder(""), cwd);
		assert_eq!(resolve_folder("data"), PathBuf::from("data"));
	}

	#[test]
	fn read_lines_and_list_files() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("speech.txt");
		let mut file = File::create(&path).unwrap();
		writeln!(file, "first line").unwrap();
		writeln!(file, "second line").unwrap();
		File::create(dir.path().join("notes.md")).unwrap();

		let lines = read_lines(&path).unwrap();
		assert_eq!(lines, vec!["first line", "second line"]);

		let files = list_files(dir.path(), "txt").unwrap();
		assert_eq!(files, vec!["speech.txt"]);
	}
}
