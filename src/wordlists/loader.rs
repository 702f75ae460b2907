//! Word list loading utilities
//!
//! Turns raw word lists into dictionaries: invalid entries are skipped and
//! duplicates dropped, keeping the first occurrence's position.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are ignored.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_advisor::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    Ok(dictionary(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            None
        } else {
            Some(trimmed)
        }
    })))
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use wordle_advisor::wordlists::loader::words_from_slice;
/// use wordle_advisor::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    dictionary(slice.iter().copied())
}

fn dictionary<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    entries
        .filter_map(|entry| Word::new(entry).ok())
        .filter(|word| seen.insert(*word))
        .collect()
}
