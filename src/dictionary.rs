//! Word list loading, lookup, and maintenance.
//!
//! The dictionary is a flat membership set: one lowercase word per line on
//! disk, an `FxHashSet` in memory. Maintenance rewrites keep the on-disk
//! list sorted and deduplicated.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::DictionaryError;

/// In-memory word-membership oracle.
#[derive(Debug)]
pub struct Dictionary {
    words: FxHashSet<String>,
    max_word_len: usize,
}

impl Dictionary {
    /// Loads a word list from disk, one word per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DictionaryError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_words(contents.lines());
        debug!("loaded {} words from {}", dictionary.len(), path.display());
        Ok(dictionary)
    }

    /// Builds a dictionary from words already in memory.
    ///
    /// Entries are trimmed and lowercased; empty ones are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FxHashSet::default();
        let mut max_word_len = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_ascii_lowercase();
            max_word_len = max_word_len.max(word.len());
            set.insert(word);
        }
        Self {
            words: set,
            max_word_len,
        }
    }

    /// Replaces the vocabulary with the contents of another word list.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<(), DictionaryError> {
        *self = Self::load(path)?;
        Ok(())
    }

    /// Case-insensitive exact membership test.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Length of the longest word; bounds the solver's candidate growth.
    #[inline]
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Counts reported by a word-list rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Usable words found in the source list.
    pub read: usize,
    /// Words the rewrite added to or removed from the target list.
    pub changed: usize,
    /// Words in the target list after the rewrite.
    pub total: usize,
}

/// Merges the source list's words into the dictionary file.
///
/// Source entries are trimmed and lowercased; anything that is not purely
/// alphabetic is ignored. The dictionary is rewritten sorted, one word per
/// line. The source file is left untouched.
pub fn merge_word_list(
    dictionary: impl AsRef<Path>,
    source: impl AsRef<Path>,
) -> Result<MergeOutcome, DictionaryError> {
    let mut words = read_sorted(dictionary.as_ref())?;
    let candidates = read_candidates(source.as_ref())?;
    let before = words.len();
    for word in &candidates {
        words.insert(word.clone());
    }
    let outcome = MergeOutcome {
        read: candidates.len(),
        changed: words.len() - before,
        total: words.len(),
    };
    write_sorted(dictionary.as_ref(), &words)?;
    Ok(outcome)
}

/// Removes the source list's words from the dictionary file.
///
/// The counterpart of [`merge_word_list`], with the same filtering and the
/// same sorted rewrite.
pub fn remove_word_list(
    dictionary: impl AsRef<Path>,
    source: impl AsRef<Path>,
) -> Result<MergeOutcome, DictionaryError> {
    let mut words = read_sorted(dictionary.as_ref())?;
    let candidates = read_candidates(source.as_ref())?;
    let before = words.len();
    for word in &candidates {
        words.remove(word);
    }
    let outcome = MergeOutcome {
        read: candidates.len(),
        changed: before - words.len(),
        total: words.len(),
    };
    write_sorted(dictionary.as_ref(), &words)?;
    Ok(outcome)
}

fn read_sorted(path: &Path) -> Result<BTreeSet<String>, DictionaryError> {
    if !path.exists() {
        return Err(DictionaryError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_ascii_lowercase)
        .collect())
}

/// Reads source words, keeping only purely alphabetic entries.
fn read_candidates(path: &Path) -> Result<BTreeSet<String>, DictionaryError> {
    Ok(read_sorted(path)?
        .into_iter()
        .filter(|word| word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect())
}

fn write_sorted(path: &Path, words: &BTreeSet<String>) -> Result<(), DictionaryError> {
    let mut contents = String::new();
    for word in words {
        contents.push_str(word);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}
