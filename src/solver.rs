//! Exhaustive word search over chunk combinations.
//!
//! Key points:
//! - Selections are identified by pool position via a `u64` bitmask, so
//!   duplicate chunk letters never collapse into one another
//! - One selection vec and one candidate string are reused across the whole
//!   search; the hot loop does not allocate
//! - Target sizes run from the board's maximum down to 1, each starting over
//!   from the full pool
//! - A word keeps the first witness that spells it; later spellings of the
//!   same word are ignored

use log::debug;
use rustc_hash::FxHashMap;

use crate::chunk::BoardShape;
use crate::dictionary::Dictionary;
use crate::error::BoardSizeError;

/// A dictionary word and the chunk sequence that spells it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    word: String,
    chunks: Vec<String>,
}

impl Solution {
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The witnessing chunk letters, in selection order.
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// Number of chunks combined.
    #[inline]
    pub fn size(&self) -> usize {
        self.chunks.len()
    }

    /// The word with its chunk seams shown, e.g. `di + min + ut + ive`.
    pub fn spelled(&self) -> String {
        self.chunks.join(" + ")
    }
}

/// Solutions in discovery order, deduplicated by word.
#[derive(Debug, Default)]
pub struct SolutionSet {
    solutions: Vec<Solution>,
    by_word: FxHashMap<String, usize>,
}

impl SolutionSet {
    /// True if the word has been found, in any spelling.
    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    /// The solution recorded for a word, if the word was found.
    pub fn witness(&self, word: &str) -> Option<&Solution> {
        self.by_word.get(word).map(|&at| &self.solutions[at])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    /// Solutions built from exactly `size` chunks, in discovery order.
    pub fn of_size(&self, size: usize) -> impl Iterator<Item = &Solution> + '_ {
        self.solutions
            .iter()
            .filter(move |solution| solution.size() == size)
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Records a word the first time it is spelled; later witnesses lose.
    fn record(&mut self, word: String, chunks: Vec<String>) {
        if self.by_word.contains_key(&word) {
            return;
        }
        self.by_word.insert(word.clone(), self.solutions.len());
        self.solutions.push(Solution { word, chunks });
    }
}

/// Finds every dictionary word spellable from the chunk pool.
///
/// Tries every ordered selection of 1..=max_chunks distinct chunks, largest
/// size first. The pool must fill the board exactly.
pub fn solve<S: AsRef<str>>(
    dictionary: &Dictionary,
    chunks: &[S],
    shape: BoardShape,
) -> Result<SolutionSet, BoardSizeError> {
    if chunks.len() != shape.cells() {
        return Err(BoardSizeError {
            expected: shape.cells(),
            actual: chunks.len(),
        });
    }

    let pool: Vec<&str> = chunks.iter().map(AsRef::as_ref).collect();
    let mut found = SolutionSet::default();
    let mut selection = Vec::with_capacity(shape.max_chunks());
    let mut candidate = String::new();

    for size in (1..=shape.max_chunks()).rev() {
        search(
            &pool,
            dictionary,
            size,
            0,
            &mut selection,
            &mut candidate,
            &mut found,
        );
    }

    debug!("search finished with {} words", found.len());
    Ok(found)
}

/// Extends the selection by every unused chunk, recursing until `size`
/// chunks are combined, then tests the concatenation.
fn search(
    pool: &[&str],
    dictionary: &Dictionary,
    size: usize,
    used: u64,
    selection: &mut Vec<usize>,
    candidate: &mut String,
    found: &mut SolutionSet,
) {
    if selection.len() == size {
        if dictionary.contains(candidate) && !found.contains(candidate) {
            let chunks: Vec<String> = selection.iter().map(|&at| pool[at].to_string()).collect();
            debug!("found {} = {}", candidate, chunks.join(" + "));
            found.record(candidate.clone(), chunks);
        }
        return;
    }
    // a candidate longer than the longest dictionary word cannot recover;
    // appending chunks never shortens it
    if candidate.len() > dictionary.max_word_len() {
        return;
    }
    for position in 0..pool.len() {
        if used & (1 << position) != 0 {
            continue;
        }
        let mark = candidate.len();
        candidate.push_str(pool[position]);
        selection.push(position);
        search(
            pool,
            dictionary,
            size,
            used | (1 << position),
            selection,
            candidate,
            found,
        );
        selection.pop();
        candidate.truncate(mark);
    }
}

/// Formats a solution set grouped by size, largest first, alphabetical
/// within each group.
pub fn format_solutions(found: &SolutionSet) -> String {
    let mut output = format!("found {} words", found.len());
    let largest = found.iter().map(Solution::size).max().unwrap_or(0);

    for size in (1..=largest).rev() {
        let mut group: Vec<&Solution> = found.of_size(size).collect();
        if group.is_empty() {
            continue;
        }
        group.sort_by(|a, b| a.word().cmp(b.word()));

        let label = if size == 1 { "chunk" } else { "chunks" };
        output.push_str(&format!("\n\n{size} {label}:"));
        for solution in group {
            if solution.size() > 1 {
                output.push_str(&format!("\n  {} ({})", solution.word(), solution.spelled()));
            } else {
                output.push_str(&format!("\n  {}", solution.word()));
            }
        }
    }

    output
}
