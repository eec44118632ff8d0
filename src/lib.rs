//! Quartiles Puzzle Solver Library
//!
//! Given a board of letter chunks, finds every dictionary word spellable by
//! concatenating up to a row's worth of distinct chunks, and models how the
//! board compacts as maximal words are accepted and their chunks retire.

pub mod chunk;
pub mod compaction;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod solver;

pub use chunk::{BoardShape, Chunk};
pub use compaction::CompactionTracker;
pub use dictionary::{merge_word_list, remove_word_list, Dictionary, MergeOutcome};
pub use error::{BoardSizeError, DictionaryError};
pub use grid::Grid;
pub use solver::{format_solutions, solve, Solution, SolutionSet};
