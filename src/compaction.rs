//! Board compaction after accepted solutions.
//!
//! Accepting a word retires its chunks from play: surviving chunks renumber
//! to stay contiguous, and the retired ones park in the lowest free row in
//! the left-to-right order they had before removal. Rows fill bottom-up, one
//! per accepted word, until every row is parked.

use log::warn;

use crate::grid::Grid;

/// Drives grid compaction and keeps the record of accepted words.
pub struct CompactionTracker {
    free_rows: usize,
    accepted: Vec<String>,
}

impl CompactionTracker {
    pub fn new(grid: &Grid) -> Self {
        Self {
            free_rows: grid.shape().rows(),
            accepted: Vec::new(),
        }
    }

    /// Accepts a solved word and compacts the board around it.
    ///
    /// Witness letters that no longer match an active chunk are skipped with
    /// a warning. Returns the number of chunks parked; once every row is
    /// parked (or when nothing resolves), the word is still recorded but the
    /// board is left untouched.
    pub fn accept(&mut self, grid: &mut Grid, word: &str, chunks: &[impl AsRef<str>]) -> usize {
        self.accepted.push(word.to_string());
        if self.free_rows == 0 {
            return 0;
        }

        let mut slots = Vec::with_capacity(chunks.len());
        for (resolved, text) in grid.match_active(chunks).into_iter().zip(chunks) {
            match resolved {
                Some(slot) => slots.push(slot),
                None => warn!("no active chunk spells {:?}; skipping it", text.as_ref()),
            }
        }
        if slots.is_empty() {
            return 0;
        }

        let shape = grid.shape();
        let removed = grid.retire(&slots);
        if removed.len() > shape.columns() {
            warn!(
                "{} chunks do not fit a {}-column row; parking the first {}",
                removed.len(),
                shape.columns(),
                shape.columns()
            );
        }

        let row = self.free_rows - 1;
        let parked = removed.len().min(shape.columns());
        for (column, &slot) in removed.iter().take(parked).enumerate() {
            grid.place(slot, shape.cell(row, column));
        }
        self.free_rows -= 1;
        parked
    }

    /// True once every row has been parked.
    pub fn is_exhausted(&self) -> bool {
        self.free_rows == 0
    }

    /// Rows still available for parking.
    pub fn free_rows(&self) -> usize {
        self.free_rows
    }

    /// Accepted words in acceptance order.
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }
}
