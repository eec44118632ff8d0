//! Board state: chunk placement, activity tracking, and rendering.
//!
//! The grid owns every chunk for one puzzle. Chunks never leave it; accepting
//! a word marks its chunks consumed, and compaction moves them to a parked
//! row. Invariant: the indices of active chunks always form the contiguous
//! range `0..active_count`, in slot order.

use crate::chunk::{BoardShape, Chunk};
use crate::error::BoardSizeError;

/// A fully-populated board of chunks.
#[derive(Debug)]
pub struct Grid {
    shape: BoardShape,
    chunks: Vec<Chunk>,
    consumed: Vec<bool>,
}

impl Grid {
    /// Builds a board from chunk letters in reading order.
    pub fn new<S: AsRef<str>>(shape: BoardShape, letters: &[S]) -> Result<Self, BoardSizeError> {
        if letters.len() != shape.cells() {
            return Err(BoardSizeError {
                expected: shape.cells(),
                actual: letters.len(),
            });
        }
        let chunks = letters
            .iter()
            .enumerate()
            .map(|(slot, text)| Chunk::new(text.as_ref(), slot))
            .collect();
        Ok(Self {
            shape,
            chunks,
            consumed: vec![false; shape.cells()],
        })
    }

    #[inline]
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    /// All chunks in construction-slot order, parked ones included.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Number of chunks still in play.
    pub fn active_count(&self) -> usize {
        self.consumed.iter().filter(|&&consumed| !consumed).count()
    }

    pub fn is_active(&self, slot: usize) -> bool {
        !self.consumed[slot]
    }

    /// Letters of the active chunks in index order, the solver's pool.
    pub fn active_letters(&self) -> Vec<&str> {
        self.chunks
            .iter()
            .enumerate()
            .filter(|&(slot, _)| !self.consumed[slot])
            .map(|(_, chunk)| chunk.letters())
            .collect()
    }

    /// Resolves each letter run to a distinct active slot, first match wins.
    ///
    /// Duplicate letters resolve to different slots because earlier entries
    /// claim their match before later entries are tried.
    pub fn match_active(&self, letters: &[impl AsRef<str>]) -> Vec<Option<usize>> {
        let mut claimed = vec![false; self.chunks.len()];
        letters
            .iter()
            .map(|text| {
                let text = text.as_ref();
                let slot = (0..self.chunks.len()).find(|&slot| {
                    !self.consumed[slot] && !claimed[slot] && self.chunks[slot].letters() == text
                });
                if let Some(slot) = slot {
                    claimed[slot] = true;
                }
                slot
            })
            .collect()
    }

    /// Marks the given slots consumed and renumbers the survivors to
    /// `0..active_count`, preserving their relative order.
    ///
    /// Returns the consumed slots sorted by pre-removal index.
    pub(crate) fn retire(&mut self, slots: &[usize]) -> Vec<usize> {
        let mut removed = slots.to_vec();
        removed.sort_unstable_by_key(|&slot| self.chunks[slot].index());
        for &slot in &removed {
            self.consumed[slot] = true;
        }
        // slot order equals index order among active chunks, so assigning
        // ascending indices in slot order keeps the relative order intact
        let mut next = 0;
        for slot in 0..self.chunks.len() {
            if !self.consumed[slot] {
                self.chunks[slot].set_index(next);
                next += 1;
            }
        }
        removed
    }

    /// Moves a consumed chunk to an explicit cell. Parking only.
    pub(crate) fn place(&mut self, slot: usize, cell: usize) {
        self.chunks[slot].set_index(cell);
    }

    /// Renders the board as fixed-width text, rows top to bottom.
    ///
    /// Parked chunks carry a `*` prefix; vacated cells show as `.`.
    pub fn render(&self) -> String {
        let mut labels: Vec<Option<String>> = vec![None; self.shape.cells()];
        for (slot, chunk) in self.chunks.iter().enumerate() {
            if self.consumed[slot] {
                labels[chunk.index()] = Some(format!("*{}", chunk.letters()));
            }
        }
        // active chunks take display precedence on contested cells
        for (slot, chunk) in self.chunks.iter().enumerate() {
            if !self.consumed[slot] {
                labels[chunk.index()] = Some(chunk.letters().to_string());
            }
        }
        let width = labels.iter().flatten().map(String::len).max().unwrap_or(1);

        let mut output = String::new();
        for row in 0..self.shape.rows() {
            if row > 0 {
                output.push('\n');
            }
            let mut line = String::new();
            for column in 0..self.shape.columns() {
                if column > 0 {
                    line.push(' ');
                }
                match &labels[self.shape.cell(row, column)] {
                    Some(label) => line.push_str(&format!("{label:<width$}")),
                    None => line.push_str(&format!("{:<width$}", ".")),
                }
            }
            output.push_str(line.trim_end());
        }
        output
    }
}
