//! Chunk and board shape definitions.
//!
//! A chunk is a short run of letters occupying one cell of the board. Its
//! canonical position is the linear cell index; row and column are derived
//! from the index through `BoardShape` when needed.

/// Board dimensions, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardShape {
    rows: usize,
    columns: usize,
}

impl BoardShape {
    /// The 5x4 shape used by the daily puzzle.
    pub const STANDARD: Self = Self::new(5, 4);

    /// Creates a board shape. Panics if a dimension is zero or the board
    /// has more than 64 cells.
    pub const fn new(rows: usize, columns: usize) -> Self {
        assert!(rows >= 1, "board needs at least one row");
        assert!(columns >= 1, "board needs at least one column");
        assert!(rows * columns <= 64, "board must fit in a u64 selection mask");
        Self { rows, columns }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    #[inline]
    pub const fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Largest number of chunks one word may combine: a full row's worth,
    /// since an accepted word parks its chunks into a single row.
    #[inline]
    pub const fn max_chunks(&self) -> usize {
        self.columns
    }

    /// Converts (row, column) to a linear cell index. Row-major.
    #[inline]
    pub const fn cell(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Converts a linear cell index back to (row, column).
    #[inline]
    pub const fn coords(&self, cell: usize) -> (usize, usize) {
        (cell / self.columns, cell % self.columns)
    }
}

/// A lettered tile on the board.
///
/// `letters` never changes after construction. `index` is the chunk's current
/// cell and is rewritten as the board compacts; identity across moves is the
/// chunk's construction slot, not its letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    letters: String,
    index: usize,
}

impl Chunk {
    pub fn new(letters: impl Into<String>, index: usize) -> Self {
        Self {
            letters: letters.into(),
            index,
        }
    }

    #[inline]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Current linear cell index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Row derived from the linear index.
    #[inline]
    pub fn row(&self, shape: BoardShape) -> usize {
        shape.coords(self.index).0
    }

    /// Column derived from the linear index.
    #[inline]
    pub fn column(&self, shape: BoardShape) -> usize {
        shape.coords(self.index).1
    }
}
