//! Fog of war: which cells the player has discovered.

/// Per-cell discovery flags over a `rows × cols` grid. Flags only ever go
/// from hidden to revealed.
#[derive(Clone, Debug)]
pub struct FogState {
    rows: usize,
    cols: usize,
    revealed: Vec<bool>,
}

impl FogState {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, revealed: vec![false; rows * cols] }
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (r, c) = (row as usize, col as usize);
        if r >= self.rows || c >= self.cols {
            return None;
        }
        Some(r * self.cols + c)
    }

    /// Marks a cell discovered. Cells outside the grid are ignored, callers
    /// probe neighbours freely.
    pub fn reveal(&mut self, row: i32, col: i32) {
        if let Some(i) = self.index(row, col) {
            self.revealed[i] = true;
        }
    }

    /// Reveals `(row, col)` and its four orthogonal neighbours.
    pub fn reveal_plus(&mut self, row: i32, col: i32) {
        self.reveal(row, col);
        self.reveal(row - 1, col);
        self.reveal(row + 1, col);
        self.reveal(row, col - 1);
        self.reveal(row, col + 1);
    }

    pub fn is_revealed(&self, row: i32, col: i32) -> bool {
        self.index(row, col).map(|i| self.revealed[i]).unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    pub fn cell_count(&self) -> usize {
        self.revealed.len()
    }
}
