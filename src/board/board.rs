//! Board structure

use super::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board, row-major flat storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Build a board from text rows (`X`, `O`, anything else is empty).
    /// Missing rows and columns stay empty; extra ones are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate().take(BOARD_SIZE) {
            for (col, ch) in line.chars().enumerate().take(BOARD_SIZE) {
                let mark = match ch {
                    'X' | 'x' => Mark::X,
                    'O' | 'o' => Mark::O,
                    _ => continue,
                };
                board.cells[row * BOARD_SIZE + col] = mark;
            }
        }
        board
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark on an empty cell.
    ///
    /// Returns `false` (and leaves the board untouched) when the cell is
    /// already occupied or `mark` is `Empty`. Cells only ever go empty -> mark.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) -> bool {
        if mark == Mark::Empty || !self.is_empty(pos) {
            return false;
        }
        self.cells[pos.to_index()] = mark;
        true
    }

    /// Copy of this board with `mark` placed at `pos`; `self` is not modified.
    #[must_use]
    pub fn with_placed(&self, pos: Pos, mark: Mark) -> Board {
        let mut copy = *self;
        copy.place(pos, mark);
        copy
    }

    /// Total marks on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Check if board has no marks at all
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.is_empty())
            .map(|(idx, &m)| (Pos::from_index(idx), m))
    }

    /// First empty cell in row-major order
    pub fn first_empty(&self) -> Option<Pos> {
        self.cells
            .iter()
            .position(|m| m.is_empty())
            .map(Pos::from_index)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: String = (0..BOARD_SIZE)
                .map(|col| self.get(Pos::new(row as u8, col as u8)).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
