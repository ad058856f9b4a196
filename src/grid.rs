//! Cell storage: the fixed-size grid buffer and the double-buffer pair.

/// Number of rows in the grid
pub const ROWS: usize = 8;
/// Number of columns in the grid
pub const COLS: usize = 8;

/// State of a single cell.
///
/// Numeric-coded so neighbor counts can be computed by summing the codes
/// instead of branching per neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// True if the cell is alive
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Contribution of this cell to a neighbor count
    #[inline]
    fn count(self) -> u8 {
        self as u8
    }
}

/// One fixed ROWS x COLS buffer of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGrid {
    cells: [[Cell; COLS]; ROWS],
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CellGrid {
    /// Create an all-dead grid
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Dead; COLS]; ROWS],
        }
    }

    /// Get the cell at (row, col). Indices must be in range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Set the cell at (row, col). Indices must be in range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Reset every cell to dead
    pub fn clear(&mut self) {
        self.cells = [[Cell::Dead; COLS]; ROWS];
    }

    /// Count living cells in the whole grid
    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.count() as usize)
            .sum()
    }

    /// Count living cells among the 8 toroidal neighbors of (row, col).
    ///
    /// Row -1 wraps to ROWS-1 and row ROWS wraps to 0, and symmetrically
    /// for columns, so edge cells have a full Moore neighborhood. Adding
    /// `dim - 1` stands in for -1, keeping the arithmetic unsigned.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dr in [ROWS - 1, 0, 1] {
            for dc in [COLS - 1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = (row + dr) % ROWS;
                let c = (col + dc) % COLS;
                count += self.cells[r][c].count();
            }
        }
        count
    }

    /// Next state of the cell at (row, col) under the standard rule:
    /// exactly 3 neighbors is alive regardless of current state, a living
    /// cell with exactly 2 neighbors survives, everything else is dead.
    pub fn next_state(&self, row: usize, col: usize) -> Cell {
        match (self.live_neighbors(row, col), self.cells[row][col]) {
            (3, _) => Cell::Alive,
            (2, Cell::Alive) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// The double buffer: two grids plus a selector marking which one is
/// active (readable) and which is work (being written).
#[derive(Clone, Debug)]
pub struct GridPair {
    buffers: [CellGrid; 2],
    active: usize,
}

impl Default for GridPair {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPair {
    /// Create a pair of all-dead buffers
    pub fn new() -> Self {
        Self {
            buffers: [CellGrid::new(), CellGrid::new()],
            active: 0,
        }
    }

    /// The last committed buffer
    #[inline]
    pub fn active(&self) -> &CellGrid {
        &self.buffers[self.active]
    }

    /// The buffer being constructed for the next generation
    #[inline]
    pub fn work_mut(&mut self) -> &mut CellGrid {
        &mut self.buffers[self.active ^ 1]
    }

    /// Exchange the roles of the two buffers.
    ///
    /// O(1) selector toggle, never a cell copy. After the swap the old
    /// active buffer is the new work buffer and its contents are stale
    /// until rewritten.
    #[inline]
    pub fn commit(&mut self) {
        self.active ^= 1;
    }
}
