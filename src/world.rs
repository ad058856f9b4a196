//! The simulation engine: initialization, generation advance, rendering.

use crate::grid::{Cell, CellGrid, GridPair, COLS, ROWS};
use crate::pattern::{self, PatternError, Symbols};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// The simulation world: the double-buffered grid, the generation
/// counter, and a seeded random number generator.
///
/// A fresh world is uninitialized (generation 0). One of the initializers
/// must run before [`World::advance`] may be called; advancing an
/// uninitialized world is a contract violation and panics.
pub struct World {
    grids: GridPair,

    // 0 until the first successful initialization, then +1 per advance
    generation: u32,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create an uninitialized world with a random seed
    pub fn new() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(seed)
    }

    /// Create an uninitialized world with a specific seed for reproducibility
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            grids: GridPair::new(),
            generation: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Number of generations so far; 0 means uninitialized
    #[inline]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// The seed this world's RNG was created from
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The last committed grid
    #[inline]
    pub fn cells(&self) -> &CellGrid {
        self.grids.active()
    }

    /// Whether the cell at (row, col) is alive in the current generation
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.grids.active().get(row, col).is_alive()
    }

    /// Number of living cells in the current generation
    pub fn population(&self) -> usize {
        self.grids.active().live_count()
    }

    /// Initialize the first generation from a pattern file.
    ///
    /// On any failure the active buffer and generation counter are left
    /// untouched; the world stays uninitialized.
    pub fn initialize_from_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        symbols: Symbols,
    ) -> Result<(), PatternError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PatternError::FileOpen {
            path: path.display().to_string(),
            source,
        })?;
        self.initialize_from_reader(file, symbols)
    }

    /// Initialize the first generation from any byte stream.
    pub fn initialize_from_reader<R: Read>(
        &mut self,
        reader: R,
        symbols: Symbols,
    ) -> Result<(), PatternError> {
        let parsed = pattern::parse(reader, symbols)?;
        *self.grids.work_mut() = parsed;
        self.grids.commit();
        self.generation = 1;
        log::debug!("initialized from pattern, population {}", self.population());
        Ok(())
    }

    /// Initialize the first generation with a random pattern.
    ///
    /// Draws a placement count in [0, ROWS*COLS), then sets that many
    /// uniformly random cells alive. Duplicate placements are harmless.
    /// Never fails.
    pub fn initialize_random(&mut self) {
        let attempts = self.rng.gen_range(0..ROWS * COLS);

        self.grids.work_mut().clear();
        for _ in 0..attempts {
            let row = self.rng.gen_range(0..ROWS);
            let col = self.rng.gen_range(0..COLS);
            self.grids.work_mut().set(row, col, Cell::Alive);
        }

        self.grids.commit();
        self.generation = 1;
        log::debug!(
            "random initialization: {} placements, population {}",
            attempts,
            self.population()
        );
    }

    /// Compute and commit the next generation.
    ///
    /// Every cell's next state is evaluated against the active buffer and
    /// written to the work buffer, so the whole generation observes one
    /// consistent snapshot; only then are the buffer roles swapped.
    ///
    /// # Panics
    ///
    /// Panics if no initializer has run yet (generation 0).
    pub fn advance(&mut self) {
        assert!(
            self.generation >= 1,
            "World::advance called before initialization"
        );

        for row in 0..ROWS {
            for col in 0..COLS {
                let next = self.grids.active().next_state(row, col);
                self.grids.work_mut().set(row, col, next);
            }
        }

        self.grids.commit();
        self.generation += 1;
    }

    /// Advance `generations` generations
    pub fn run(&mut self, generations: u32) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Write the current generation to a stream using the given alphabet
    pub fn render<W: Write>(&self, writer: &mut W, symbols: Symbols) -> io::Result<()> {
        pattern::render(writer, self.grids.active(), symbols)
    }

    /// Render the current generation to a `String`
    pub fn render_to_string(&self, symbols: Symbols) -> String {
        pattern::render_to_string(self.grids.active(), symbols)
    }
}
