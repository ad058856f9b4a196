//! # lifegrid
//!
//! Conway's Game of Life on a fixed 8x8 toroidal grid.
//!
//! ## Features
//!
//! - **Toroidal**: edges wrap, so every cell has a full 8-cell neighborhood
//! - **Double-buffered**: each generation commits by an O(1) buffer swap
//! - **Symbol-agnostic**: callers choose the dead/live alphabet for both
//!   pattern files and rendered output
//! - **Reproducible**: seeded random number generation
//!
//! ## Quick Start
//!
//! ```rust
//! use lifegrid::{Symbols, World};
//!
//! // Create a world and give it a random first generation
//! let mut world = World::new_with_seed(42);
//! world.initialize_random();
//! assert_eq!(world.generation(), 1);
//!
//! // Step the simulation and render it
//! world.advance();
//! print!("{}", world.render_to_string(Symbols::default()));
//! ```
//!
//! ## Loading a pattern
//!
//! ```rust
//! use lifegrid::{Symbols, World};
//!
//! let pattern = "\
//! ........\n\
//! .XX.....\n\
//! .XX.....\n\
//! ........\n\
//! ........\n\
//! ........\n\
//! ........\n\
//! ........\n";
//!
//! let mut world = World::new();
//! world.initialize_from_reader(pattern.as_bytes(), Symbols::default()).unwrap();
//!
//! // A 2x2 block is a still life
//! world.advance();
//! assert_eq!(world.render_to_string(Symbols::default()), pattern);
//! ```

pub mod config;
pub mod grid;
pub mod pattern;
pub mod world;

// Re-export main types
pub use config::Config;
pub use grid::{Cell, CellGrid, COLS, ROWS};
pub use pattern::{PatternError, Symbols};
pub use world::World;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
