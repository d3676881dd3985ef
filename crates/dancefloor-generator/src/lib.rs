//! Random starting layouts for the dancefloor puzzle.
//!
//! [`LayoutGenerator`] scatters single kids of every type over a board,
//! driven by a [`PuzzleSeed`] so that any layout can be reproduced from its
//! seed. [`default_catalog`] lists the built-in puzzles, whose seeds are
//! derived from their names.
//!
//! # Examples
//!
//! ```
//! use dancefloor_core::{Direction, KidType};
//! use dancefloor_game::Puzzle;
//! use dancefloor_generator::{LayoutGenerator, PuzzleSeed};
//!
//! let generator = LayoutGenerator::new(5, 5).unwrap();
//! let generated = generator.generate();
//!
//! // The seed reproduces the layout.
//! let seed: PuzzleSeed = generated.seed.to_string().parse().unwrap();
//! assert_eq!(generator.generate_with_seed(seed), generated);
//!
//! let mut puzzle = Puzzle::from_desc(&generated.desc).unwrap();
//! puzzle.make_move(Direction::North, KidType::GirlStrong).unwrap();
//! ```

pub use self::{catalog::*, generator::*, seed::*};

mod catalog;
mod generator;
mod seed;
