//! Move resolution and scoring for the dancefloor puzzle.
//!
//! A [`Puzzle`] owns a toroidal [`Grid`](dancefloor_core::Grid) of kid
//! groups. Each move pushes every group that follows the chosen driving
//! [`KidType`](dancefloor_core::KidType) one cell in a [`Direction`]; groups
//! that end up in the same cell merge (same gender) or dance (other gender).
//! Dances earn `dances` and leave `tears`, moves without a dance add
//! `boredom`.
//!
//! - [`Puzzle`]: [`Puzzle::begin_move`], [`Puzzle::commit_move`],
//!   [`Puzzle::make_move`] and [`Puzzle::reset`]
//! - [`MoveOutcome`] / [`MoveEvent`]: what a committed move changed, for
//!   renderers to replay
//! - [`desc`]: puzzle definitions and their text form
//!
//! [`Direction`]: dancefloor_core::Direction
//!
//! # Examples
//!
//! ```
//! use dancefloor_core::{Direction, KidType};
//! use dancefloor_game::{MoveEvent, Puzzle, PuzzleDesc};
//!
//! let desc: PuzzleDesc = "
//!     b1 g1 .
//!     .  .  B2
//! "
//! .parse()
//! .unwrap();
//! let mut puzzle = Puzzle::from_desc(&desc).unwrap();
//!
//! // Phase one lifts the movers off the grid...
//! let pending = puzzle.begin_move(Direction::East, KidType::BoyWeak).unwrap();
//! assert_eq!(pending.len(), 1);
//!
//! // ...phase two drops them and resolves collisions.
//! let outcome = puzzle.commit_move(pending).unwrap();
//! assert!(outcome.events.iter().any(MoveEvent::is_danced));
//! assert_eq!(outcome.score.dances, 1);
//! assert_eq!(puzzle.to_desc().to_string(), ". . .\n. . B2\n");
//!
//! puzzle.reset();
//! assert_eq!(puzzle.to_desc(), desc);
//! ```

pub use self::{desc::*, error::*, outcome::*, puzzle::*};

pub mod desc;
mod error;
mod outcome;
mod puzzle;
