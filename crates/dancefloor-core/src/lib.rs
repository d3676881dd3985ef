//! Core data structures for the dancefloor puzzle.
//!
//! This crate holds the pieces of the simulation that carry no game flow:
//!
//! - [`kid_type`]: the four kid types ([`Gender`] × [`Strength`]) and the
//!   movement and blocking rules derived from them
//! - [`location`]: grid coordinates and the four move [`Direction`]s
//! - [`group`]: a counted group of kids standing in one cell
//! - [`grid`]: the toroidal board indexing groups by kid type and location
//! - [`by_kid_type`]: a small container with one slot per kid type
//!
//! Move resolution and scoring live in the `dancefloor-game` crate.
//!
//! # Examples
//!
//! ```
//! use dancefloor_core::{Direction, Grid, Group, GroupId, KidType, Location};
//!
//! let mut grid = Grid::new(2, 1).unwrap();
//! let girls = Group::new(GroupId(1), KidType::GirlWeak, 3, Location::new(0, 0));
//! let boys = Group::new(GroupId(2), KidType::BoyWeak, 2, Location::new(1, 0));
//! grid.register(girls);
//! grid.register(boys);
//!
//! let girls = grid.occupant_at(Location::new(0, 0)).unwrap();
//! let target = grid.location_after_move(girls.location(), Direction::East);
//! assert!(girls.can_enter_cell_occupied_by(grid.occupant_at(target)));
//! ```

pub mod by_kid_type;
pub mod grid;
pub mod group;
pub mod kid_type;
pub mod location;

pub use self::{
    by_kid_type::ByKidType,
    grid::{Grid, GridError},
    group::{Group, GroupId},
    kid_type::{Gender, KidType, ParseKidTypeError, Strength},
    location::{Direction, Location, ParseDirectionError},
};
