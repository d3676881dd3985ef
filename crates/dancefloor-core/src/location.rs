//! Grid coordinates and move directions.

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// A cell coordinate on a grid.
///
/// `x` grows eastwards and `y` grows southwards. Locations are ordered
/// row-major, by `y` first and then by `x`.
///
/// # Examples
///
/// ```
/// use dancefloor_core::Location;
///
/// let mut locations = vec![Location::new(1, 0), Location::new(0, 1), Location::new(0, 0)];
/// locations.sort();
/// assert_eq!(
///     locations,
///     [Location::new(0, 0), Location::new(1, 0), Location::new(0, 1)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Location {
    /// Creates a location from column and row.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four directions a move command can push groups in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Decreasing `y`.
    North,
    /// Increasing `y`.
    South,
    /// Increasing `x`.
    East,
    /// Decreasing `x`.
    West,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Direction`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction: {input:?}")]
pub struct ParseDirectionError {
    input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts full names and their first letters, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|dir| {
                let name = dir.name();
                name.eq_ignore_ascii_case(trimmed) || name[..1].eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ParseDirectionError {
                input: s.to_owned(),
            })
    }
}
