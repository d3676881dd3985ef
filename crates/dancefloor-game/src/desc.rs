//! Puzzle definitions and their text form.
//!
//! A [`PuzzleDesc`] is the plain description a [`Puzzle`](crate::Puzzle) is
//! built from: grid dimensions plus one [`GroupDesc`] per starting group.
//!
//! The text form has one line per row with whitespace-separated cells. An
//! empty cell is `.`; an occupied cell is a kid type symbol (`g`, `G`, `b`,
//! `B`; lowercase weak, uppercase strong) followed by a positive count.
//!
//! ```
//! use dancefloor_core::{KidType, Location};
//! use dancefloor_game::PuzzleDesc;
//!
//! let desc: PuzzleDesc = "
//!     g3 .  .
//!     .  B2 b1
//! "
//! .parse()
//! .unwrap();
//! assert_eq!((desc.width(), desc.height()), (3, 2));
//! assert_eq!(desc.groups()[1].kid_type, KidType::BoyStrong);
//! assert_eq!(desc.groups()[1].location, Location::new(1, 1));
//! assert_eq!(desc.to_string(), "g3 . .\n. B2 b1\n");
//! ```

use std::{
    collections::HashMap,
    fmt::{self, Display},
    str::FromStr,
};

use dancefloor_core::{Group, KidType, Location};

/// The starting state of one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupDesc {
    /// Kid type of the group.
    pub kid_type: KidType,
    /// Number of kids; must be positive.
    pub count: u32,
    /// Cell the group starts in.
    pub location: Location,
}

impl GroupDesc {
    /// Creates a group description.
    #[must_use]
    pub const fn new(kid_type: KidType, count: u32, location: Location) -> Self {
        Self {
            kid_type,
            count,
            location,
        }
    }
}

impl From<&Group> for GroupDesc {
    fn from(group: &Group) -> Self {
        Self::new(group.kid_type(), group.count(), group.location())
    }
}

/// Grid dimensions plus the starting groups of a puzzle.
///
/// A description is not validated on its own; [`Puzzle::from_desc`] reports
/// out-of-range or overlapping groups.
///
/// [`Puzzle::from_desc`]: crate::Puzzle::from_desc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDesc {
    width: u16,
    height: u16,
    groups: Vec<GroupDesc>,
}

impl PuzzleDesc {
    /// Creates a description from dimensions and groups.
    #[must_use]
    pub fn new(width: u16, height: u16, groups: Vec<GroupDesc>) -> Self {
        Self {
            width,
            height,
            groups,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Returns the starting groups.
    #[must_use]
    pub fn groups(&self) -> &[GroupDesc] {
        &self.groups
    }

    /// Returns the total number of kids across all groups.
    #[must_use]
    pub fn total_kids(&self) -> u64 {
        self.groups.iter().map(|group| u64::from(group.count)).sum()
    }
}

/// Writes the text form. Groups outside the grid are not shown, and only
/// the first group of an overlapping pair is.
impl Display for PuzzleDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = HashMap::new();
        for group in &self.groups {
            cells.entry(group.location).or_insert(group);
        }
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                match cells.get(&Location::new(x, y)) {
                    Some(group) => write!(f, "{}{}", group.kid_type.symbol(), group.count)?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`PuzzleDesc`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDescError {
    /// The input has no rows.
    #[display("puzzle description is empty")]
    Empty,
    /// The grid would not fit the coordinate range.
    #[display("puzzle description is too large: {width}x{height}")]
    TooLarge {
        /// Number of columns found.
        width: usize,
        /// Number of rows found.
        height: usize,
    },
    /// A row has a different number of cells than the first one.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: u16,
        /// Cells in the first row.
        expected: u16,
        /// Cells in this row.
        found: usize,
    },
    /// A cell is not `.` or a symbol followed by a positive count.
    #[display("invalid cell {token:?} at {location}")]
    InvalidCell {
        /// Cell location.
        location: Location,
        /// The offending text.
        token: String,
    },
}

fn parse_cell(token: &str, location: Location) -> Result<Option<GroupDesc>, ParseDescError> {
    if token == "." {
        return Ok(None);
    }
    let invalid = || ParseDescError::InvalidCell {
        location,
        token: token.to_owned(),
    };
    let mut chars = token.chars();
    let kid_type = chars
        .next()
        .and_then(KidType::from_symbol)
        .ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let count = digits.parse::<u32>().map_err(|_| invalid())?;
    if count == 0 {
        return Err(invalid());
    }
    Ok(Some(GroupDesc::new(kid_type, count, location)))
}

impl FromStr for PuzzleDesc {
    type Err = ParseDescError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect::<Vec<_>>();
        let Some(first) = rows.first() else {
            return Err(ParseDescError::Empty);
        };
        let too_large = || ParseDescError::TooLarge {
            width: first.len(),
            height: rows.len(),
        };
        let width = u16::try_from(first.len()).map_err(|_| too_large())?;
        let height = u16::try_from(rows.len()).map_err(|_| too_large())?;

        let mut groups = Vec::new();
        for (y, cells) in (0..height).zip(&rows) {
            if cells.len() != usize::from(width) {
                return Err(ParseDescError::RaggedRow {
                    row: y,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (x, token) in (0..width).zip(cells) {
                if let Some(group) = parse_cell(token, Location::new(x, y))? {
                    groups.push(group);
                }
            }
        }
        Ok(Self::new(width, height, groups))
    }
}
