use dancefloor_core::{GridError, Location};

/// Errors that can occur when building or playing a [`Puzzle`](crate::Puzzle).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PuzzleError {
    /// The grid would have no cells.
    #[display("invalid puzzle dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
    /// A group was placed outside the grid.
    #[display("group at {location} is outside the {width}x{height} grid")]
    LocationOutOfBounds {
        /// Offending location.
        location: Location,
        /// Grid width.
        width: u16,
        /// Grid height.
        height: u16,
    },
    /// Two groups were placed in the same cell.
    #[display("more than one group at {location}")]
    DuplicateLocation {
        /// Offending location.
        location: Location,
    },
    /// A group was given no kids.
    #[display("group at {location} has a zero count")]
    ZeroCount {
        /// Offending location.
        location: Location,
    },
    /// The layout holds more kids than a single group can count.
    #[display("puzzle has {total} kids, more than a group can hold")]
    TooManyKids {
        /// Total number of kids in the layout.
        total: u64,
    },
    /// A move was started before the previous one was committed.
    #[display("a move is already in progress")]
    MoveInProgress,
    /// A move was committed while none was in progress.
    #[display("no move is in progress")]
    NoMoveInProgress,
    /// The pending move does not belong to the move in progress.
    #[display("pending move is stale")]
    StaleMove,
}

impl From<GridError> for PuzzleError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::ZeroExtent { width, height } => Self::InvalidDimensions { width, height },
            GridError::OutOfBounds {
                location,
                width,
                height,
            } => Self::LocationOutOfBounds {
                location,
                width,
                height,
            },
            GridError::Occupied { location } => Self::DuplicateLocation { location },
        }
    }
}
