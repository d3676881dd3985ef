use std::{
    fmt::{self, Display},
    ops::AddAssign,
};

use dancefloor_core::{Direction, GroupId, KidType, Location};

/// Cumulative score counters of a puzzle.
///
/// Counters only grow between resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    /// Pairs formed by dances.
    pub dances: u64,
    /// Kids left over after dances.
    pub tears: u64,
    /// Moves in which nobody danced.
    pub boredom: u64,
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.dances += rhs.dances;
        self.tears += rhs.tears;
        self.boredom += rhs.boredom;
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dances: {}, tears: {}, boredom: {}",
            self.dances, self.tears, self.boredom
        )
    }
}

/// A state change produced while committing a move, in the order it happened.
///
/// A renderer can replay these to animate the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveEvent {
    /// A moving group arrived in a new cell.
    Relocated {
        /// The moving group.
        id: GroupId,
        /// Cell it left.
        from: Location,
        /// Cell it arrived in.
        to: Location,
    },
    /// A moving group absorbed a group of the same gender.
    Merged {
        /// Cell of the merge.
        location: Location,
        /// The moving group, which keeps its kid type.
        survivor: GroupId,
        /// The group that was absorbed and destroyed.
        absorbed: GroupId,
        /// Count of the survivor after the merge.
        count: u32,
    },
    /// A moving group danced with a group of the other gender.
    Danced {
        /// Cell of the dance.
        location: Location,
        /// The moving group.
        mover: GroupId,
        /// The group that was standing in the cell.
        partner: GroupId,
        /// Number of pairs formed.
        pairs: u32,
        /// Count of the moving group afterwards.
        mover_left: u32,
        /// Count of the standing group afterwards.
        partner_left: u32,
    },
    /// A group ran out of kids and was removed.
    Destroyed {
        /// The removed group.
        id: GroupId,
        /// Cell it was removed from.
        location: Location,
    },
}

/// The result of committing a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Direction of the move.
    pub direction: Direction,
    /// Kid type that drove the move.
    pub driving: KidType,
    /// Changes in resolution order.
    pub events: Vec<MoveEvent>,
    /// Score earned by this move alone.
    pub delta: Score,
    /// Cumulative score after this move.
    pub score: Score,
}

impl MoveOutcome {
    /// Returns whether any group changed cells.
    #[must_use]
    pub fn anything_moved(&self) -> bool {
        self.events.iter().any(MoveEvent::is_relocated)
    }
}

/// The result of resetting a puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetOutcome {
    /// Groups that were removed, including movers of a discarded pending move.
    pub removed: Vec<GroupId>,
    /// Fresh groups restored from the original layout.
    pub restored: Vec<GroupId>,
}
