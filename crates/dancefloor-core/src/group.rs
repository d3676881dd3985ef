//! Groups of identically-typed kids.

use std::fmt::{self, Display};

use crate::{Gender, KidType, Location, Strength};

/// Identity of a [`Group`], unique within the puzzle that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct GroupId(pub u32);

/// A set of kids of one [`KidType`] standing in one cell, tracked by count.
///
/// A group registered in a [`Grid`](crate::Grid) always has a positive
/// count. A group whose count drops to zero must be removed by whoever
/// shrank it.
///
/// # Examples
///
/// ```
/// use dancefloor_core::{Group, GroupId, KidType, Location};
///
/// let mut group = Group::new(GroupId(1), KidType::GirlWeak, 3, Location::new(0, 0));
/// assert_eq!(group.resize(-2), 1);
/// assert!(!group.is_depleted());
/// assert_eq!(group.resize(-1), 0);
/// assert!(group.is_depleted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    id: GroupId,
    kid_type: KidType,
    count: u32,
    location: Location,
}

impl Group {
    /// Creates a group.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    #[must_use]
    pub fn new(id: GroupId, kid_type: KidType, count: u32, location: Location) -> Self {
        assert!(count > 0, "group {id} created with zero count");
        Self {
            id,
            kid_type,
            count,
            location,
        }
    }

    /// Returns the identity of this group.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the kid type of this group.
    #[must_use]
    pub fn kid_type(&self) -> KidType {
        self.kid_type
    }

    /// Returns the gender of this group's kid type.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.kid_type.gender()
    }

    /// Returns the strength of this group's kid type.
    #[must_use]
    pub fn strength(&self) -> Strength {
        self.kid_type.strength()
    }

    /// Returns the number of kids in this group.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the cell this group stands in (or is heading to, while moving).
    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Returns whether every kid has left this group.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.count == 0
    }

    /// Returns whether this group moves under a command for `driving`.
    ///
    /// See [`KidType::moves_with`].
    #[must_use]
    pub fn moves_with(&self, driving: KidType) -> bool {
        self.kid_type.moves_with(driving)
    }

    /// Returns whether this group, standing still, stops an incoming group of
    /// type `moving`.
    #[must_use]
    pub fn blocks(&self, moving: KidType) -> bool {
        self.kid_type.blocks(moving)
    }

    /// Returns whether this group may step into a cell held by `occupant`.
    ///
    /// An empty cell is always enterable. An occupied cell is refused only
    /// when the occupant is of the other gender and strictly stronger; same
    /// gender occupants merge and weaker-or-equal ones dance.
    #[must_use]
    pub fn can_enter_cell_occupied_by(&self, occupant: Option<&Group>) -> bool {
        occupant.is_none_or(|occupant| !occupant.blocks(self.kid_type))
    }

    /// Adjusts the count by `delta` and returns the new count.
    ///
    /// # Panics
    ///
    /// Panics if the count would become negative or overflow.
    pub fn resize(&mut self, delta: i64) -> u32 {
        let new_count = i64::from(self.count) + delta;
        self.count = u32::try_from(new_count).unwrap_or_else(|_| {
            panic!(
                "group {} cannot be resized by {delta} from {}",
                self.id, self.count
            )
        });
        self.count
    }

    /// Moves this group to `location`.
    ///
    /// Only the owner of the grid should call this, while the group is not
    /// registered.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} at {}",
            self.id, self.count, self.kid_type, self.location
        )
    }
}
