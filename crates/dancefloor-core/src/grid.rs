//! Toroidal occupancy index over groups.

use std::{
    collections::HashMap,
    fmt::{self, Display, Write as _},
};

use crate::{ByKidType, Direction, Group, KidType, Location};

/// Errors reported by recoverable [`Grid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid would have no cells.
    #[display("grid dimensions must be positive, got {width}x{height}")]
    ZeroExtent {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
    /// The location lies outside the grid.
    #[display("location {location} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Offending location.
        location: Location,
        /// Grid width.
        width: u16,
        /// Grid height.
        height: u16,
    },
    /// Another group already stands at the location.
    #[display("location {location} is already occupied")]
    Occupied {
        /// Offending location.
        location: Location,
    },
}

/// A `width × height` board that wraps around on both axes.
///
/// Groups are stored partitioned by [`KidType`] and keyed by location, so
/// lookups, insertions and removals are constant time; a query for "any
/// occupant" checks the four partitions. At most one group stands in any
/// cell once a move has been fully resolved.
///
/// # Examples
///
/// ```
/// use dancefloor_core::{Direction, Grid, Group, GroupId, KidType, Location};
///
/// let mut grid = Grid::new(3, 2).unwrap();
/// grid.register(Group::new(GroupId(1), KidType::BoyWeak, 2, Location::new(2, 1)));
///
/// // Moving east from the last column wraps to the first one.
/// let next = grid.location_after_move(Location::new(2, 1), Direction::East);
/// assert_eq!(next, Location::new(0, 1));
///
/// assert_eq!(grid.occupant_at(Location::new(2, 1)).map(|g| g.count()), Some(2));
/// assert!(grid.occupant_at(next).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    groups: ByKidType<HashMap<Location, Group>>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroExtent`] if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroExtent { width, height });
        }
        Ok(Self {
            width,
            height,
            groups: ByKidType::default(),
        })
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

    /// Returns whether `location` lies on the grid.
    #[must_use]
    pub fn contains(&self, location: Location) -> bool {
        location.x < self.width && location.y < self.height
    }

    /// Returns the location one step from `location` in `direction`,
    /// wrapping around the edges.
    #[must_use]
    pub fn location_after_move(&self, location: Location, direction: Direction) -> Location {
        debug_assert!(self.contains(location), "{location} is off the grid");
        let Location { x, y } = location;
        // the result is below `extent`, so it fits back into `u16`
        #[expect(clippy::cast_possible_truncation)]
        let wrap = |value: u16, extent: u16, forward: bool| -> u16 {
            let (value, extent) = (u32::from(value), u32::from(extent));
            let next = if forward {
                (value + 1) % extent
            } else {
                (value + extent - 1) % extent
            };
            next as u16
        };
        match direction {
            Direction::North => Location::new(x, wrap(y, self.height, false)),
            Direction::South => Location::new(x, wrap(y, self.height, true)),
            Direction::East => Location::new(wrap(x, self.width, true), y),
            Direction::West => Location::new(wrap(x, self.width, false), y),
        }
    }

    /// Returns the group standing at `location`, if any.
    #[must_use]
    pub fn occupant_at(&self, location: Location) -> Option<&Group> {
        self.groups
            .values()
            .find_map(|groups| groups.get(&location))
    }

    /// Returns a mutable reference to the group standing at `location`, if any.
    ///
    /// The group's location must not be changed through this reference.
    pub fn occupant_at_mut(&mut self, location: Location) -> Option<&mut Group> {
        self.groups
            .values_mut()
            .find_map(|groups| groups.get_mut(&location))
    }

    /// Registers `group` at its location, checking the grid first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the group is off the grid and
    /// [`GridError::Occupied`] if its cell is taken. The grid is unchanged on
    /// error.
    pub fn try_register(&mut self, group: Group) -> Result<(), GridError> {
        let location = group.location();
        if !self.contains(location) {
            return Err(GridError::OutOfBounds {
                location,
                width: self.width,
                height: self.height,
            });
        }
        if self.occupant_at(location).is_some() {
            return Err(GridError::Occupied { location });
        }
        self.groups[group.kid_type()].insert(location, group);
        Ok(())
    }

    /// Registers `group` at its location.
    ///
    /// # Panics
    ///
    /// Panics if the group is off the grid or its cell is already occupied.
    /// Both indicate a broken resolution order, not a user error.
    pub fn register(&mut self, group: Group) {
        let id = group.id();
        if let Err(err) = self.try_register(group) {
            panic!("cannot register group {id}: {err}");
        }
    }

    /// Removes and returns the group of `kid_type` standing at `location`.
    ///
    /// # Panics
    ///
    /// Panics if no such group is registered.
    pub fn unregister(&mut self, kid_type: KidType, location: Location) -> Group {
        self.groups[kid_type]
            .remove(&location)
            .unwrap_or_else(|| panic!("no {kid_type} group registered at {location}"))
    }

    /// Returns every registered group, ordered by location and then by kid type.
    #[must_use]
    pub fn all_groups(&self) -> Vec<&Group> {
        let mut groups = self
            .groups
            .values()
            .flat_map(HashMap::values)
            .collect::<Vec<_>>();
        groups.sort_unstable_by_key(|group| (group.location(), group.kid_type()));
        groups
    }

    /// Returns the groups of a single kid type, in no particular order.
    pub fn groups_of_type(&self, kid_type: KidType) -> impl Iterator<Item = &Group> {
        self.groups[kid_type].values()
    }

    /// Returns the number of registered groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    /// Returns whether no group is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(HashMap::is_empty)
    }

    /// Removes every group.
    pub fn clear(&mut self) {
        for groups in self.groups.values_mut() {
            groups.clear();
        }
    }
}

/// Renders one row per line; empty cells are `.`, occupied cells are the
/// kid type symbol followed by the count.
impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |location| {
            self.occupant_at(location).map_or_else(
                || ".".to_owned(),
                |group| format!("{}{}", group.kid_type().symbol(), group.count()),
            )
        };
        let column_width = self
            .all_groups()
            .iter()
            .map(|group| cell(group.location()).len())
            .max()
            .unwrap_or(1);
        for y in 0..self.height {
            let mut line = String::new();
            for x in 0..self.width {
                if x > 0 {
                    line.push(' ');
                }
                write!(line, "{:>column_width$}", cell(Location::new(x, y)))?;
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
