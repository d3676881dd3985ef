use dancefloor_core::{ByKidType, Direction, Grid, Group, GroupId, KidType, Location};

use crate::{GroupDesc, MoveEvent, MoveOutcome, PuzzleDesc, PuzzleError, ResetOutcome, Score};

/// A puzzle session: the grid, its starting layout and the running score.
///
/// A move is played in two phases. [`Puzzle::begin_move`] picks the groups
/// that move and lifts them off the grid; [`Puzzle::commit_move`] drops them
/// into their target cells and resolves collisions. The caller may pause
/// between the two (to animate the slide), but every begun move must be
/// committed before another one starts. [`Puzzle::make_move`] does both at
/// once.
///
/// # Example
///
/// ```
/// use dancefloor_core::{Direction, KidType, Location};
/// use dancefloor_game::{Puzzle, Score};
///
/// let mut puzzle = Puzzle::from_desc(&"g3 b2".parse().unwrap()).unwrap();
///
/// let outcome = puzzle.make_move(Direction::East, KidType::GirlWeak).unwrap();
/// assert_eq!(outcome.score, Score { dances: 2, tears: 1, boredom: 0 });
///
/// let groups = puzzle.groups();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].kid_type(), KidType::GirlWeak);
/// assert_eq!(groups[0].count(), 1);
/// assert_eq!(groups[0].location(), Location::new(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    original: PuzzleDesc,
    score: Score,
    next_id: u32,
    move_serial: u64,
    in_flight: Option<InFlight>,
}

#[derive(Debug, Clone)]
struct InFlight {
    serial: u64,
    movers: Vec<GroupId>,
}

/// Groups lifted off the grid by [`Puzzle::begin_move`], waiting to be
/// dropped into their target cells by [`Puzzle::commit_move`].
///
/// The pending move owns the moving groups; dropping it without committing
/// loses them.
#[derive(Debug)]
#[must_use = "a begun move must be committed"]
pub struct PendingMove {
    serial: u64,
    direction: Direction,
    driving: KidType,
    movers: Vec<Mover>,
}

#[derive(Debug)]
struct Mover {
    group: Group,
    to: Location,
}

impl PendingMove {
    /// Returns the direction of the move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the kid type driving the move.
    #[must_use]
    pub fn driving(&self) -> KidType {
        self.driving
    }

    /// Returns whether no group is moving.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movers.is_empty()
    }

    /// Returns the number of moving groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movers.len()
    }

    /// Iterates over the moving groups, still at their old location, paired
    /// with their target cell, in resolution order.
    pub fn movers(&self) -> impl Iterator<Item = (&Group, Location)> {
        self.movers.iter().map(|mover| (&mover.group, mover.to))
    }
}

impl Puzzle {
    /// Builds a puzzle from dimensions and starting groups.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidDimensions`] for a zero extent,
    /// [`PuzzleError::ZeroCount`] for an empty group,
    /// [`PuzzleError::LocationOutOfBounds`] for a group off the grid,
    /// [`PuzzleError::DuplicateLocation`] for two groups in one cell and
    /// [`PuzzleError::TooManyKids`] if the kids would not fit in one group.
    pub fn new<I>(width: u16, height: u16, groups: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = GroupDesc>,
    {
        let original = PuzzleDesc::new(width, height, groups.into_iter().collect());
        let grid = Grid::new(width, height)?;
        // merges only combine existing kids, so no group can outgrow the total
        let total = original.total_kids();
        if u32::try_from(total).is_err() {
            return Err(PuzzleError::TooManyKids { total });
        }
        let mut this = Self {
            grid,
            original,
            score: Score::default(),
            next_id: 0,
            move_serial: 0,
            in_flight: None,
        };
        this.populate()?;
        log::debug!(
            "created {width}x{height} puzzle with {} groups",
            this.grid.len()
        );
        Ok(this)
    }

    /// Builds a puzzle from a description.
    ///
    /// # Errors
    ///
    /// See [`Puzzle::new`].
    pub fn from_desc(desc: &PuzzleDesc) -> Result<Self, PuzzleError> {
        Self::new(desc.width(), desc.height(), desc.groups().iter().copied())
    }

    fn populate(&mut self) -> Result<Vec<GroupId>, PuzzleError> {
        let mut ids = Vec::with_capacity(self.original.groups().len());
        for desc in self.original.groups() {
            if desc.count == 0 {
                return Err(PuzzleError::ZeroCount {
                    location: desc.location,
                });
            }
            self.next_id += 1;
            let id = GroupId(self.next_id);
            self.grid
                .try_register(Group::new(id, desc.kid_type, desc.count, desc.location))?;
            ids.push(id);
        }
        Ok(ids)
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns all groups on the grid, ordered by location.
    ///
    /// Groups lifted by a pending move are not included.
    #[must_use]
    pub fn groups(&self) -> Vec<&Group> {
        self.grid.all_groups()
    }

    /// Returns the cumulative score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns whether a move has begun but not been committed.
    #[must_use]
    pub fn is_move_in_progress(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns the layout the puzzle was built from.
    #[must_use]
    pub fn original(&self) -> &PuzzleDesc {
        &self.original
    }

    /// Returns the current layout as a description.
    #[must_use]
    pub fn to_desc(&self) -> PuzzleDesc {
        let groups = self
            .grid
            .all_groups()
            .into_iter()
            .map(GroupDesc::from)
            .collect();
        PuzzleDesc::new(self.width(), self.height(), groups)
    }

    /// Returns the number of kids of each type on the grid.
    #[must_use]
    pub fn kids_by_type(&self) -> ByKidType<u64> {
        ByKidType::from_fn(|kid_type| {
            self.grid
                .groups_of_type(kid_type)
                .map(|group| u64::from(group.count()))
                .sum()
        })
    }

    /// Returns the number of kids on the grid.
    #[must_use]
    pub fn total_kids(&self) -> u64 {
        self.kids_by_type().values().sum()
    }

    /// Starts a move: picks the groups that follow `driving` and can step in
    /// `direction`, and lifts them off the grid.
    ///
    /// Whether a group may step is decided against the grid as it was before
    /// anything moved. Movers are returned in ascending order of their old
    /// location.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::MoveInProgress`] if the previous move has not
    /// been committed. The grid is unchanged in that case.
    pub fn begin_move(
        &mut self,
        direction: Direction,
        driving: KidType,
    ) -> Result<PendingMove, PuzzleError> {
        if self.in_flight.is_some() {
            return Err(PuzzleError::MoveInProgress);
        }

        let mut targets = KidType::ALL
            .into_iter()
            .filter(|kid_type| kid_type.moves_with(driving))
            .flat_map(|kid_type| self.grid.groups_of_type(kid_type))
            .filter_map(|group| {
                let to = self.grid.location_after_move(group.location(), direction);
                group
                    .can_enter_cell_occupied_by(self.grid.occupant_at(to))
                    .then_some((group.kid_type(), group.location(), to))
            })
            .collect::<Vec<_>>();
        targets.sort_unstable_by_key(|&(kid_type, from, _)| (from, kid_type));

        let movers = targets
            .into_iter()
            .map(|(kid_type, from, to)| Mover {
                group: self.grid.unregister(kid_type, from),
                to,
            })
            .collect::<Vec<_>>();

        self.move_serial += 1;
        self.in_flight = Some(InFlight {
            serial: self.move_serial,
            movers: movers.iter().map(|mover| mover.group.id()).collect(),
        });
        log::debug!(
            "move {direction} driven by {driving}: {} groups vacated",
            movers.len()
        );

        Ok(PendingMove {
            serial: self.move_serial,
            direction,
            driving,
            movers,
        })
    }

    /// Finishes a move: drops every mover into its target cell and resolves
    /// the collisions, then updates the score.
    ///
    /// Movers are resolved one after another, each against the grid as the
    /// previous ones left it:
    ///
    /// - an empty cell simply receives the mover;
    /// - a group of the same gender is absorbed into the mover, which keeps
    ///   its own kid type;
    /// - a group of the other gender dances with the mover: both lose the
    ///   smaller of the two counts and whichever reaches zero is destroyed.
    ///
    /// Each dance adds its pairs to `dances` and the leftover kids to
    /// `tears`. A move without any dance adds one to `boredom`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::StaleMove`] if `pending` is not the move in
    /// progress, for example because the puzzle was reset after it began, and
    /// [`PuzzleError::NoMoveInProgress`] if `pending` comes from another
    /// puzzle while this one is idle.
    ///
    /// # Panics
    ///
    /// Panics if the grid and the pending move have gone out of sync, which
    /// cannot happen through this API.
    pub fn commit_move(&mut self, pending: PendingMove) -> Result<MoveOutcome, PuzzleError> {
        let Some(in_flight) = &self.in_flight else {
            // serials are handed out in order, so an older one was discarded
            return Err(if pending.serial <= self.move_serial {
                PuzzleError::StaleMove
            } else {
                PuzzleError::NoMoveInProgress
            });
        };
        if in_flight.serial != pending.serial {
            return Err(PuzzleError::StaleMove);
        }
        self.in_flight = None;

        let PendingMove {
            direction,
            driving,
            movers,
            ..
        } = pending;
        let mut events = Vec::new();
        let mut delta = Score::default();
        for Mover { group, to } in movers {
            self.resolve_mover(group, to, &mut events, &mut delta);
        }
        if delta.dances == 0 {
            delta.boredom = 1;
        }
        self.score += delta;
        log::debug!("move {direction} resolved: {delta}; total {}", self.score);

        Ok(MoveOutcome {
            direction,
            driving,
            events,
            delta,
            score: self.score,
        })
    }

    fn resolve_mover(
        &mut self,
        mut mover: Group,
        to: Location,
        events: &mut Vec<MoveEvent>,
        delta: &mut Score,
    ) {
        let from = mover.location();
        mover.set_location(to);
        events.push(MoveEvent::Relocated {
            id: mover.id(),
            from,
            to,
        });

        let Some(occupant) = self.grid.occupant_at_mut(to) else {
            log::trace!("{mover} moved into an empty cell");
            self.grid.register(mover);
            return;
        };

        if occupant.gender() == mover.gender() {
            let kid_type = occupant.kid_type();
            let absorbed = self.grid.unregister(kid_type, to);
            let count = mover.resize(i64::from(absorbed.count()));
            log::trace!("{mover} absorbed {absorbed}");
            events.push(MoveEvent::Merged {
                location: to,
                survivor: mover.id(),
                absorbed: absorbed.id(),
                count,
            });
            self.grid.register(mover);
            return;
        }

        let pairs = mover.count().min(occupant.count());
        let mover_left = mover.resize(-i64::from(pairs));
        let partner_left = occupant.resize(-i64::from(pairs));
        let (partner, partner_type) = (occupant.id(), occupant.kid_type());
        log::trace!("{mover} danced {pairs} pairs with {partner}");

        delta.dances += u64::from(pairs);
        delta.tears += u64::from(mover_left) + u64::from(partner_left);
        events.push(MoveEvent::Danced {
            location: to,
            mover: mover.id(),
            partner,
            pairs,
            mover_left,
            partner_left,
        });

        if occupant.is_depleted() {
            self.grid.unregister(partner_type, to);
            events.push(MoveEvent::Destroyed {
                id: partner,
                location: to,
            });
        }
        if mover.is_depleted() {
            events.push(MoveEvent::Destroyed {
                id: mover.id(),
                location: to,
            });
        } else {
            self.grid.register(mover);
        }
    }

    /// Plays a whole move: [`Puzzle::begin_move`] followed immediately by
    /// [`Puzzle::commit_move`].
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::MoveInProgress`] if a two-phase move is still
    /// pending.
    pub fn make_move(
        &mut self,
        direction: Direction,
        driving: KidType,
    ) -> Result<MoveOutcome, PuzzleError> {
        let pending = self.begin_move(direction, driving)?;
        self.commit_move(pending)
    }

    /// Restores the starting layout with fresh group ids and zeroes the score.
    ///
    /// A pending move is discarded; committing it afterwards fails with
    /// [`PuzzleError::StaleMove`].
    ///
    /// # Panics
    ///
    /// Panics if the starting layout no longer fits the grid, which cannot
    /// happen since it was validated at construction.
    pub fn reset(&mut self) -> ResetOutcome {
        let mut removed = self
            .grid
            .all_groups()
            .into_iter()
            .map(Group::id)
            .collect::<Vec<_>>();
        self.grid.clear();
        if let Some(in_flight) = self.in_flight.take() {
            removed.extend(in_flight.movers);
        }
        self.score = Score::default();
        let restored = self
            .populate()
            .unwrap_or_else(|err| panic!("starting layout became invalid: {err}"));
        log::debug!(
            "puzzle reset: {} groups removed, {} restored",
            removed.len(),
            restored.len()
        );
        ResetOutcome { removed, restored }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn puzzle(text: &str) -> Puzzle {
        Puzzle::from_desc(&text.parse().unwrap()).unwrap()
    }

    fn layout(puzzle: &Puzzle) -> String {
        puzzle.to_desc().to_string()
    }

    #[test]
    fn test_new_validates_input() {
        let g = |count, x, y| GroupDesc::new(KidType::GirlWeak, count, Location::new(x, y));
        assert_eq!(
            Puzzle::new(0, 2, Vec::new()).unwrap_err(),
            PuzzleError::InvalidDimensions {
                width: 0,
                height: 2
            }
        );
        assert_eq!(
            Puzzle::new(2, 2, [g(1, 0, 0), g(2, 0, 0)]).unwrap_err(),
            PuzzleError::DuplicateLocation {
                location: Location::new(0, 0)
            }
        );
        assert!(
            Puzzle::new(2, 2, [g(1, 2, 0)])
                .unwrap_err()
                .is_location_out_of_bounds()
        );
        assert_eq!(
            Puzzle::new(2, 2, [g(1, 0, 0), g(0, 1, 1)]).unwrap_err(),
            PuzzleError::ZeroCount {
                location: Location::new(1, 1)
            }
        );
        assert_eq!(
            Puzzle::new(2, 1, [g(u32::MAX - 1, 0, 0), g(u32::MAX - 1, 1, 0)]).unwrap_err(),
            PuzzleError::TooManyKids {
                total: 2 * u64::from(u32::MAX - 1)
            }
        );
        // a layout right at the limit merges into one full group
        let big = GroupDesc::new(KidType::GirlStrong, 1, Location::new(1, 0));
        let mut puzzle = Puzzle::new(2, 1, [g(u32::MAX - 1, 0, 0), big]).unwrap();
        let outcome = puzzle.make_move(Direction::East, KidType::GirlWeak).unwrap();
        assert!(outcome.events.iter().any(|event| matches!(
            event,
            MoveEvent::Merged { count: u32::MAX, .. }
        )));

        let puzzle = Puzzle::new(2, 2, [g(1, 0, 0), g(4, 1, 1)]).unwrap();
        assert_eq!(puzzle.total_kids(), 5);
        assert_eq!((puzzle.width(), puzzle.height()), (2, 2));
    }

    #[test]
    fn test_dance_scenario() {
        let mut puzzle = puzzle("g3 b2");
        let pending = puzzle
            .begin_move(Direction::East, KidType::GirlWeak)
            .unwrap();
        assert_eq!(pending.len(), 1);
        let (mover, to) = pending.movers().next().unwrap();
        assert_eq!(mover.location(), Location::new(0, 0));
        assert_eq!(to, Location::new(1, 0));
        // the mover is off the grid until the commit
        assert_eq!(puzzle.groups().len(), 1);
        assert!(puzzle.is_move_in_progress());

        let outcome = puzzle.commit_move(pending).unwrap();
        assert!(!puzzle.is_move_in_progress());
        assert_eq!(
            outcome.delta,
            Score {
                dances: 2,
                tears: 1,
                boredom: 0
            }
        );
        assert_eq!(layout(&puzzle), ". g1\n");
        assert_eq!(
            outcome.events,
            [
                MoveEvent::Relocated {
                    id: GroupId(1),
                    from: Location::new(0, 0),
                    to: Location::new(1, 0)
                },
                MoveEvent::Danced {
                    location: Location::new(1, 0),
                    mover: GroupId(1),
                    partner: GroupId(2),
                    pairs: 2,
                    mover_left: 1,
                    partner_left: 0
                },
                MoveEvent::Destroyed {
                    id: GroupId(2),
                    location: Location::new(1, 0)
                },
            ]
        );
    }

    #[test]
    fn test_dance_mover_destroyed() {
        let mut puzzle = puzzle("b2 . g5");
        let outcome = puzzle.make_move(Direction::West, KidType::BoyWeak).unwrap();
        // b2 wraps onto g5 and is consumed
        assert_eq!(layout(&puzzle), ". . g3\n");
        assert_eq!(outcome.delta.dances, 2);
        assert_eq!(outcome.delta.tears, 3);
        assert_eq!(
            outcome.events.last(),
            Some(&MoveEvent::Destroyed {
                id: GroupId(1),
                location: Location::new(2, 0)
            })
        );
    }

    #[test]
    fn test_dance_equal_counts_destroys_both() {
        let mut puzzle = puzzle("b2 g2");
        let outcome = puzzle.make_move(Direction::East, KidType::BoyWeak).unwrap();
        assert!(puzzle.groups().is_empty());
        assert_eq!(
            outcome.delta,
            Score {
                dances: 2,
                tears: 0,
                boredom: 0
            }
        );
        let destroyed = outcome
            .events
            .iter()
            .filter(|event| event.is_destroyed())
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_merge_keeps_mover_type() {
        let mut puzzle = puzzle("G2\nb1\ng3");
        // strong girls drag weak girls; both move south
        let outcome = puzzle
            .make_move(Direction::South, KidType::GirlStrong)
            .unwrap();
        // G2 steps onto b1 (weaker boy: dance), g3 wraps onto the vacated top cell
        assert_eq!(layout(&puzzle), "g3\nG1\n.\n");
        assert_eq!(outcome.delta.dances, 1);

        let mut puzzle = self::puzzle("g4 G2 .");
        let outcome = puzzle
            .make_move(Direction::East, KidType::GirlWeak)
            .unwrap();
        assert_eq!(layout(&puzzle), ". g6 .\n");
        assert!(outcome.events.iter().any(|event| matches!(
            event,
            MoveEvent::Merged { count: 6, .. }
        )));
        assert_eq!(outcome.delta.boredom, 1);
    }

    #[test]
    fn test_stronger_opposite_blocks() {
        let mut puzzle = puzzle("g1 B1");
        let pending = puzzle
            .begin_move(Direction::East, KidType::GirlStrong)
            .unwrap();
        assert!(pending.is_empty());
        let outcome = puzzle.commit_move(pending).unwrap();
        assert!(!outcome.anything_moved());
        assert_eq!(outcome.delta.boredom, 1);
        assert_eq!(layout(&puzzle), "g1 B1\n");
    }

    #[test]
    fn test_weak_command_leaves_strong_in_place() {
        let mut puzzle = puzzle("B1 . b1 .");
        puzzle.make_move(Direction::East, KidType::BoyWeak).unwrap();
        assert_eq!(layout(&puzzle), "B1 . . b1\n");
        puzzle.make_move(Direction::East, KidType::BoyStrong).unwrap();
        assert_eq!(layout(&puzzle), "b1 B1 . .\n");
    }

    #[test]
    fn test_chain_moves_through_vacated_cells() {
        // every girl moves, so each one lands where its neighbour used to be
        let mut puzzle = puzzle("g1 g2 g3");
        let outcome = puzzle.make_move(Direction::East, KidType::GirlWeak).unwrap();
        assert_eq!(layout(&puzzle), "g3 g1 g2\n");
        assert!(outcome.events.iter().all(MoveEvent::is_relocated));
    }

    #[test]
    fn test_later_mover_meets_earlier_survivor() {
        // The weak girl lands in the cell the strong girl has just left,
        // while the strong girl dances with the boys and is used up.
        let mut puzzle = puzzle("g2 G1 b3");
        let outcome = puzzle
            .make_move(Direction::East, KidType::GirlStrong)
            .unwrap();
        assert_eq!(layout(&puzzle), ". g2 b2\n");
        assert_eq!(
            outcome.delta,
            Score {
                dances: 1,
                tears: 2,
                boredom: 0
            }
        );
    }

    #[test]
    fn test_two_phase_guards() {
        let mut puzzle = puzzle("g1 .");
        let pending = puzzle
            .begin_move(Direction::East, KidType::GirlWeak)
            .unwrap();
        assert_eq!(
            puzzle
                .begin_move(Direction::West, KidType::GirlWeak)
                .unwrap_err(),
            PuzzleError::MoveInProgress
        );
        assert_eq!(
            puzzle
                .make_move(Direction::West, KidType::GirlWeak)
                .unwrap_err(),
            PuzzleError::MoveInProgress
        );
        puzzle.commit_move(pending).unwrap();

        let pending = puzzle
            .begin_move(Direction::East, KidType::GirlWeak)
            .unwrap();
        let reset = puzzle.reset();
        assert_eq!(reset.removed.len(), 1);
        assert_eq!(
            puzzle.commit_move(pending).unwrap_err(),
            PuzzleError::StaleMove
        );
        assert!(!puzzle.is_move_in_progress());
        assert_eq!(layout(&puzzle), "g1 .\n");
    }

    #[test]
    fn test_commit_without_begin() {
        let mut a = puzzle("g1 .");
        let mut b = puzzle("g1 .");
        let pending = a.begin_move(Direction::East, KidType::GirlWeak).unwrap();
        assert_eq!(
            b.commit_move(pending).unwrap_err(),
            PuzzleError::NoMoveInProgress
        );
    }

    #[test]
    fn test_reset_restores_original() {
        let text = "g3 b2 .\n. B1 G4\n";
        let mut puzzle = puzzle(text);
        for (direction, driving) in [
            (Direction::East, KidType::GirlStrong),
            (Direction::South, KidType::BoyStrong),
            (Direction::West, KidType::GirlWeak),
        ] {
            puzzle.make_move(direction, driving).unwrap();
        }
        assert_ne!(puzzle.score(), Score::default());

        let before = puzzle.groups().iter().map(|group| group.id()).collect::<Vec<_>>();
        let outcome = puzzle.reset();
        assert_eq!(outcome.removed, before);
        assert_eq!(outcome.restored.len(), 4);
        assert!(outcome.restored.iter().all(|id| !before.contains(id)));
        assert_eq!(puzzle.score(), Score::default());
        assert_eq!(layout(&puzzle), text);
        assert_eq!(puzzle.original().to_string(), text);
        assert_eq!(
            puzzle.kids_by_type().values().copied().collect::<Vec<_>>(),
            [3, 4, 2, 1]
        );
    }

    fn arb_desc() -> impl Strategy<Value = PuzzleDesc> {
        (1u16..=6, 1u16..=6)
            .prop_flat_map(|(width, height)| {
                let cells = usize::from(width) * usize::from(height);
                let cell = prop::option::weighted(
                    0.6,
                    (prop::sample::select(KidType::ALL.to_vec()), 1u32..=5),
                );
                (Just(width), Just(height), prop::collection::vec(cell, cells))
            })
            .prop_map(|(width, height, cells)| {
                let groups = (0..height)
                    .flat_map(|y| (0..width).map(move |x| Location::new(x, y)))
                    .zip(cells)
                    .filter_map(|(location, cell)| {
                        cell.map(|(kid_type, count)| GroupDesc::new(kid_type, count, location))
                    })
                    .collect();
                PuzzleDesc::new(width, height, groups)
            })
    }

    fn arb_moves() -> impl Strategy<Value = Vec<(Direction, KidType)>> {
        prop::collection::vec(
            (
                prop::sample::select(Direction::ALL.to_vec()),
                prop::sample::select(KidType::ALL.to_vec()),
            ),
            0..12,
        )
    }

    proptest! {
        #[test]
        fn test_move_invariants(desc in arb_desc(), moves in arb_moves()) {
            let mut puzzle = Puzzle::from_desc(&desc).unwrap();
            for (direction, driving) in moves {
                let before_kids = puzzle.total_kids();
                let before_score = puzzle.score();
                let outcome = puzzle.make_move(direction, driving).unwrap();

                // single occupancy
                let groups = puzzle.groups();
                let locations = groups.iter().map(|group| group.location()).collect::<HashSet<_>>();
                prop_assert_eq!(locations.len(), groups.len());
                prop_assert!(groups.iter().all(|group| group.count() > 0));

                // every dance removes two kids per pair, merges lose nobody
                prop_assert_eq!(before_kids - 2 * outcome.delta.dances, puzzle.total_kids());

                // score accounting
                let mut expected = Score::default();
                for event in &outcome.events {
                    if let MoveEvent::Danced { pairs, mover_left, partner_left, .. } = *event {
                        prop_assert!(mover_left == 0 || partner_left == 0);
                        expected.dances += u64::from(pairs);
                        expected.tears += u64::from(mover_left + partner_left);
                    }
                }
                expected.boredom = u64::from(expected.dances == 0);
                prop_assert_eq!(outcome.delta, expected);
                prop_assert_eq!(puzzle.score().dances, before_score.dances + expected.dances);
                prop_assert_eq!(puzzle.score().tears, before_score.tears + expected.tears);
                prop_assert_eq!(puzzle.score().boredom, before_score.boredom + expected.boredom);
            }

            puzzle.reset();
            prop_assert_eq!(puzzle.score(), Score::default());
            let mut restored = puzzle.to_desc().groups().to_vec();
            let mut original = desc.groups().to_vec();
            restored.sort_by_key(|group| group.location);
            original.sort_by_key(|group| group.location);
            prop_assert_eq!(restored, original);
        }

        #[test]
        fn test_movers_only_follow_driving_type(desc in arb_desc(), (direction, driving) in (
            prop::sample::select(Direction::ALL.to_vec()),
            prop::sample::select(KidType::ALL.to_vec()),
        )) {
            let mut puzzle = Puzzle::from_desc(&desc).unwrap();
            let pending = puzzle.begin_move(direction, driving).unwrap();
            let mut previous = None;
            for (group, _) in pending.movers() {
                prop_assert!(group.kid_type().moves_with(driving));
                prop_assert!(previous < Some(group.location()));
                previous = Some(group.location());
            }
            puzzle.commit_move(pending).unwrap();
        }
    }
}
