use dancefloor_core::{KidType, Location};
use dancefloor_game::{GroupDesc, PuzzleDesc};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// Errors that can occur when configuring a [`LayoutGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// The board would have no cells.
    #[display("layout dimensions must be positive, got {width}x{height}")]
    ZeroExtent {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },
}

/// A layout produced by [`LayoutGenerator`], with the seed that reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The starting layout.
    pub desc: PuzzleDesc,
    /// Seed the layout was generated from.
    pub seed: PuzzleSeed,
}

/// Scatters single kids at random over a board.
///
/// For every kid type, in canonical order, the generator puts
/// [`groups_per_type`](LayoutGenerator::groups_per_type) groups of one kid
/// into distinct random empty cells: three quarters of a quarter of the
/// board, rounded up. On boards too small for that, placement stops once
/// every cell is taken.
///
/// The layout is a pure function of the dimensions and the seed.
///
/// # Examples
///
/// ```
/// use dancefloor_game::Puzzle;
/// use dancefloor_generator::{LayoutGenerator, PuzzleSeed};
///
/// let generator = LayoutGenerator::new(4, 4).unwrap();
/// let seed = PuzzleSeed::from_phrase("example");
/// let generated = generator.generate_with_seed(seed);
/// assert_eq!(generated.desc.groups().len(), 12);
/// assert_eq!(generator.generate_with_seed(seed), generated);
///
/// let puzzle = Puzzle::from_desc(&generated.desc).unwrap();
/// assert_eq!(puzzle.total_kids(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGenerator {
    width: u16,
    height: u16,
}

impl LayoutGenerator {
    /// Creates a generator for `width × height` boards.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::ZeroExtent`] if either dimension is zero.
    pub fn new(width: u16, height: u16) -> Result<Self, GeneratorError> {
        if width == 0 || height == 0 {
            return Err(GeneratorError::ZeroExtent { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the number of groups placed for each kid type on a board
    /// large enough to hold them all.
    #[must_use]
    pub fn groups_per_type(&self) -> usize {
        (self.cell_count() * 3).div_ceil(16)
    }

    fn cell_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Generates a layout from a random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the layout determined by `seed`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut empty = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Location::new(x, y)))
            .collect::<Vec<_>>();

        let mut groups = Vec::with_capacity(self.groups_per_type() * KidType::ALL.len());
        'placement: for kid_type in KidType::ALL {
            for _ in 0..self.groups_per_type() {
                if empty.is_empty() {
                    break 'placement;
                }
                let location = empty.swap_remove(rng.random_range(0..empty.len()));
                groups.push(GroupDesc::new(kid_type, 1, location));
            }
        }
        log::debug!(
            "generated {}x{} layout with {} groups from seed {seed}",
            self.width,
            self.height,
            groups.len()
        );

        GeneratedPuzzle {
            desc: PuzzleDesc::new(self.width, self.height, groups),
            seed,
        }
    }
}
