use crate::{GeneratedPuzzle, LayoutGenerator, PuzzleSeed};

/// Board sizes of the built-in puzzles, in catalog order.
const DEFAULT_SIZES: [u16; 4] = [4, 4, 4, 5];

/// A named puzzle in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display name, also the phrase the layout seed is derived from.
    pub name: String,
    /// The layout.
    pub puzzle: GeneratedPuzzle,
}

impl CatalogEntry {
    /// Generates the square puzzle whose seed is derived from `name`.
    ///
    /// Returns `None` for a zero `size`.
    #[must_use]
    pub fn from_name(name: impl Into<String>, size: u16) -> Option<Self> {
        let name = name.into();
        let generator = LayoutGenerator::new(size, size).ok()?;
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase(&name));
        Some(Self { name, puzzle })
    }
}

/// Returns the built-in puzzles, "Puzzle 1" to "Puzzle 4".
///
/// The list is the same on every call.
///
/// # Examples
///
/// ```
/// use dancefloor_generator::default_catalog;
///
/// let catalog = default_catalog();
/// assert_eq!(catalog.len(), 4);
/// assert_eq!(catalog[3].name, "Puzzle 4");
/// assert_eq!(catalog[3].puzzle.desc.width(), 5);
/// ```
#[must_use]
pub fn default_catalog() -> Vec<CatalogEntry> {
    (1..)
        .zip(DEFAULT_SIZES)
        .filter_map(|(n, size)| CatalogEntry::from_name(format!("Puzzle {n}"), size))
        .collect()
}

#[cfg(test)]
mod tests {
    use dancefloor_game::Puzzle;

    use super::*;

    #[test]
    fn test_default_catalog_is_stable() {
        let catalog = default_catalog();
        assert_eq!(catalog, default_catalog());
        let names = catalog
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Puzzle 1", "Puzzle 2", "Puzzle 3", "Puzzle 4"]);
        for entry in &catalog {
            assert!(Puzzle::from_desc(&entry.puzzle.desc).is_ok());
            assert_eq!(entry.puzzle.seed, PuzzleSeed::from_phrase(&entry.name));
        }
    }

    #[test]
    fn test_from_name_rejects_empty_board() {
        assert!(CatalogEntry::from_name("nothing", 0).is_none());
    }
}
