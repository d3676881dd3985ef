//! Kid type classification (gender × strength).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The gender half of a [`KidType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Gender {
    /// Girls.
    Girl,
    /// Boys.
    Boy,
}

/// The strength half of a [`KidType`].
///
/// Strengths are ordered: `Weak < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Strength {
    /// Weak kids follow strong kids of their gender but never lead them.
    Weak,
    /// Strong kids drag weak kids of their gender along.
    Strong,
}

/// The classification of a group of kids.
///
/// Every kid type is a combination of a [`Gender`] and a [`Strength`]. The
/// type decides which groups move under a command and what happens when two
/// groups end up in the same cell.
///
/// # Examples
///
/// ```
/// use dancefloor_core::{Gender, KidType, Strength};
///
/// let kid_type = KidType::new(Gender::Boy, Strength::Strong);
/// assert_eq!(kid_type, KidType::BoyStrong);
/// assert_eq!(kid_type.gender(), Gender::Boy);
///
/// // Strong boys drag weak boys along, but not the other way around.
/// assert!(KidType::BoyWeak.moves_with(KidType::BoyStrong));
/// assert!(!KidType::BoyStrong.moves_with(KidType::BoyWeak));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KidType {
    /// Weak girls.
    GirlWeak = 0,
    /// Strong girls.
    GirlStrong = 1,
    /// Weak boys.
    BoyWeak = 2,
    /// Strong boys.
    BoyStrong = 3,
}

impl KidType {
    /// All kid types in their canonical order.
    pub const ALL: [Self; 4] = [
        Self::GirlWeak,
        Self::GirlStrong,
        Self::BoyWeak,
        Self::BoyStrong,
    ];

    /// Creates the kid type for the given gender and strength.
    #[must_use]
    pub const fn new(gender: Gender, strength: Strength) -> Self {
        match (gender, strength) {
            (Gender::Girl, Strength::Weak) => Self::GirlWeak,
            (Gender::Girl, Strength::Strong) => Self::GirlStrong,
            (Gender::Boy, Strength::Weak) => Self::BoyWeak,
            (Gender::Boy, Strength::Strong) => Self::BoyStrong,
        }
    }

    /// Returns the position of this kid type in [`KidType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the gender of this kid type.
    #[must_use]
    pub const fn gender(self) -> Gender {
        match self {
            Self::GirlWeak | Self::GirlStrong => Gender::Girl,
            Self::BoyWeak | Self::BoyStrong => Gender::Boy,
        }
    }

    /// Returns the strength of this kid type.
    #[must_use]
    pub const fn strength(self) -> Strength {
        match self {
            Self::GirlWeak | Self::BoyWeak => Strength::Weak,
            Self::GirlStrong | Self::BoyStrong => Strength::Strong,
        }
    }

    /// Returns whether a group of this type moves under a command for `driving`.
    ///
    /// The genders must match and this type must not be stronger than the
    /// driving type.
    #[must_use]
    pub fn moves_with(self, driving: KidType) -> bool {
        self.gender() == driving.gender() && self.strength() <= driving.strength()
    }

    /// Returns whether a stationary group of this type stops an incoming
    /// group of type `moving`.
    ///
    /// Only a strictly stronger group of the other gender blocks.
    #[must_use]
    pub fn blocks(self, moving: KidType) -> bool {
        moving.gender() != self.gender() && moving.strength() < self.strength()
    }

    /// Returns the single-character symbol used on text boards.
    ///
    /// Lowercase is weak, uppercase is strong: `g`, `G`, `b`, `B`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::GirlWeak => 'g',
            Self::GirlStrong => 'G',
            Self::BoyWeak => 'b',
            Self::BoyStrong => 'B',
        }
    }

    /// Parses a symbol produced by [`KidType::symbol`].
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' => Some(Self::GirlWeak),
            'G' => Some(Self::GirlStrong),
            'b' => Some(Self::BoyWeak),
            'B' => Some(Self::BoyStrong),
            _ => None,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::GirlWeak => "girl-weak",
            Self::GirlStrong => "girl-strong",
            Self::BoyWeak => "boy-weak",
            Self::BoyStrong => "boy-strong",
        }
    }
}

impl Display for KidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`KidType`] name fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown kid type: {input:?}")]
pub struct ParseKidTypeError {
    input: String,
}

impl FromStr for KidType {
    type Err = ParseKidTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(kid_type) = KidType::ALL
            .into_iter()
            .find(|kid_type| kid_type.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(kid_type);
        }
        let mut chars = trimmed.chars();
        if let (Some(symbol), None) = (chars.next(), chars.next())
            && let Some(kid_type) = KidType::from_symbol(symbol)
        {
            return Ok(kid_type);
        }
        Err(ParseKidTypeError {
            input: s.to_owned(),
        })
    }
}
