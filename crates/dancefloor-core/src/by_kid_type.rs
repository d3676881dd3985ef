//! Fixed-size container indexed by [`KidType`].

use std::ops::{Index, IndexMut};

use crate::KidType;

/// One value per [`KidType`], indexed by kid type.
///
/// # Examples
///
/// ```
/// use dancefloor_core::{ByKidType, KidType};
///
/// let mut counts = ByKidType::from_fn(|_| 0);
/// counts[KidType::BoyStrong] += 3;
/// assert_eq!(counts[KidType::BoyStrong], 3);
/// assert_eq!(counts.iter().map(|(_, n)| n).sum::<i32>(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByKidType<T> {
    array: [T; 4],
}

impl<T> ByKidType<T> {
    /// Builds a container by calling `f` for each kid type in canonical order.
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(KidType) -> T,
    {
        Self {
            array: KidType::ALL.map(f),
        }
    }

    /// Iterates over `(kid type, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (KidType, &T)> {
        KidType::ALL.into_iter().zip(&self.array)
    }

    /// Iterates over the values in canonical kid type order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.array.iter()
    }

    /// Iterates mutably over the values in canonical kid type order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.array.iter_mut()
    }
}

impl<T> Index<KidType> for ByKidType<T> {
    type Output = T;

    fn index(&self, kid_type: KidType) -> &T {
        &self.array[kid_type.index()]
    }
}

impl<T> IndexMut<KidType> for ByKidType<T> {
    fn index_mut(&mut self, kid_type: KidType) -> &mut T {
        &mut self.array[kid_type.index()]
    }
}
