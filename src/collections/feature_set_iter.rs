//! Iteration over the features of a set.

use core::{fmt, iter::FusedIterator, ptr};

use crate::{api::Feature, collections::FeatureSet};

/// Forward iterator over the features of a `FeatureSet`, in ascending order of index.
///
/// The iterator doubles as a cursor: `current` is the feature it is positioned on, or `None` once exhausted, and
/// `advance` moves it to the next feature of the set.
pub struct Iter<'a, F> {
    set: &'a FeatureSet<F>,
    current: Option<F>,
}

impl<'a, F> Iter<'a, F>
where
    F: Feature,
{
    //  Creates a new instance.
    //
    //  `current`, if any, must be a feature of `set`.
    pub(crate) fn new(set: &'a FeatureSet<F>, current: Option<F>) -> Self {
        debug_assert!(set.has(current));

        Self { set, current }
    }

    /// Returns the set being iterated over.
    pub fn set(&self) -> &'a FeatureSet<F> {
        self.set
    }

    /// Returns the feature the iterator is positioned on, or `None` if it is exhausted.
    pub fn current(&self) -> Option<F> {
        self.current
    }

    /// Moves to the next feature of the set, returning it.
    ///
    /// Once the highest feature of the set has been passed, the iterator is exhausted and `None` is returned. Advancing
    /// an exhausted iterator restarts the iteration from the lowest feature of the set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let set = FeatureSet::from([A::Neon, A::Sve]);
    ///
    /// let mut cursor = set.begin();
    /// assert_eq!(Some(A::Neon), cursor.current());
    ///
    /// assert_eq!(Some(A::Sve), cursor.advance());
    /// assert_eq!(None, cursor.advance());
    /// assert_eq!(set.end(), cursor);
    ///
    /// assert_eq!(Some(A::Neon), cursor.advance());
    /// ```
    pub fn advance(&mut self) -> Option<F> {
        self.current = match self.current {
            Some(current) => self.set.next_after(current),
            None => self.set.begin().current,
        };

        self.current
    }
}

impl<F> Iterator for Iter<'_, F>
where
    F: Feature,
{
    type Item = F;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.len();

        (count, Some(count))
    }

    fn count(self) -> usize {
        self.len()
    }

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = self.set.next_after(current);

        Some(current)
    }
}

impl<F> ExactSizeIterator for Iter<'_, F>
where
    F: Feature,
{
    fn len(&self) -> usize {
        self.current.map(|current| self.set.count_after(current)).unwrap_or(0)
    }
}

impl<F> FusedIterator for Iter<'_, F> where F: Feature {}

//
//  Common traits.
//

impl<F> Clone for Iter<'_, F>
where
    F: Copy,
{
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            current: self.current,
        }
    }
}

impl<F> fmt::Debug for Iter<'_, F>
where
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("Iter").field("current", &self.current).finish()
    }
}

impl<F> Eq for Iter<'_, F> where F: Eq {}

impl<F> PartialEq for Iter<'_, F>
where
    F: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.set, other.set) && self.current == other.current
    }
}

// mod iter_tests
