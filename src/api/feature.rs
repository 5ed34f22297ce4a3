//! A generic feature identifier.

use core::hash::Hash;

/// A feature is one optional capability out of a closed, ordered, registry.
///
/// Each feature maps to a distinct index in `0..COUNT`, and the registry is expected to be small enough that every
/// index fits in a `FeatureSet` mask -- ie, `COUNT <= 64`. The `feature_list!` macro generates implementations which
/// check this at compile-time.
///
/// The absence of a feature, the "none" sentinel, is expressed as `None` in an `Option<Self>`.
pub trait Feature: Copy + Eq + Hash + Ord {
    /// Number of features in the registry.
    const COUNT: u32;

    /// Returns the feature associated to the index.
    ///
    /// #   Panics
    ///
    /// May panic if `index` is not strictly less than `COUNT`.
    fn from_index(index: u32) -> Self;

    /// Returns the index associated to the feature.
    ///
    /// The index must be strictly less than `COUNT`.
    fn into_index(self) -> u32;
}

/// Returns an iterator over all features of the registry, in ascending order of index.
///
/// #   Examples
///
/// ```
/// #   use cpu_feature_set::{api::all_features, registry::aarch64::Aarch64Feature};
/// let mut features = all_features::<Aarch64Feature>();
///
/// assert_eq!(Some(Aarch64Feature::Fp), features.next());
/// assert_eq!(Some(Aarch64Feature::Neon), features.next());
/// ```
pub fn all_features<F>() -> impl DoubleEndedIterator<Item = F> + ExactSizeIterator
where
    F: Feature,
{
    (0..F::COUNT as usize).map(|i| F::from_index(i as u32))
}

#[cfg(test)]
mod feature_tests {
    use super::*;

    use crate::registry::aarch64::Aarch64Feature;

    #[test]
    fn all_features_ascending() {
        let mut previous = None;

        for (i, feature) in all_features::<Aarch64Feature>().enumerate() {
            assert_eq!(i as u32, feature.into_index());
            assert!(previous < Some(feature), "{feature:?}");

            previous = Some(feature);
        }

        assert_eq!(Aarch64Feature::COUNT as usize, all_features::<Aarch64Feature>().len());
    }

    #[test]
    #[should_panic]
    fn from_index_overflow() {
        Aarch64Feature::from_index(Aarch64Feature::COUNT);
    }
} // mod feature_tests
