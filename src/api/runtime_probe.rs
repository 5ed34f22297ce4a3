//! A source of the features available at runtime.

use crate::{api::Feature, collections::FeatureSet};

/// A source of the features available at runtime.
///
/// This crate does not detect any hardware capability by itself: a platform layer is expected to implement this trait,
/// for example by querying the auxiliary vector, reading ID registers, or executing `cpuid`.
///
/// Any `Fn() -> FeatureSet<F>` is a probe, closures capturing a cached detection result included.
///
/// #   Examples
///
/// ```
/// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
/// let cached = FeatureSet::from([A::Fp, A::Neon, A::Aes]);
///
/// let set = FeatureSet::<A>::infer_with(&move || cached);
///
/// assert!(set.has(A::Aes));
/// ```
pub trait RuntimeProbe<F>
where
    F: Feature,
{
    /// Returns the features detected by this probe.
    fn probe(&self) -> FeatureSet<F>;
}

/// A probe which detects nothing.
///
/// This is the conservative default: code generated for the empty set of features runs everywhere.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NoProbe;

impl<F> RuntimeProbe<F> for NoProbe
where
    F: Feature,
{
    fn probe(&self) -> FeatureSet<F> {
        FeatureSet::empty()
    }
}

impl<F, T> RuntimeProbe<F> for T
where
    F: Feature,
    T: Fn() -> FeatureSet<F> + ?Sized,
{
    fn probe(&self) -> FeatureSet<F> {
        self()
    }
}
