//! A table of human-readable feature names.

use core::fmt;

use crate::api::{Feature, all_features};

/// Maps each feature of a registry to a human-readable name.
///
/// The table is consulted for rendering and parsing only; the set-algebra never depends on it.
pub trait FeatureNames<F>
where
    F: Feature,
{
    /// Returns the name of the feature.
    fn name(&self, feature: F) -> &str;

    /// Returns the feature whose name is `name`, if any.
    ///
    /// The default implementation scans every feature of the registry, in ascending order of index.
    fn find(&self, name: &str) -> Option<F> {
        all_features::<F>().find(|feature| self.name(*feature) == name)
    }
}

/// A slice of names, indexed by feature index.
///
/// #   Panics
///
/// `name` panics if the slice is shorter than the registry.
impl<F> FeatureNames<F> for [&str]
where
    F: Feature,
{
    #[track_caller]
    fn name(&self, feature: F) -> &str {
        self[feature.into_index() as usize]
    }

    fn find(&self, name: &str) -> Option<F> {
        let index = self.iter().take(F::COUNT as usize).position(|n| *n == name)?;

        Some(F::from_index(index as u32))
    }
}

impl<F, const N: usize> FeatureNames<F> for [&str; N]
where
    F: Feature,
{
    #[track_caller]
    fn name(&self, feature: F) -> &str {
        self.as_slice().name(feature)
    }

    fn find(&self, name: &str) -> Option<F> {
        self.as_slice().find(name)
    }
}

impl<F> FeatureNames<F> for fn(F) -> &'static str
where
    F: Feature,
{
    fn name(&self, feature: F) -> &str {
        self(feature)
    }
}

/// Renders a single feature, or the "none" sentinel, through a name table.
///
/// #   Examples
///
/// ```
/// #   use cpu_feature_set::{api::FeatureName, registry::aarch64::Aarch64Feature};
/// let names = Aarch64Feature::NAMES;
///
/// assert_eq!("NEON", FeatureName::new(Some(Aarch64Feature::Neon), names).to_string());
/// assert_eq!("none", FeatureName::<Aarch64Feature, _>::new(None, names).to_string());
/// ```
pub struct FeatureName<'a, F, N>
where
    N: ?Sized,
{
    feature: Option<F>,
    names: &'a N,
}

impl<'a, F, N> FeatureName<'a, F, N>
where
    N: ?Sized,
{
    /// Name rendered for the "none" sentinel.
    pub const NONE: &'static str = "none";

    /// Creates a new instance.
    pub const fn new(feature: Option<F>, names: &'a N) -> Self {
        Self { feature, names }
    }
}

impl<F, N> fmt::Display for FeatureName<'_, F, N>
where
    F: Feature,
    N: FeatureNames<F> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.feature {
            Some(feature) => f.write_str(self.names.name(feature)),
            None => f.write_str(Self::NONE),
        }
    }
}

// mod names_tests
