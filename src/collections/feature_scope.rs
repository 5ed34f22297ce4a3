//! Temporary extension of a feature set.

use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{api::Feature, collections::FeatureSet};

/// A guard over a `FeatureSet`, restoring it to its saved value on drop.
///
/// Created by `FeatureSet::scope`. Code generators typically use it to allow additional features within a region, such
/// as a block of code guarded by a runtime check.
pub struct FeatureScope<'a, F>
where
    F: Feature,
{
    set: &'a mut FeatureSet<F>,
    saved: FeatureSet<F>,
}

impl<'a, F> FeatureScope<'a, F>
where
    F: Feature,
{
    //  Creates a new instance, which will restore `set` to `saved` on drop.
    pub(crate) fn new(set: &'a mut FeatureSet<F>, saved: FeatureSet<F>) -> Self {
        Self { set, saved }
    }

    /// Returns the value the set will be restored to.
    pub fn saved(&self) -> FeatureSet<F> {
        self.saved
    }
}

impl<F> Deref for FeatureScope<'_, F>
where
    F: Feature,
{
    type Target = FeatureSet<F>;

    fn deref(&self) -> &Self::Target {
        self.set
    }
}

impl<F> DerefMut for FeatureScope<'_, F>
where
    F: Feature,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.set
    }
}

impl<F> Drop for FeatureScope<'_, F>
where
    F: Feature,
{
    fn drop(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            scoped = self.set.into_mask(),
            restored = self.saved.into_mask(),
            "restoring feature set"
        );

        *self.set = self.saved;
    }
}

impl<F> fmt::Debug for FeatureScope<'_, F>
where
    F: Feature + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_struct("FeatureScope")
            .field("set", &self.set)
            .field("saved", &self.saved)
            .finish()
    }
}

// mod scope_tests
