//! A fixed-capacity set of features.

use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::{
    api::{Feature, FeatureMaskError, FeatureName, FeatureNames, NoProbe, ParseFeatureError, RuntimeProbe},
    collections::{FeatureScope, Iter},
    utils::{FeatureIndexRaw, FeatureMaskRaw},
};

/// A fixed-capacity set of features.
///
/// The set is a single `u64` mask, in which bit `i` is set if and only if the feature of index `i` is present. It is
/// `Copy`, and all operations are plain bit arithmetic.
///
/// Operations accepting "features" accept anything convertible into a `FeatureSet`: another set, a single feature, the
/// "none" sentinel (`None`), or an array of features.
///
/// #   Examples
///
/// ```
/// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
/// let mut set = FeatureSet::from([A::Fp, A::Neon]);
///
/// set.combine(A::Aes);
/// set.remove(A::Fp);
///
/// assert!(set.has([A::Neon, A::Aes]));
/// assert!(!set.has(A::Fp));
/// assert_eq!("NEON, AES", set.to_string());
/// ```
pub struct FeatureSet<F> {
    mask: FeatureMaskRaw,
    _marker: PhantomData<fn(F) -> F>,
}

//
//  Creation
//

impl<F> FeatureSet<F>
where
    F: Feature,
{
    //  Post-monomorphization check, for `Feature` implementations not generated by `feature_list!`.
    const CAPACITY_CHECK: () = assert!(F::COUNT <= FeatureMaskRaw::BITS, "Too many features to fit in a mask");

    //  Mask of all valid bits.
    const VALID: FeatureMaskRaw = FeatureMaskRaw::low_ones(F::COUNT);

    /// Creates a new, empty, set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature};
    /// let set = FeatureSet::<Aarch64Feature>::empty();
    ///
    /// assert_eq!(0, set.count());
    /// ```
    pub const fn empty() -> Self {
        Self::from_raw(FeatureMaskRaw::ALL_ZEROS)
    }

    /// Creates a new set containing every feature of the registry.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{api::Feature, collections::FeatureSet, registry::aarch64::Aarch64Feature};
    /// let set = FeatureSet::<Aarch64Feature>::all();
    ///
    /// assert_eq!(Aarch64Feature::COUNT as usize, set.count());
    /// ```
    pub const fn all() -> Self {
        Self::from_raw(Self::VALID)
    }

    /// Creates a new set containing the given features.
    ///
    /// Any "none" sentinel contributes nothing.
    ///
    /// #   Panics
    ///
    /// If any feature has an index greater than or equal to `F::COUNT`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let set = FeatureSet::<A>::with_members([Some(A::Sve), None, Some(A::Fp)]);
    ///
    /// assert_eq!(2, set.count());
    /// ```
    #[track_caller]
    pub fn with_members<I>(features: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<F>>,
    {
        let mut result = Self::empty();

        for feature in features {
            result.mask.union(Self::mask_of(feature.into()));
        }

        result
    }

    /// Creates a new set from the features detected at runtime.
    ///
    /// No detection is performed by this crate, hence the result is always empty. See `infer_with` to plug in a
    /// platform-specific probe.
    pub fn infer_from_runtime() -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!("no runtime probe installed, assuming no optional feature");

        Self::infer_with(&NoProbe)
    }

    /// Creates a new set from the features detected by `probe`.
    pub fn infer_with<P>(probe: &P) -> Self
    where
        P: RuntimeProbe<F> + ?Sized,
    {
        let detected = probe.probe();

        #[cfg(feature = "tracing")]
        tracing::debug!(mask = detected.into_mask(), count = detected.count(), "inferred runtime features");

        detected
    }

    /// Creates a new set from its raw mask.
    ///
    /// Returns an error if any bit does not correspond to a feature of the registry.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let set = FeatureSet::<A>::from_mask(0b11).expect("valid mask");
    ///
    /// assert_eq!(FeatureSet::from([A::Fp, A::Neon]), set);
    ///
    /// let error = FeatureSet::<A>::from_mask(1 << 63).unwrap_err();
    ///
    /// assert_eq!(1 << 63, error.unknown_bits());
    /// ```
    pub const fn from_mask(mask: u64) -> Result<Self, FeatureMaskError> {
        let unknown = mask & !Self::VALID.0;

        if unknown != 0 {
            return Err(FeatureMaskError::new(unknown));
        }

        Ok(Self::from_raw(FeatureMaskRaw(mask)))
    }

    /// Returns the raw mask.
    pub const fn into_mask(self) -> u64 {
        self.mask.0
    }
}

impl<F> Default for FeatureSet<F>
where
    F: Feature,
{
    fn default() -> Self {
        Self::empty()
    }
}

//
//  Set-algebra
//

impl<F> FeatureSet<F>
where
    F: Feature,
{
    /// Returns the number of features in the set.
    pub const fn count(&self) -> usize {
        self.mask.count()
    }

    /// Returns whether the set is empty.
    pub const fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Clears the set, removing all features.
    pub const fn clear(&mut self) {
        self.mask = FeatureMaskRaw::ALL_ZEROS;
    }

    /// Adds the given features to the set.
    ///
    /// #   Panics
    ///
    /// See `with_members`.
    #[track_caller]
    pub fn combine(&mut self, other: impl Into<Self>) {
        self.mask.union(other.into().mask);
    }

    /// Removes the given features from the set.
    ///
    /// #   Panics
    ///
    /// See `with_members`.
    #[track_caller]
    pub fn remove(&mut self, other: impl Into<Self>) {
        self.mask.difference(other.into().mask);
    }

    /// Returns a copy of the set, with the given features added.
    ///
    /// #   Panics
    ///
    /// See `with_members`.
    #[must_use]
    #[track_caller]
    pub fn with(mut self, other: impl Into<Self>) -> Self {
        self.combine(other);
        self
    }

    /// Returns a copy of the set, with the given features removed.
    ///
    /// #   Panics
    ///
    /// See `with_members`.
    #[must_use]
    #[track_caller]
    pub fn without(mut self, other: impl Into<Self>) -> Self {
        self.remove(other);
        self
    }

    /// Returns whether all the given features are in the set.
    ///
    /// The "none" sentinel, and the empty set, are in every set.
    ///
    /// #   Panics
    ///
    /// See `with_members`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let set = FeatureSet::from([A::Fp, A::Neon]);
    ///
    /// assert!(set.has(A::Neon));
    /// assert!(set.has(None::<A>));
    /// assert!(!set.has([A::Neon, A::Sve]));
    /// ```
    #[track_caller]
    pub fn has(&self, other: impl Into<Self>) -> bool {
        self.mask.contains(other.into().mask)
    }
}

//
//  Iteration
//

impl<F> FeatureSet<F>
where
    F: Feature,
{
    /// Returns an iterator positioned on the lowest feature of the set, or exhausted if the set is empty.
    pub fn begin(&self) -> Iter<'_, F> {
        let first = self.mask.first().map(|i| F::from_index(i.0));

        Iter::new(self, first)
    }

    /// Returns an exhausted iterator, marking the end of the iteration.
    pub fn end(&self) -> Iter<'_, F> {
        Iter::new(self, None)
    }

    /// Returns an iterator over the features of the set, in ascending order of index.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let set = FeatureSet::from([A::Aes, A::Fp]);
    ///
    /// assert_eq!(vec![A::Fp, A::Aes], set.iter().collect::<Vec<_>>());
    /// ```
    pub fn iter(&self) -> Iter<'_, F> {
        self.begin()
    }

    //  Returns the next feature of the set, strictly after `feature`.
    pub(crate) fn next_after(&self, feature: F) -> Option<F> {
        self.mask
            .next_strictly_after(FeatureIndexRaw(feature.into_index()))
            .map(|i| F::from_index(i.0))
    }

    //  Returns the number of features of the set, at or after `feature`.
    pub(crate) fn count_after(&self, feature: F) -> usize {
        self.mask.count_after(FeatureIndexRaw(feature.into_index()))
    }
}

//
//  Rendering & Parsing
//

impl<F> FeatureSet<F>
where
    F: Feature,
{
    /// Returns an adapter rendering the set through the given name table.
    ///
    /// Features are rendered in ascending order of index, separated by `", "`. An empty set renders as an empty
    /// string.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let names = ["fp", "asimd", "crc32", "aes"];
    ///
    /// let set = FeatureSet::from([A::Aes, A::Fp]);
    ///
    /// assert_eq!("fp, aes", set.display_with(&names).to_string());
    /// assert_eq!("", FeatureSet::<A>::empty().display_with(&names).to_string());
    /// ```
    pub fn display_with<'a, N>(&'a self, names: &'a N) -> FeatureSetDisplay<'a, F, N>
    where
        N: FeatureNames<F> + ?Sized,
    {
        FeatureSetDisplay { set: self, names }
    }

    /// Parses a list of names, separated by commas, through the given name table.
    ///
    /// Whitespace around names is ignored, as are empty names, and the "none" sentinel. An empty string parses as an
    /// empty set.
    ///
    /// Returns an error pointing to the first name which is not in the table.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let set = FeatureSet::parse_with(A::NAMES, "FP, NEON").expect("known names");
    ///
    /// assert_eq!(FeatureSet::from([A::Fp, A::Neon]), set);
    ///
    /// let text = "FP, MMX";
    /// let error = FeatureSet::<A>::parse_with(A::NAMES, text).unwrap_err();
    ///
    /// assert_eq!("MMX", error.name(text));
    /// ```
    pub fn parse_with<N>(names: &N, text: &str) -> Result<Self, ParseFeatureError>
    where
        N: FeatureNames<F> + ?Sized,
    {
        let mut result = Self::empty();
        let mut start = 0;

        for item in text.split(',') {
            let name = item.trim();

            if !name.is_empty() && name != FeatureName::<F, N>::NONE {
                let Some(feature) = names.find(name) else {
                    let offset = start + (item.len() - item.trim_start().len());

                    return Err(ParseFeatureError::new(offset, offset + name.len()));
                };

                result.combine(feature);
            }

            //  Skip the item, and its separator.
            start += item.len() + 1;
        }

        Ok(result)
    }

    //  Writes the features, separated by `", "`, using `write` for each.
    fn render<W>(&self, f: &mut fmt::Formatter<'_>, mut write: W) -> Result<(), fmt::Error>
    where
        W: FnMut(F, &mut fmt::Formatter<'_>) -> Result<(), fmt::Error>,
    {
        let mut iter = self.iter();

        let Some(first) = iter.next() else {
            return Ok(());
        };

        write(first, f)?;

        for feature in iter {
            f.write_str(", ")?;
            write(feature, f)?;
        }

        Ok(())
    }
}

/// Renders a `FeatureSet` through a name table.
///
/// See `FeatureSet::display_with`.
pub struct FeatureSetDisplay<'a, F, N>
where
    N: ?Sized,
{
    set: &'a FeatureSet<F>,
    names: &'a N,
}

impl<F, N> fmt::Display for FeatureSetDisplay<'_, F, N>
where
    F: Feature,
    N: FeatureNames<F> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.set
            .render(f, |feature, f| fmt::Display::fmt(&FeatureName::new(Some(feature), self.names), f))
    }
}

//
//  Scoping
//

impl<F> FeatureSet<F>
where
    F: Feature,
{
    /// Adds the given features to the set, until the returned guard is dropped.
    ///
    /// On drop, the guard restores the set to its value prior to this call, discarding any modification made through
    /// the guard in the meantime.
    ///
    /// #   Panics
    ///
    /// See `with_members`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
    /// let mut set = FeatureSet::from(A::Fp);
    ///
    /// {
    ///     let scope = set.scope(A::Sve);
    ///
    ///     assert!(scope.has([A::Fp, A::Sve]));
    /// }
    ///
    /// assert!(!set.has(A::Sve));
    /// ```
    #[track_caller]
    pub fn scope(&mut self, extra: impl Into<Self>) -> FeatureScope<'_, F> {
        let saved = *self;

        self.combine(extra);

        FeatureScope::new(self, saved)
    }
}

//
//  Conversions
//

impl<F> From<F> for FeatureSet<F>
where
    F: Feature,
{
    #[track_caller]
    fn from(feature: F) -> Self {
        Self::from_raw(Self::mask_of(Some(feature)))
    }
}

impl<F> From<Option<F>> for FeatureSet<F>
where
    F: Feature,
{
    #[track_caller]
    fn from(feature: Option<F>) -> Self {
        Self::from_raw(Self::mask_of(feature))
    }
}

impl<F, const N: usize> From<[F; N]> for FeatureSet<F>
where
    F: Feature,
{
    #[track_caller]
    fn from(features: [F; N]) -> Self {
        Self::with_members(features)
    }
}

impl<F> FromIterator<F> for FeatureSet<F>
where
    F: Feature,
{
    #[track_caller]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = F>,
    {
        Self::with_members(iter)
    }
}

impl<F> Extend<F> for FeatureSet<F>
where
    F: Feature,
{
    #[track_caller]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = F>,
    {
        self.combine(Self::with_members(iter));
    }
}

impl<'a, F> IntoIterator for &'a FeatureSet<F>
where
    F: Feature,
{
    type Item = F;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//
//  Bitwise traits.
//

impl<F> BitOrAssign for FeatureSet<F> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.mask |= rhs.mask;
    }
}

impl<F> BitOr for FeatureSet<F> {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl<F> BitAndAssign for FeatureSet<F> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.mask &= rhs.mask;
    }
}

impl<F> BitAnd for FeatureSet<F> {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<F> SubAssign for FeatureSet<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.mask.difference(rhs.mask);
    }
}

impl<F> Sub for FeatureSet<F> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

//
//  Common traits.
//

impl<F> Clone for FeatureSet<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FeatureSet<F> {}

impl<F> fmt::Debug for FeatureSet<F>
where
    F: Feature + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<F> fmt::Display for FeatureSet<F>
where
    F: Feature + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.render(f, |feature, f| fmt::Display::fmt(&feature, f))
    }
}

impl<F> Eq for FeatureSet<F> {}

impl<F> Hash for FeatureSet<F> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.mask.hash(state);
    }
}

impl<F> PartialEq for FeatureSet<F> {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
    }
}

//
//  Implementation details
//

impl<F> FeatureSet<F>
where
    F: Feature,
{
    //  Creates a set from its mask, checking the capacity of the mask.
    const fn from_raw(mask: FeatureMaskRaw) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;

        Self {
            mask,
            _marker: PhantomData,
        }
    }

    //  Returns the mask of a single feature, or of the "none" sentinel.
    #[track_caller]
    fn mask_of(feature: Option<F>) -> FeatureMaskRaw {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn panic(index: u32, count: u32) -> ! {
            panic!("Feature index {index} out of range, expected less than {count}");
        }

        let Some(feature) = feature else {
            return FeatureMaskRaw::ALL_ZEROS;
        };

        let index = feature.into_index();

        if index >= F::COUNT {
            panic(index, F::COUNT);
        }

        FeatureMaskRaw::single(FeatureIndexRaw(index))
    }
}

#[cfg(test)]
mod set_tests {
    use super::*;

    use crate::{api::all_features, feature_list};

    feature_list! {
        enum Tiny {
            A => "a",
            B => "b",
            C => "c",
            D => "d",
        }
    }

    feature_list! {
        enum Full {
            F0 => "f0", F1 => "f1", F2 => "f2", F3 => "f3", F4 => "f4", F5 => "f5", F6 => "f6", F7 => "f7",
            F8 => "f8", F9 => "f9", F10 => "f10", F11 => "f11", F12 => "f12", F13 => "f13", F14 => "f14",
            F15 => "f15", F16 => "f16", F17 => "f17", F18 => "f18", F19 => "f19", F20 => "f20", F21 => "f21",
            F22 => "f22", F23 => "f23", F24 => "f24", F25 => "f25", F26 => "f26", F27 => "f27", F28 => "f28",
            F29 => "f29", F30 => "f30", F31 => "f31", F32 => "f32", F33 => "f33", F34 => "f34", F35 => "f35",
            F36 => "f36", F37 => "f37", F38 => "f38", F39 => "f39", F40 => "f40", F41 => "f41", F42 => "f42",
            F43 => "f43", F44 => "f44", F45 => "f45", F46 => "f46", F47 => "f47", F48 => "f48", F49 => "f49",
            F50 => "f50", F51 => "f51", F52 => "f52", F53 => "f53", F54 => "f54", F55 => "f55", F56 => "f56",
            F57 => "f57", F58 => "f58", F59 => "f59", F60 => "f60", F61 => "f61", F62 => "f62", F63 => "f63",
        }
    }

    //  All 16 subsets of `Tiny`.
    fn subsets() -> impl Iterator<Item = FeatureSet<Tiny>> {
        (0..16u64).map(|mask| FeatureSet::from_mask(mask).expect("valid mask"))
    }

    #[test]
    fn empty_all() {
        assert_eq!(0, FeatureSet::<Tiny>::empty().count());
        assert_eq!(4, FeatureSet::<Tiny>::all().count());
        assert_eq!(0b1111, FeatureSet::<Tiny>::all().into_mask());

        assert_eq!(FeatureSet::<Tiny>::empty(), FeatureSet::default());
        assert!(FeatureSet::<Tiny>::empty().is_empty());
    }

    #[test]
    fn full_capacity() {
        let set = FeatureSet::<Full>::all();

        assert_eq!(64, Full::COUNT);
        assert_eq!(64, set.count());
        assert_eq!(u64::MAX, set.into_mask());
        assert_eq!(Ok(set), FeatureSet::from_mask(u64::MAX));

        let mut cursor = set.begin();
        assert_eq!(Some(Full::F0), cursor.current());

        for _ in 1..64 {
            cursor.advance();
        }

        assert_eq!(Some(Full::F63), cursor.current());
        assert_eq!(1, cursor.len());

        assert_eq!(None, cursor.advance());
        assert_eq!(set.end(), cursor);

        assert_eq!(Some(Full::F0), cursor.advance());
        assert_eq!(set.begin(), cursor);

        assert_eq!(Some(Full::F63), set.without(Full::F0).iter().last());
    }

    #[test]
    fn infer_from_runtime_is_empty() {
        assert!(FeatureSet::<Tiny>::infer_from_runtime().is_empty());
    }

    #[test]
    fn infer_with_probe() {
        let probe: fn() -> FeatureSet<Tiny> = || FeatureSet::from([Tiny::B, Tiny::D]);

        let inferred = FeatureSet::infer_with(&probe);

        assert_eq!(FeatureSet::from([Tiny::B, Tiny::D]), inferred);
        assert!(FeatureSet::<Tiny>::infer_with(&NoProbe).is_empty());
    }

    #[test]
    fn infer_with_capturing_closure() {
        let detected = FeatureSet::from([Tiny::A, Tiny::C]);
        let probe = move || detected;

        assert_eq!(detected, FeatureSet::<Tiny>::infer_with(&probe));

        let dynamic: &dyn Fn() -> FeatureSet<Tiny> = &probe;

        assert_eq!(detected, FeatureSet::infer_with(dynamic));
    }

    #[test]
    fn with_members_sentinel() {
        let set = FeatureSet::<Tiny>::with_members([None, Some(Tiny::C), None]);

        assert_eq!(FeatureSet::from(Tiny::C), set);
        assert_eq!(FeatureSet::<Tiny>::empty(), FeatureSet::from(None::<Tiny>));
    }

    #[test]
    fn from_mask_unknown_bits() {
        let error = FeatureSet::<Tiny>::from_mask(0b11_0001).unwrap_err();

        assert_eq!(0b11_0000, error.unknown_bits());
        assert_eq!(Ok(FeatureSet::from([Tiny::A, Tiny::B])), FeatureSet::from_mask(0b0011));
    }

    #[test]
    fn single_feature() {
        for feature in all_features::<Tiny>() {
            let set = FeatureSet::<Tiny>::empty().with(feature);

            assert!(set.has(feature), "{feature:?}");
            assert_eq!(1, set.count(), "{feature:?}");
        }
    }

    #[test]
    fn combine_remove() {
        let mut set = FeatureSet::from(Tiny::A);

        set.combine([Tiny::B, Tiny::C]);
        assert_eq!(FeatureSet::from([Tiny::A, Tiny::B, Tiny::C]), set);

        set.remove(Tiny::B);
        assert_eq!(FeatureSet::from([Tiny::A, Tiny::C]), set);

        set.remove(Tiny::B);
        assert_eq!(FeatureSet::from([Tiny::A, Tiny::C]), set);

        set.combine(None::<Tiny>);
        set.remove(None::<Tiny>);
        assert_eq!(FeatureSet::from([Tiny::A, Tiny::C]), set);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn with_is_pure() {
        let set = FeatureSet::from(Tiny::A);

        let with = set.with(Tiny::B);
        let without = set.without(Tiny::A);

        assert_eq!(FeatureSet::from(Tiny::A), set);
        assert_eq!(FeatureSet::from([Tiny::A, Tiny::B]), with);
        assert!(without.is_empty());
    }

    #[test]
    fn has_sentinel() {
        for set in subsets() {
            assert!(set.has(None::<Tiny>), "{set:?}");
            assert!(set.has(FeatureSet::<Tiny>::empty()), "{set:?}");
        }
    }

    #[test]
    fn algebra_exhaustive() {
        for a in subsets() {
            for b in subsets() {
                assert!(a.with(b).has(b), "{a:?} {b:?}");
                assert_eq!(b.is_empty(), a.with(b).without(b).has(b), "{a:?} {b:?}");

                assert_eq!(a.with(b), a.with(b).with(b), "{a:?} {b:?}");
                assert_eq!(a.without(b), a.with(b).without(b), "{a:?} {b:?}");

                let mut removed = a;
                removed.remove(b);
                let once = removed;
                removed.remove(b);
                assert_eq!(once, removed, "{a:?} {b:?}");

                assert_eq!(a.with(b), a | b, "{a:?} {b:?}");
                assert_eq!(a.without(b), a - b, "{a:?} {b:?}");
                assert_eq!(a.has(b), (a & b) == b, "{a:?} {b:?}");
            }
        }
    }

    #[test]
    fn count_matches_iteration() {
        for set in subsets() {
            assert_eq!(set.count(), set.iter().count(), "{set:?}");
            assert_eq!(set.count(), set.iter().len(), "{set:?}");
        }
    }

    #[test]
    fn collect_extend() {
        let mut set: FeatureSet<Tiny> = [Tiny::D, Tiny::A].into_iter().collect();

        set.extend([Tiny::B]);

        assert_eq!(FeatureSet::from([Tiny::A, Tiny::B, Tiny::D]), set);
        assert_eq!(vec![Tiny::A, Tiny::B, Tiny::D], (&set).into_iter().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let _ = FeatureSet::<Broken>::from(Broken(4));
    }

    #[test]
    fn render() {
        assert_eq!("", FeatureSet::<Tiny>::empty().to_string());
        assert_eq!("a", FeatureSet::from(Tiny::A).to_string());
        assert_eq!("b, d", FeatureSet::from([Tiny::D, Tiny::B]).to_string());

        let names = ["alpha", "beta", "gamma", "delta"];

        assert_eq!("", FeatureSet::<Tiny>::empty().display_with(&names).to_string());
        assert_eq!("alpha, gamma", FeatureSet::from([Tiny::A, Tiny::C]).display_with(&names).to_string());
    }

    #[test]
    fn debug() {
        assert_eq!("{}", format!("{:?}", FeatureSet::<Tiny>::empty()));
        assert_eq!("{A, C}", format!("{:?}", FeatureSet::from([Tiny::C, Tiny::A])));
    }

    #[test]
    fn parse_round_trip() {
        for set in subsets() {
            let text = set.to_string();

            assert_eq!(Ok(set), FeatureSet::parse_with(Tiny::NAMES, &text), "{text}");
        }
    }

    #[test]
    fn parse_lenient() {
        let parsed = FeatureSet::<Tiny>::parse_with(Tiny::NAMES, " a,,none ,  c ,");

        assert_eq!(Ok(FeatureSet::from([Tiny::A, Tiny::C])), parsed);
        assert_eq!(Ok(FeatureSet::empty()), FeatureSet::<Tiny>::parse_with(Tiny::NAMES, "none"));
    }

    #[test]
    fn parse_unknown() {
        let text = "a, b,  zeta , c";

        let error = FeatureSet::<Tiny>::parse_with(Tiny::NAMES, text).unwrap_err();

        assert_eq!((7, 11), error.span());
        assert_eq!("zeta", error.name(text));
    }

    //  A registry whose `from_index` accepts indices beyond `COUNT`.
    #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
    struct Broken(u32);

    impl Feature for Broken {
        const COUNT: u32 = 4;

        fn from_index(index: u32) -> Self {
            Self(index)
        }

        fn into_index(self) -> u32 {
            self.0
        }
    }
} // mod set_tests
