//  See `FeatureMaskRaw` type.
//
//  #   Why a dedicated type?
//
//  The set-algebra of `FeatureSet` is nothing more than bit arithmetic on an integer, but scattering shifts and masks
//  across the set, its iterator, and its (de)serialization invites off-by-one errors. A dedicated type gathers them in
//  one place, where they can be tested exhaustively.
//
//
//  #   Why `u64`?
//
//  A CPU feature registry rarely exceeds a few dozen entries, and `u64` is natively supported by every platform that
//  this crate targets. A wider mask would cost alignment and performance for no practical benefit.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A mask of feature bits, untyped.
///
/// Bit `i` is set if and only if the feature of index `i` is present.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct FeatureMaskRaw(pub u64);

/// The index of a bit in a mask.
///
/// The index is expected to always be strictly less than 64.
///
/// #   Panics
///
/// In Debug, most operations taking a `FeatureIndexRaw` will panic if its value is strictly greater than 63.
///
/// In Release, any high bit will be ignored (masked away).
///
/// #   Why `u32`?
///
/// In Rust, all shift operations take a `u32` as their right-hand argument, and `trailing_zeros` returns a `u32`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct FeatureIndexRaw(pub u32);

//
//  Constants.
//

impl FeatureMaskRaw {
    /// Number of bits in a mask.
    pub const BITS: u32 = u64::BITS;

    /// An all-zeros mask.
    pub const ALL_ZEROS: Self = Self(0);

    /// An all-ones mask.
    pub const ALL_ONES: Self = Self(!0);
}

//
//  Construction.
//

impl FeatureMaskRaw {
    /// Returns a mask with only the given bit set.
    ///
    /// #   Panics
    ///
    /// See `FeatureIndexRaw`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::utils::{FeatureIndexRaw, FeatureMaskRaw};
    /// assert_eq!(0b1000, FeatureMaskRaw::single(FeatureIndexRaw(3)).0);
    /// ```
    #[inline]
    pub const fn single(bit: FeatureIndexRaw) -> Self {
        Self(Self::bit_mask(bit))
    }

    /// Returns a mask with the `count` lowest bits set.
    ///
    /// A `count` of 64 or more returns `ALL_ONES`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::utils::FeatureMaskRaw;
    /// assert_eq!(0, FeatureMaskRaw::low_ones(0).0);
    /// assert_eq!(0b0111, FeatureMaskRaw::low_ones(3).0);
    /// assert_eq!(!0, FeatureMaskRaw::low_ones(64).0);
    /// ```
    #[inline]
    pub const fn low_ones(count: u32) -> Self {
        if count >= Self::BITS {
            return Self::ALL_ONES;
        }

        Self((1 << count) - 1)
    }
}

//
//  Bit operations.
//

impl FeatureMaskRaw {
    /// Returns the number of bits set.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::utils::FeatureMaskRaw;
    /// assert_eq!(0, FeatureMaskRaw::ALL_ZEROS.count());
    /// assert_eq!(64, FeatureMaskRaw::ALL_ONES.count());
    /// ```
    #[inline]
    pub const fn count(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Returns whether no bit is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns whether every bit set in `other` is also set in `self`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::utils::FeatureMaskRaw;
    /// let mask = FeatureMaskRaw(0b1011);
    ///
    /// assert!(mask.contains(FeatureMaskRaw(0b0011)));
    /// assert!(mask.contains(FeatureMaskRaw::ALL_ZEROS));
    /// assert!(!mask.contains(FeatureMaskRaw(0b0110)));
    /// ```
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns whether the given bit is set.
    ///
    /// #   Panics
    ///
    /// See `FeatureIndexRaw`.
    #[inline]
    pub const fn is_set(&self, bit: FeatureIndexRaw) -> bool {
        (self.0 & Self::bit_mask(bit)) != 0
    }

    /// Sets all bits of `other`.
    #[inline]
    pub const fn union(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Resets all bits of `other`.
    #[inline]
    pub const fn difference(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

// mod bit_tests

//
//  Query operations.
//

impl FeatureMaskRaw {
    /// Returns the number of bits set that are at, or after, the given index.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::utils::{FeatureIndexRaw, FeatureMaskRaw};
    /// assert_eq!(0, FeatureMaskRaw::ALL_ZEROS.count_after(FeatureIndexRaw(0)));
    ///
    /// assert_eq!(64, FeatureMaskRaw::ALL_ONES.count_after(FeatureIndexRaw(0)));
    /// assert_eq!(1, FeatureMaskRaw::ALL_ONES.count_after(FeatureIndexRaw(63)));
    /// ```
    #[inline]
    pub const fn count_after(&self, bit: FeatureIndexRaw) -> usize {
        let mask = Self::mask_after(bit);

        (self.0 & mask).count_ones() as _
    }

    /// Returns the index of the lowest set bit, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::utils::{FeatureIndexRaw, FeatureMaskRaw};
    /// assert_eq!(None, FeatureMaskRaw::ALL_ZEROS.first());
    /// assert_eq!(Some(FeatureIndexRaw(2)), FeatureMaskRaw(0b1100).first());
    /// ```
    #[inline]
    pub const fn first(&self) -> Option<FeatureIndexRaw> {
        Self::index_of(self.0.trailing_zeros())
    }

    /// Returns the index of the next set bit that is at, or after, the given index, if any.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::utils::{FeatureIndexRaw, FeatureMaskRaw};
    /// assert_eq!(None, FeatureMaskRaw::ALL_ZEROS.next_after(FeatureIndexRaw(0)));
    ///
    /// assert_eq!(Some(FeatureIndexRaw(3)), FeatureMaskRaw(0b1001).next_after(FeatureIndexRaw(1)));
    /// ```
    #[inline]
    pub const fn next_after(&self, bit: FeatureIndexRaw) -> Option<FeatureIndexRaw> {
        let mask = Self::mask_after(bit);

        Self::index_of((self.0 & mask).trailing_zeros())
    }

    /// Returns the index of the next set bit that is strictly after the given index, if any.
    ///
    /// Unlike `next_after`, any index is accepted: there is no bit after the last one.
    #[inline]
    pub const fn next_strictly_after(&self, bit: FeatureIndexRaw) -> Option<FeatureIndexRaw> {
        //  FIXME: convert to `?` when it is const.
        let Some(next) = bit.0.checked_add(1) else {
            return None;
        };

        if next >= Self::BITS {
            return None;
        }

        self.next_after(FeatureIndexRaw(next))
    }
}

// mod query_tests

//
//  Bitwise traits.
//

impl BitAndAssign for FeatureMaskRaw {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitAnd for FeatureMaskRaw {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl BitOrAssign for FeatureMaskRaw {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOr for FeatureMaskRaw {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl Not for FeatureMaskRaw {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

#[cfg(test)]
mod bitwise_tests {
    use super::*;

    #[test]
    fn bit_and() {
        const LEFT: u64 = 0b1001;
        const RIGHT: u64 = 0b0001_1000;
        const RESULT: u64 = 0b1000;

        {
            let mut mask = FeatureMaskRaw(LEFT);

            mask &= FeatureMaskRaw(RIGHT);

            assert_eq!(RESULT, mask.0);
        }

        assert_eq!(RESULT, (FeatureMaskRaw(LEFT) & FeatureMaskRaw(RIGHT)).0);
    }

    #[test]
    fn bit_or() {
        const LEFT: u64 = 0b1001;
        const RIGHT: u64 = 0b0001_1000;
        const RESULT: u64 = 0b0001_1001;

        {
            let mut mask = FeatureMaskRaw(LEFT);

            mask |= FeatureMaskRaw(RIGHT);

            assert_eq!(RESULT, mask.0);
        }

        assert_eq!(RESULT, (FeatureMaskRaw(LEFT) | FeatureMaskRaw(RIGHT)).0);
    }

    #[test]
    fn not() {
        assert_eq!(FeatureMaskRaw::ALL_ONES, !FeatureMaskRaw::ALL_ZEROS);
        assert_eq!(!0b0110, (!FeatureMaskRaw(0b0110)).0);
    }
} // mod bitwise_tests

//
//  Implementation details
//

impl FeatureMaskRaw {
    //  Mask of the bit.
    #[inline]
    const fn bit_mask(bit: FeatureIndexRaw) -> u64 {
        debug_assert!(bit.0 < Self::BITS);

        //  Mask to ensure the shift doesn't overflow.
        let shift = bit.0 % Self::BITS;

        1 << shift
    }

    //  Mask including `bit` and all bits after.
    #[inline]
    const fn mask_after(bit: FeatureIndexRaw) -> u64 {
        let mask = Self::bit_mask(bit) - 1;

        !mask
    }

    //  Converts the result of `trailing_zeros` into an index.
    #[inline]
    const fn index_of(zeros: u32) -> Option<FeatureIndexRaw> {
        //  FIXME: convert to `.then_some` when it is const.
        if zeros < Self::BITS {
            Some(FeatureIndexRaw(zeros))
        } else {
            None
        }
    }
}
