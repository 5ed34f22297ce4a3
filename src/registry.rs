//! Declaration of feature registries.
//!
//! A registry is the closed, ordered, list of features a `FeatureSet` may contain. The `feature_list!` macro turns a
//! list of `Variant => "name"` pairs into an enum implementing `Feature`, along with its table of names.

pub mod aarch64;

/// Declares a registry of features.
///
/// Generates:
///
/// -   A fieldless `#[repr(u8)]` enum, whose variants are numbered from 0 in declaration order.
/// -   `ALL`, the slice of all variants, and `NAMES`, the slice of their names, both indexed by feature index.
/// -   `name()`, returning the name of a variant, and a `Display` implementation printing it.
/// -   The `Feature` implementation.
///
/// #   Examples
///
/// ```
/// use cpu_feature_set::{api::Feature, collections::FeatureSet, feature_list};
///
/// feature_list! {
///     /// Made-up extensions.
///     pub enum Extension {
///         /// Vector unit.
///         Vector => "vector",
///         /// Bit manipulation.
///         BitManip => "bitmanip",
///     }
/// }
///
/// assert_eq!(2, Extension::COUNT);
/// assert_eq!("bitmanip", Extension::BitManip.name());
///
/// let set = FeatureSet::from(Extension::Vector);
///
/// assert_eq!("vector", set.to_string());
/// ```
///
/// #   Compile-time errors
///
/// A registry holds at most 64 features, one per bit of the mask.
///
/// ```compile_fail
/// use cpu_feature_set::feature_list;
///
/// feature_list! {
///     enum TooMany {
///         F0 => "f0", F1 => "f1", F2 => "f2", F3 => "f3", F4 => "f4", F5 => "f5", F6 => "f6",
///         F7 => "f7", F8 => "f8", F9 => "f9", F10 => "f10", F11 => "f11", F12 => "f12", F13 => "f13",
///         F14 => "f14", F15 => "f15", F16 => "f16", F17 => "f17", F18 => "f18", F19 => "f19", F20 => "f20",
///         F21 => "f21", F22 => "f22", F23 => "f23", F24 => "f24", F25 => "f25", F26 => "f26", F27 => "f27",
///         F28 => "f28", F29 => "f29", F30 => "f30", F31 => "f31", F32 => "f32", F33 => "f33", F34 => "f34",
///         F35 => "f35", F36 => "f36", F37 => "f37", F38 => "f38", F39 => "f39", F40 => "f40", F41 => "f41",
///         F42 => "f42", F43 => "f43", F44 => "f44", F45 => "f45", F46 => "f46", F47 => "f47", F48 => "f48",
///         F49 => "f49", F50 => "f50", F51 => "f51", F52 => "f52", F53 => "f53", F54 => "f54", F55 => "f55",
///         F56 => "f56", F57 => "f57", F58 => "f58", F59 => "f59", F60 => "f60", F61 => "f61", F62 => "f62",
///         F63 => "f63", F64 => "f64",
///     }
/// }
/// ```
#[macro_export]
macro_rules! feature_list {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// All features, in ascending order of index.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Names of all features, indexed by feature index.
            pub const NAMES: &'static [&'static str] = &[$($label,)*];

            /// Returns the name of the feature.
            pub const fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }
        }

        const _: () = ::core::assert!(
            $name::ALL.len() <= $crate::utils::FeatureMaskRaw::BITS as usize,
            ::core::concat!("Too many features in `", ::core::stringify!($name), "` to fit in a mask")
        );

        impl $crate::api::Feature for $name {
            const COUNT: u32 = Self::ALL.len() as u32;

            #[track_caller]
            fn from_index(index: u32) -> Self {
                Self::ALL[index as usize]
            }

            fn into_index(self) -> u32 {
                self as u32
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

// mod macro_tests
