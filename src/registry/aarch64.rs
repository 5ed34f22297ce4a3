//! Optional features of AArch64 processors.

use crate::{collections::FeatureSet, feature_list};

feature_list! {
    /// An optional feature of AArch64 processors.
    ///
    /// The order of the variants is the order of iteration and rendering; new features are appended.
    pub enum Aarch64Feature {
        /// Scalar floating-point.
        Fp => "FP",
        /// Advanced SIMD.
        Neon => "NEON",
        /// CRC32 checksum instructions.
        Crc32 => "CRC32",
        /// AES instructions.
        Aes => "AES",
        /// SHA1 instructions.
        Sha1 => "SHA1",
        /// SHA256 instructions.
        Sha2 => "SHA2",
        /// Polynomial multiply long, 64-bit to 128-bit.
        Pmull1Q => "Pmull1Q",
        /// Large System Extensions: atomic memory operations.
        Atomics => "Atomics",
        /// Limited ordering regions.
        LoRegions => "LORegions",
        /// Rounding double multiply accumulate.
        Rdm => "RDM",
        /// Scalable Vector Extension.
        Sve => "SVE",
        /// Dot product instructions.
        DotProduct => "DotProduct",
        /// Half-precision scalar floating-point.
        FpHalf => "FPHalf",
        /// Half-precision Advanced SIMD.
        NeonHalf => "NEONHalf",
        /// Reliability, Availability, and Serviceability extension.
        Ras => "RAS",
        /// Data cache clean to point of persistence.
        DcPop => "DCPoP",
        /// JavaScript-style double to integer conversion.
        Jscvt => "JSCVT",
        /// Complex number arithmetic.
        Fcma => "Fcma",
        /// Release consistent processor consistent loads.
        RCpc => "RCpc",
        /// Release consistent processor consistent loads, with immediate offsets.
        RCpcImm => "RCpc (imm)",
        /// Flag manipulation.
        FlagM => "FlagM",
        /// Unaligned single-copy atomicity and ordering.
        Uscat => "USCAT",
        /// Half-precision multiply long.
        Fhm => "FHM",
        /// Pointer authentication.
        PAuth => "PAuth",
        /// Data-independent timing.
        Dit => "DIT",
    }
}

impl Aarch64Feature {
    /// Returns the features assumed by code generators predating feature detection: `FP` and `NEON`.
    ///
    /// #   Examples
    ///
    /// ```
    /// #   use cpu_feature_set::registry::aarch64::Aarch64Feature;
    /// let baseline = Aarch64Feature::legacy_baseline();
    ///
    /// assert_eq!("FP, NEON", baseline.to_string());
    /// ```
    pub fn legacy_baseline() -> FeatureSet<Self> {
        FeatureSet::from([Self::Fp, Self::Neon])
    }
}

#[cfg(test)]
mod aarch64_tests {
    use super::*;

    use crate::api::Feature;

    #[test]
    fn names_are_unique() {
        for (i, name) in Aarch64Feature::NAMES.iter().enumerate() {
            assert!(!name.is_empty(), "{i}");
            assert!(!Aarch64Feature::NAMES[..i].contains(name), "{name}");
        }
    }

    #[test]
    fn count() {
        assert_eq!(25, Aarch64Feature::COUNT);
        assert_eq!(25, FeatureSet::<Aarch64Feature>::all().count());
    }

    #[test]
    fn legacy_baseline() {
        let baseline = Aarch64Feature::legacy_baseline();

        assert_eq!(2, baseline.count());
        assert!(baseline.has([Aarch64Feature::Fp, Aarch64Feature::Neon]));
        assert!(!baseline.has(Aarch64Feature::Sve));
    }
} // mod aarch64_tests
