//  Errors.

use core::{error, fmt};

/// An error in parsing a list of feature names.
///
/// Holds the byte range, in the parsed text, of the first name which could not be found in the name table.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ParseFeatureError {
    start: usize,
    end: usize,
}

impl ParseFeatureError {
    /// Creates an error for the unknown name spanning `start..end` of the parsed text.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the byte range of the unknown name within the parsed text.
    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Returns the unknown name, given the parsed text.
    ///
    /// Returns an empty string if `text` is not the text which was parsed.
    pub fn name<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or_default()
    }
}

impl fmt::Display for ParseFeatureError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown feature name at {}..{}", self.start, self.end)
    }
}

impl error::Error for ParseFeatureError {}

/// An error in converting a raw mask into a set of features.
///
/// Holds the bits which do not correspond to any feature.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FeatureMaskError {
    unknown: u64,
}

impl FeatureMaskError {
    /// Creates an error for the given unknown bits.
    pub const fn new(unknown: u64) -> Self {
        Self { unknown }
    }

    /// Returns the bits which do not correspond to any feature.
    pub const fn unknown_bits(&self) -> u64 {
        self.unknown
    }
}

impl fmt::Display for FeatureMaskError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown feature bits {:#x}", self.unknown)
    }
}

impl error::Error for FeatureMaskError {}
