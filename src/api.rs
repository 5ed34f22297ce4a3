//! A set of high-level traits at the seams between feature sets and their registries.

pub mod feature;
pub mod feature_names;
pub mod runtime_probe;

pub use feature::{Feature, all_features};
pub use feature_names::{FeatureName, FeatureNames};
pub use runtime_probe::{NoProbe, RuntimeProbe};

pub use crate::utils::{FeatureMaskError, ParseFeatureError};
