//! Low-level utilities upon which feature sets are built.

mod error;
mod mask;

pub use error::{FeatureMaskError, ParseFeatureError};
pub use mask::{FeatureIndexRaw, FeatureMaskRaw};
