//! Implementation of feature sets.

//  Design considerations
//
//  #   Why `Option<F>` for the sentinel?
//
//  A registry could reserve one of its values to mean "no feature", but every operation would then need to check for
//  it, and nothing would prevent setting it. `Option<F>` makes the sentinel unrepresentable in a mask, while still
//  letting `has(None)` and `combine(None)` behave as the identity.

pub mod feature_scope;
pub mod feature_set;
pub mod feature_set_iter;

#[cfg(feature = "serde")]
mod feature_set_serde;

pub use feature_scope::FeatureScope;
pub use feature_set::{FeatureSet, FeatureSetDisplay};
pub use feature_set_iter::Iter;
