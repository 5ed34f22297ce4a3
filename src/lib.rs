//! Fixed-capacity sets of CPU features
//!
//! #   Organization
//!
//! This crate is composed of multiple top modules:
//!
//! -   The `api` top module contains the traits at the seams with the outside world: the `Feature` registry, the
//!     `FeatureNames` table, and the `RuntimeProbe`.
//! -   The `collections` module contains `FeatureSet`, its iterator, and its scope guard.
//! -   The `registry` module contains the `feature_list!` macro, and a selection of registries declared with it.
//! -   The `utils` module contains the low-level types upon which `FeatureSet` is built.
//!
//!
//! #   Sentinel
//!
//! The absence of a feature, "none", is expressed as `None`. It is never part of a set, yet every set "has" it, and
//! combining it, or removing it, is a no-op. It renders as `none`.
//!
//!
//! #   Capacity
//!
//! A `FeatureSet` is a single `u64`, hence a registry is limited to 64 features. This is checked at compile-time.
//!
//!
//! #   Runtime detection
//!
//! This crate does not detect features at runtime. `FeatureSet::infer_from_runtime` always returns an empty set, and a
//! platform layer may plug in its own detection through `RuntimeProbe`.
//!
//!
//! #   Examples
//!
//! ```
//! use cpu_feature_set::{collections::FeatureSet, registry::aarch64::Aarch64Feature as A};
//!
//! let required = FeatureSet::from([A::Neon, A::DotProduct]);
//! let available = A::legacy_baseline().with(A::DotProduct);
//!
//! assert!(available.has(required));
//! assert_eq!("FP, NEON, DotProduct", available.to_string());
//! ```

#![cfg_attr(not(test), no_std)]
//  Lints
#![deny(missing_docs)]
//  This author prefers to keep its test modules close to what they are testing.
#![allow(clippy::items_after_test_module)]

pub mod api;
pub mod collections;
pub mod registry;
pub mod utils;
