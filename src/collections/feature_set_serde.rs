//  (De)Serialization of `FeatureSet`, as its raw mask.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::{api::Feature, collections::FeatureSet};

impl<F> Serialize for FeatureSet<F>
where
    F: Feature,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.into_mask())
    }
}

impl<'de, F> Deserialize<'de> for FeatureSet<F>
where
    F: Feature,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mask = u64::deserialize(deserializer)?;

        Self::from_mask(mask).map_err(D::Error::custom)
    }
}

// mod serde_tests
