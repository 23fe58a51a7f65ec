use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::types::BamFrameInterval;

/// Serializes a BAM frame interval as plain milliseconds
pub fn serialize_bam_interval<S>(interval: &BamFrameInterval, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    interval.as_millis().serialize(serializer)
}

/// Deserializes a BAM frame interval from milliseconds, rejecting out-of-range values
pub fn deserialize_bam_interval<'de, D>(deserializer: D) -> Result<BamFrameInterval, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = u32::deserialize(deserializer)?;
    BamFrameInterval::new(ms).map_err(de::Error::custom)
}
