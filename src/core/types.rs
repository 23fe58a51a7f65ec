use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// Minimum spacing between BAM data frames, in milliseconds
///
/// Only values inside the allowed bounds can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BamFrameInterval(u32);

impl BamFrameInterval {
    /// Creates a new interval, refusing values outside the allowed bounds
    pub fn new(ms: u32) -> Result<Self> {
        if super::is_valid_bam_frame_interval(ms) {
            Ok(BamFrameInterval(ms))
        } else {
            Err(Error::bam_interval_out_of_range(ms))
        }
    }

    /// Returns the shortest allowed interval
    pub fn min() -> Self {
        BamFrameInterval(super::MIN_BAM_FRAME_INTERVAL_MS)
    }

    /// Returns the longest allowed interval
    pub fn max() -> Self {
        BamFrameInterval(super::MAX_BAM_FRAME_INTERVAL_MS)
    }

    /// Wraps a value already known to be inside the allowed bounds
    pub(crate) const fn new_unchecked(ms: u32) -> Self {
        BamFrameInterval(ms)
    }

    /// Returns the interval in milliseconds
    pub fn as_millis(&self) -> u32 {
        self.0
    }
}

impl Default for BamFrameInterval {
    fn default() -> Self {
        BamFrameInterval(super::DEFAULT_MIN_BAM_FRAME_INTERVAL_MS)
    }
}

impl TryFrom<u32> for BamFrameInterval {
    type Error = Error;

    fn try_from(ms: u32) -> Result<Self> {
        BamFrameInterval::new(ms)
    }
}

impl From<BamFrameInterval> for u32 {
    fn from(interval: BamFrameInterval) -> u32 {
        interval.0
    }
}

/// Read access to the stack limits
///
/// Transport protocol session managers, the extended transport protocol
/// sender and the network management updater only need these getters, so
/// they can take either the live store or a fixed [`StackLimits`].
pub trait NetworkLimits {
    /// Maximum number of concurrent transport protocol sessions
    fn max_transport_protocol_sessions(&self) -> u32;

    /// Minimum spacing between BAM data frames, in milliseconds
    fn min_bam_frame_interval_ms(&self) -> u32;

    /// Maximum number of ETP data frames per EDPO
    fn max_etp_frames_per_edpo(&self) -> u8;

    /// Maximum number of network management frames per update
    fn max_network_manager_frames_per_update(&self) -> u8;
}

/// Plain copy of every stack limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackLimits {
    /// Caps concurrent multi-packet transport sessions
    pub max_transport_protocol_sessions: u32,
    /// Minimum spacing between BAM data frames
    #[serde(rename = "min_bam_frame_interval_ms")]
    #[serde(serialize_with = "super::serde::serialize_bam_interval")]
    #[serde(deserialize_with = "super::serde::deserialize_bam_interval")]
    pub min_bam_frame_interval: BamFrameInterval,
    /// Caps ETP data frames batched per EDPO
    pub max_etp_frames_per_edpo: u8,
    /// Caps frames the network management protocol sends per update
    pub max_network_manager_frames_per_update: u8,
}

impl Default for StackLimits {
    fn default() -> Self {
        StackLimits {
            max_transport_protocol_sessions: super::DEFAULT_MAX_TRANSPORT_PROTOCOL_SESSIONS,
            min_bam_frame_interval: BamFrameInterval::default(),
            max_etp_frames_per_edpo: super::DEFAULT_MAX_ETP_FRAMES_PER_EDPO,
            max_network_manager_frames_per_update: super::DEFAULT_MAX_NETWORK_MANAGER_FRAMES_PER_UPDATE,
        }
    }
}

impl NetworkLimits for StackLimits {
    fn max_transport_protocol_sessions(&self) -> u32 {
        self.max_transport_protocol_sessions
    }

    fn min_bam_frame_interval_ms(&self) -> u32 {
        self.min_bam_frame_interval.as_millis()
    }

    fn max_etp_frames_per_edpo(&self) -> u8 {
        self.max_etp_frames_per_edpo
    }

    fn max_network_manager_frames_per_update(&self) -> u8 {
        self.max_network_manager_frames_per_update
    }
}
