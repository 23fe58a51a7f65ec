//! Core types for the CAN network configuration
//!
//! This module contains the bounds, defaults, error type and plain data
//! records shared by the live store and its consumers.

pub mod error;
pub mod types;
pub mod serde;

pub use self::error::{Error, Result};
pub use self::types::{BamFrameInterval, NetworkLimits, StackLimits};

/// Shortest allowed spacing between BAM data frames, in milliseconds
pub const MIN_BAM_FRAME_INTERVAL_MS: u32 = 10;

/// Longest allowed spacing between BAM data frames, in milliseconds
pub const MAX_BAM_FRAME_INTERVAL_MS: u32 = 200;

/// Default number of concurrent transport protocol sessions
pub const DEFAULT_MAX_TRANSPORT_PROTOCOL_SESSIONS: u32 = 4;

/// Default spacing between BAM data frames, in milliseconds
pub const DEFAULT_MIN_BAM_FRAME_INTERVAL_MS: u32 = 50;

/// Default number of ETP data frames announced per EDPO
pub const DEFAULT_MAX_ETP_FRAMES_PER_EDPO: u8 = u8::MAX;

/// Default frame budget for the network management protocol per update
pub const DEFAULT_MAX_NETWORK_MANAGER_FRAMES_PER_UPDATE: u8 = u8::MAX;

/// Returns whether `value` is an acceptable BAM frame interval
#[inline]
pub const fn is_valid_bam_frame_interval(value: u32) -> bool {
    value >= MIN_BAM_FRAME_INTERVAL_MS && value <= MAX_BAM_FRAME_INTERVAL_MS
}
