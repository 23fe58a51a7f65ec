use thiserror::Error;

use super::{MAX_BAM_FRAME_INTERVAL_MS, MIN_BAM_FRAME_INTERVAL_MS};

/// Errors reported by the checked configuration paths
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("BAM frame interval {value} ms is outside [{min}, {max}] ms")]
    BamIntervalOutOfRange { value: u32, min: u32, max: u32 },
}

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new out-of-range BAM interval error
    pub fn bam_interval_out_of_range(value: u32) -> Self {
        Error::BamIntervalOutOfRange {
            value,
            min: MIN_BAM_FRAME_INTERVAL_MS,
            max: MAX_BAM_FRAME_INTERVAL_MS,
        }
    }
}
