use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};

use tracing::debug;

use crate::core::{
    is_valid_bam_frame_interval, BamFrameInterval, Error, NetworkLimits, Result, StackLimits,
};

// Fields are independent of each other, so no cross-field ordering is needed.
const ORDERING: Ordering = Ordering::Relaxed;

/// Live store of the tunable stack limits
///
/// Every accessor takes `&self`, so one instance can be shared behind an
/// `Arc` between the thread that configures the stack and the threads that
/// read limits on their hot paths. Each field is its own atomic; reads never
/// block and never observe a torn value.
#[derive(Debug)]
pub struct CanNetworkConfiguration {
    /// Caps concurrent multi-packet transport sessions
    max_transport_protocol_sessions: AtomicU32,
    /// Minimum spacing between BAM data frames, always inside the allowed bounds
    min_bam_frame_interval_ms: AtomicU32,
    /// Caps ETP data frames batched per EDPO
    max_etp_frames_per_edpo: AtomicU8,
    /// Caps frames the network management protocol sends per update
    max_network_manager_frames_per_update: AtomicU8,
}

impl CanNetworkConfiguration {
    /// Creates a new store holding the default limits
    pub fn new() -> Self {
        Self::from_limits(&StackLimits::default())
    }

    /// Creates a new store initialized from `limits`
    pub fn from_limits(limits: &StackLimits) -> Self {
        debug!(?limits, "creating CAN network configuration");
        CanNetworkConfiguration {
            max_transport_protocol_sessions: AtomicU32::new(limits.max_transport_protocol_sessions),
            min_bam_frame_interval_ms: AtomicU32::new(limits.min_bam_frame_interval.as_millis()),
            max_etp_frames_per_edpo: AtomicU8::new(limits.max_etp_frames_per_edpo),
            max_network_manager_frames_per_update: AtomicU8::new(
                limits.max_network_manager_frames_per_update,
            ),
        }
    }

    /// Overwrites every field with the values in `limits`
    ///
    /// Fields are stored one at a time; a concurrent reader may see some
    /// fields updated before others.
    pub fn apply(&self, limits: &StackLimits) {
        debug!(?limits, "applying CAN network configuration");
        self.set_max_transport_protocol_sessions(limits.max_transport_protocol_sessions);
        self.min_bam_frame_interval_ms
            .store(limits.min_bam_frame_interval.as_millis(), ORDERING);
        self.set_max_etp_frames_per_edpo(limits.max_etp_frames_per_edpo);
        self.set_max_network_manager_frames_per_update(limits.max_network_manager_frames_per_update);
    }

    /// Reads every field into a plain record
    pub fn snapshot(&self) -> StackLimits {
        StackLimits {
            max_transport_protocol_sessions: self.get_max_transport_protocol_sessions(),
            min_bam_frame_interval: self.min_bam_frame_interval(),
            max_etp_frames_per_edpo: self.get_max_etp_frames_per_edpo(),
            max_network_manager_frames_per_update: self.get_max_network_manager_frames_per_update(),
        }
    }

    /// Sets the maximum number of concurrent transport protocol sessions
    #[inline]
    pub fn set_max_transport_protocol_sessions(&self, value: u32) {
        self.max_transport_protocol_sessions.store(value, ORDERING);
    }

    /// Returns the maximum number of concurrent transport protocol sessions
    #[inline]
    pub fn get_max_transport_protocol_sessions(&self) -> u32 {
        self.max_transport_protocol_sessions.load(ORDERING)
    }

    /// Sets the minimum spacing between BAM data frames
    ///
    /// Values outside `[10, 200]` ms are ignored and the previous value is
    /// kept. Nothing is reported; read the value back, or use
    /// [`try_set_min_bam_frame_interval_ms`](Self::try_set_min_bam_frame_interval_ms),
    /// to find out whether the write took effect.
    #[inline]
    pub fn set_min_bam_frame_interval_ms(&self, value: u32) {
        if is_valid_bam_frame_interval(value) {
            self.min_bam_frame_interval_ms.store(value, ORDERING);
        }
    }

    /// Sets the minimum spacing between BAM data frames, reporting rejection
    ///
    /// Same rule as [`set_min_bam_frame_interval_ms`](Self::set_min_bam_frame_interval_ms);
    /// an out-of-range value leaves the stored value unchanged.
    pub fn try_set_min_bam_frame_interval_ms(&self, value: u32) -> Result<()> {
        if !is_valid_bam_frame_interval(value) {
            return Err(Error::bam_interval_out_of_range(value));
        }
        self.min_bam_frame_interval_ms.store(value, ORDERING);
        Ok(())
    }

    /// Returns the minimum spacing between BAM data frames, in milliseconds
    #[inline]
    pub fn get_min_bam_frame_interval_ms(&self) -> u32 {
        self.min_bam_frame_interval_ms.load(ORDERING)
    }

    /// Returns the minimum spacing between BAM data frames
    pub fn min_bam_frame_interval(&self) -> BamFrameInterval {
        let ms = self.get_min_bam_frame_interval_ms();
        debug_assert!(is_valid_bam_frame_interval(ms), "stored BAM interval {} ms", ms);
        BamFrameInterval::new_unchecked(ms)
    }

    /// Sets the maximum number of ETP data frames per EDPO
    #[inline]
    pub fn set_max_etp_frames_per_edpo(&self, value: u8) {
        self.max_etp_frames_per_edpo.store(value, ORDERING);
    }

    /// Returns the maximum number of ETP data frames per EDPO
    #[inline]
    pub fn get_max_etp_frames_per_edpo(&self) -> u8 {
        self.max_etp_frames_per_edpo.load(ORDERING)
    }

    /// Sets the network management frame budget per update
    #[inline]
    pub fn set_max_network_manager_frames_per_update(&self, value: u8) {
        self.max_network_manager_frames_per_update.store(value, ORDERING);
    }

    /// Returns the network management frame budget per update
    #[inline]
    pub fn get_max_network_manager_frames_per_update(&self) -> u8 {
        self.max_network_manager_frames_per_update.load(ORDERING)
    }
}

impl Default for CanNetworkConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

impl From<StackLimits> for CanNetworkConfiguration {
    fn from(limits: StackLimits) -> Self {
        Self::from_limits(&limits)
    }
}

impl NetworkLimits for CanNetworkConfiguration {
    fn max_transport_protocol_sessions(&self) -> u32 {
        self.get_max_transport_protocol_sessions()
    }

    fn min_bam_frame_interval_ms(&self) -> u32 {
        self.get_min_bam_frame_interval_ms()
    }

    fn max_etp_frames_per_edpo(&self) -> u8 {
        self.get_max_etp_frames_per_edpo()
    }

    fn max_network_manager_frames_per_update(&self) -> u8 {
        self.get_max_network_manager_frames_per_update()
    }
}
