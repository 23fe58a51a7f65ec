//! CAN network configuration: tunable limits for a CAN bus protocol stack
//!
//! This library holds the small set of limits that transport protocol session
//! managers, extended transport protocol senders and the network management
//! protocol consult on their hot paths. Each limit is validated when written
//! and read without locking or allocation.
//!
//! ```
//! use can_network_config::CanNetworkConfiguration;
//!
//! let config = CanNetworkConfiguration::new();
//! config.set_min_bam_frame_interval_ms(20);
//! config.set_min_bam_frame_interval_ms(500); // out of range, ignored
//! assert_eq!(config.get_min_bam_frame_interval_ms(), 20);
//! ```
pub mod core;
pub mod network;
pub mod util;

// Re-export commonly used items
pub use self::core::{BamFrameInterval, Error, NetworkLimits, Result, StackLimits};
pub use self::network::CanNetworkConfiguration;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
