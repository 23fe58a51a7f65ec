//! Network-wide stack configuration
//!
//! This module holds the live, shareable store of stack limits that the
//! transport protocol, extended transport protocol and network management
//! components read on their own schedules.

pub mod configuration;

pub use self::configuration::CanNetworkConfiguration;
