use std::sync::Arc;
use std::thread;
use std::time::Duration;

use can_network_config::util::init_tracing;
use can_network_config::{BamFrameInterval, CanNetworkConfiguration, NetworkLimits, StackLimits};
use tracing::{info, warn, Level};

/// Stand-in for a transport protocol sender pacing BAM data frames
fn send_bam_frames(limits: &impl NetworkLimits, frames: usize) {
    for frame in 0..frames {
        let spacing = limits.min_bam_frame_interval_ms();
        info!(frame, spacing_ms = spacing, "sending BAM data frame");
        thread::sleep(Duration::from_millis(u64::from(spacing)));
    }
}

fn main() {
    init_tracing(Level::DEBUG);

    // Limits chosen by the stack owner at construction time
    let limits = StackLimits {
        max_transport_protocol_sessions: 8,
        min_bam_frame_interval: BamFrameInterval::min(),
        ..Default::default()
    };
    let config = Arc::new(CanNetworkConfiguration::from_limits(&limits));

    let reader = {
        let config = Arc::clone(&config);
        thread::spawn(move || send_bam_frames(&*config, 10))
    };

    thread::sleep(Duration::from_millis(30));
    config.set_min_bam_frame_interval_ms(5);
    info!(
        spacing_ms = config.get_min_bam_frame_interval_ms(),
        "requested 5 ms, value after write"
    );

    if let Err(e) = config.try_set_min_bam_frame_interval_ms(250) {
        warn!("rejected: {}", e);
    }
    config.set_min_bam_frame_interval_ms(40);

    if reader.join().is_err() {
        warn!("BAM sender thread panicked");
    }

    info!(limits = ?config.snapshot(), "final limits");
}
