//! Frame layout: a fixed sync pattern brackets the payload.
//!
//! Sync bits are held twice as long as payload bits. A receiver that knows
//! the payload bit duration can pick the frame boundaries out of the pulse
//! train by timing alone, without counting bits.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::{
    bits::BitString,
    hamming,
    line::OutputLine,
    pulse::{
        self,
        Progress,
    },
};

/// The pattern transmitted before and after every payload.
pub const SYNC_PATTERN: &str = "101";

/// [`SYNC_PATTERN`] as bits.
pub fn sync_pattern() -> BitString {
    SYNC_PATTERN.parse().expect("sync pattern is not binary")
}

/// Per-bit hold durations for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTimings {
    /// Hold for each preamble and trailer bit.
    pub sync_bit: Duration,
    /// Hold for each payload bit.
    pub payload_bit: Duration,
}

impl FrameTimings {
    /// The standard timing: sync bits hold twice the payload bit duration.
    pub fn from_payload_bit(payload_bit: Duration) -> Self {
        Self {
            sync_bit: payload_bit * 2,
            payload_bit,
        }
    }
}

/// Transmits one frame: sync pattern, payload, sync pattern again.
///
/// Each segment is Hamming-encoded before it is driven, the sync pattern
/// included. Interruption or a line error abandons the rest of the frame,
/// nothing is retried. Like [`pulse::drive`], this leaves the line at the
/// last driven level.
pub async fn send<L>(
    line: &mut L,
    cancel: &CancellationToken,
    payload: &BitString,
    timings: &FrameTimings,
) -> Result<Progress, L::Error>
where
    L: OutputLine,
{
    let sync = hamming::encode(&sync_pattern());
    let coded = hamming::encode(payload);

    for (bits, hold) in [
        (&sync, timings.sync_bit),
        (&coded, timings.payload_bit),
        (&sync, timings.sync_bit),
    ] {
        if pulse::drive(line, cancel, bits, hold).await? == Progress::Interrupted {
            return Ok(Progress::Interrupted);
        }
    }

    Ok(Progress::Complete)
}
