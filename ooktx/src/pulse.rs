//! Timed pulses on the output line.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::{
    bits::BitString,
    line::{
        Level,
        OutputLine,
    },
};

/// How a drive ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Every bit went out and its hold elapsed.
    Complete,
    /// Cancellation arrived first. The line stays at the last driven level
    /// and no further bits are sent.
    Interrupted,
}

/// Drives `bits` onto `line`, holding each level for `hold`.
///
/// `1` drives the line high, `0` drives it low. The hold after the final
/// bit elapses in full before this returns, and the line is left at the
/// level of that final bit: returning it to idle is the caller's job.
///
/// Cancellation is checked before every state change and also wakes a hold
/// that is already in progress, so interruption never waits for a running
/// pulse. A line error aborts immediately and takes priority over
/// cancellation.
pub async fn drive<L>(
    line: &mut L,
    cancel: &CancellationToken,
    bits: &BitString,
    hold: Duration,
) -> Result<Progress, L::Error>
where
    L: OutputLine,
{
    for bit in bits.bits() {
        if cancel.is_cancelled() {
            return Ok(Progress::Interrupted);
        }

        let level = Level::from_bit(bit);
        line.set(level)?;
        tracing::debug!(%level, "sending");

        tokio::select! {
            _ = cancel.cancelled() => return Ok(Progress::Interrupted),
            _ = sleep(hold) => {}
        }
    }

    Ok(Progress::Complete)
}
