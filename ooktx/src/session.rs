//! A transmission session: frames, repeats, and the idle guarantee.
//!
//! The session owns the line for its whole lifetime and steps through an
//! explicit state machine, so there is exactly one place that decides when
//! the line is forced back to idle. Both the normal end of a transmission
//! and an interruption funnel through [`SessionState::ShuttingDown`]; only
//! a line error skips it, on the grounds that the same fault would make
//! the forced write unreliable too.

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::{
    bits::BitString,
    frame::{
        self,
        FrameTimings,
    },
    line::OutputLine,
    pulse::Progress,
};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing is being driven. The line is assumed low at first entry;
    /// between repeats it rests at the last driven level.
    Idle,
    /// A frame is going out.
    Transmitting,
    /// The line is being forced back to idle.
    ShuttingDown,
    /// Final state. The line is low and nothing further runs.
    Terminated,
}

/// What a session transmits and how.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Raw payload bits, encoded fresh for every frame.
    pub payload: BitString,
    pub timings: FrameTimings,
    /// Pause between the end of one frame and the start of the next.
    /// `None` transmits the payload exactly once.
    pub repeat: Option<Duration>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError<E> {
    /// A state change failed mid-frame. The line is not forced low on
    /// this path.
    #[error("frame transmission failed")]
    Transmit(#[source] E),
    /// The final forced-low write failed, so the line may be stuck high.
    #[error("failed to return the line to idle")]
    Shutdown(#[source] E),
}

/// Transmits a payload over an output line until done or cancelled.
pub struct Session<L> {
    line: L,
    config: SessionConfig,
    cancel: CancellationToken,
}

impl<L> Session<L>
where
    L: OutputLine,
{
    pub fn new(line: L, config: SessionConfig, cancel: CancellationToken) -> Self {
        Self {
            line,
            config,
            cancel,
        }
    }

    /// Runs the session to completion.
    ///
    /// Returns once the payload has gone out (every repetition of it, if a
    /// repeat pause is configured) or the token is cancelled, whichever
    /// comes first. On both paths the final act is a forced-low write, so
    /// the line ends up idle. Only a line error ends the session without
    /// it.
    pub async fn run(mut self) -> Result<(), SessionError<L::Error>> {
        let mut state = SessionState::Idle;

        loop {
            state = match state {
                SessionState::Idle => {
                    if self.cancel.is_cancelled() {
                        SessionState::ShuttingDown
                    }
                    else {
                        SessionState::Transmitting
                    }
                }
                SessionState::Transmitting => self.transmit().await?,
                SessionState::ShuttingDown => {
                    self.line.set_low().map_err(SessionError::Shutdown)?;
                    tracing::debug!("line forced low");
                    SessionState::Terminated
                }
                SessionState::Terminated => break,
            };
        }

        Ok(())
    }

    /// One frame, then the decision where to go next: shut down when done
    /// or interrupted, back to idle after the repeat pause.
    async fn transmit(&mut self) -> Result<SessionState, SessionError<L::Error>> {
        tracing::info!("frame start");

        let progress = frame::send(
            &mut self.line,
            &self.cancel,
            &self.config.payload,
            &self.config.timings,
        )
        .await
        .map_err(SessionError::Transmit)?;

        if progress == Progress::Interrupted {
            tracing::info!("frame interrupted");
            return Ok(SessionState::ShuttingDown);
        }
        tracing::info!("frame end");

        let Some(interval) = self.config.repeat
        else {
            return Ok(SessionState::ShuttingDown);
        };

        tokio::select! {
            _ = self.cancel.cancelled() => Ok(SessionState::ShuttingDown),
            _ = sleep(interval) => Ok(SessionState::Idle),
        }
    }
}
