//! Output lines for exercising the transmit path without hardware.

use std::{
    convert::Infallible,
    sync::{
        Arc,
        atomic::{
            AtomicUsize,
            Ordering,
        },
    },
};

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::line::{
    Level,
    OutputLine,
};

/// One state change, with the instant it was driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub level: Level,
    pub at: Instant,
}

/// Records every state change instead of touching hardware.
///
/// Clones share the same log, so a test can hand one handle to a session
/// that consumes it and inspect the transitions through another.
#[derive(Clone, Debug, Default)]
pub struct RecordingLine {
    log: Arc<Mutex<Vec<Transition>>>,
}

impl RecordingLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every state change so far, in the order it was driven.
    pub fn transitions(&self) -> Vec<Transition> {
        self.log.lock().clone()
    }

    /// The most recently driven level, if anything was driven at all.
    pub fn last_level(&self) -> Option<Level> {
        self.log.lock().last().map(|transition| transition.level)
    }

    fn record(&self, level: Level) {
        self.log.lock().push(Transition {
            level,
            at: Instant::now(),
        });
    }
}

impl OutputLine for RecordingLine {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.record(Level::High);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.record(Level::Low);
        Ok(())
    }
}

/// The error [`FailingLine`] injects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("injected line fault")]
pub struct LineFault;

/// A line whose `fail_at`-th state change (counting from zero) fails.
///
/// Changes before the fault are recorded like [`RecordingLine`] records
/// them. The failed attempt itself is counted but not recorded.
#[derive(Clone, Debug)]
pub struct FailingLine {
    inner: RecordingLine,
    fail_at: usize,
    attempts: Arc<AtomicUsize>,
}

impl FailingLine {
    pub fn new(fail_at: usize) -> Self {
        Self {
            inner: RecordingLine::new(),
            fail_at,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of state changes attempted so far, the failed one included.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// The state changes that succeeded.
    pub fn transitions(&self) -> Vec<Transition> {
        self.inner.transitions()
    }

    fn write(&mut self, level: Level) -> Result<(), LineFault> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt == self.fail_at {
            return Err(LineFault);
        }
        self.inner.record(level);
        Ok(())
    }
}

impl OutputLine for FailingLine {
    type Error = LineFault;

    fn set_high(&mut self) -> Result<(), LineFault> {
        self.write(Level::High)
    }

    fn set_low(&mut self) -> Result<(), LineFault> {
        self.write(Level::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_line_shares_its_log_across_clones() {
        let line = RecordingLine::new();
        let mut handle = line.clone();
        handle.set_high().unwrap();
        handle.set_low().unwrap();

        let levels: Vec<Level> = line
            .transitions()
            .into_iter()
            .map(|transition| transition.level)
            .collect();
        assert_eq!(levels, vec![Level::High, Level::Low]);
        assert_eq!(line.last_level(), Some(Level::Low));
    }

    #[test]
    fn failing_line_fails_the_configured_attempt() {
        let mut line = FailingLine::new(1);
        assert_eq!(line.set_high(), Ok(()));
        assert_eq!(line.set_low(), Err(LineFault));
        assert_eq!(line.attempts(), 2);
        assert_eq!(line.transitions().len(), 1);
    }
}
