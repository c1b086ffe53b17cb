//! Hamming-coded on-off keying for a single GPIO output.
//!
//! Turns a byte into timed high/low pulses on one digital output line. The
//! payload is expanded into a Hamming code word so a receiver can correct
//! a single flipped bit, and every frame is bracketed by a fixed sync
//! pattern held at twice the payload bit duration, so frame boundaries are
//! recognizable by timing alone.
//!
//! # References
//!
//! - <https://en.wikipedia.org/wiki/Hamming_code>
//! - <https://en.wikipedia.org/wiki/On%E2%80%93off_keying>

pub mod bits;
pub mod frame;
pub mod hamming;
pub mod line;
pub mod pulse;
pub mod session;
