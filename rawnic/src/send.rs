//! # Frame Transmission Trait
//!
//! ## Purpose
//!
//! Frame builders should not care where their frames go. The `Transmit`
//! trait is the seam between code that assembles frames and the raw socket
//! that puts them on the wire, so the same driver code can run against
//! `RawNic` or against an in-memory sink in tests.
//!
//! ## Main components
//!
//! - `Transmit`: hands one complete frame to a sink.
//! - `impl Transmit for RawNic`: sends the frame through the raw socket.

use crate::error::NicError;
use crate::nic::RawNic;

/// A sink for complete Ethernet frames.
///
/// # Example
///
/// ```rust,no_run
/// use rawnic::{RawNic, Transmit};
/// let mut nic = RawNic::connect("eth0")?;
/// nic.transmit(&[0xFF; 60])?;
/// # Ok::<(), rawnic::NicError>(())
/// ```
pub trait Transmit {
    /// Transmits `frame` verbatim. A frame is never retried.
    fn transmit(&mut self, frame: &[u8]) -> Result<(), NicError>;
}

impl Transmit for RawNic {
    fn transmit(&mut self, frame: &[u8]) -> Result<(), NicError> {
        self.send(frame).map(|_| ())
    }
}

impl<T: Transmit + ?Sized> Transmit for &mut T {
    fn transmit(&mut self, frame: &[u8]) -> Result<(), NicError> {
        (**self).transmit(frame)
    }
}
