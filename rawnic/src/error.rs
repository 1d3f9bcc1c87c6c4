//! # Transmit Port Errors
//!
//! ## Purpose
//!
//! `NicError` reports why opening the raw socket or sending a frame failed.
//! Privilege failures and unknown interfaces get their own variants so the
//! caller can tell them apart from other OS errors.
//!
//! ## Main components
//!
//! - `NicError`: the error type, convertible to and from `io::Error`.
//! - `NicError::last_os_error()`: classifies `errno` after a failed call.

use std::{fmt, io};

/// Errors reported by the raw transmit port.
#[derive(Debug)]
pub enum NicError {
    /// No network interface with this name exists.
    InterfaceNotFound(String),
    /// The raw socket could not be opened for lack of privileges
    /// (`CAP_NET_RAW` is required).
    PermissionDenied(io::Error),
    /// The frame is too short to carry an Ethernet header.
    FrameTooShort(usize),
    /// The kernel accepted only part of the frame.
    ShortWrite { sent: usize, expected: usize },
    /// Any other OS level failure.
    Io(io::Error),
}

impl fmt::Display for NicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NicError::InterfaceNotFound(name) => write!(f, "network interface {name:?} not found"),
            NicError::PermissionDenied(e) => write!(f, "permission denied: {e}"),
            NicError::FrameTooShort(len) => {
                write!(f, "frame of {len} bytes is shorter than an Ethernet header")
            }
            NicError::ShortWrite { sent, expected } => {
                write!(f, "short write: sent {sent} of {expected} bytes")
            }
            NicError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for NicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NicError::PermissionDenied(e) | NicError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl NicError {
    /// Classifies the last OS error, splitting out privilege failures.
    pub(crate) fn last_os_error() -> Self {
        let e = io::Error::last_os_error();
        match e.raw_os_error() {
            Some(libc::EPERM | libc::EACCES) => NicError::PermissionDenied(e),
            _ => NicError::Io(e),
        }
    }
}

impl From<io::Error> for NicError {
    fn from(e: io::Error) -> Self {
        NicError::Io(e)
    }
}

impl From<NicError> for io::Error {
    fn from(e: NicError) -> Self {
        let kind = match &e {
            NicError::InterfaceNotFound(_) => io::ErrorKind::NotFound,
            NicError::PermissionDenied(_) => io::ErrorKind::PermissionDenied,
            NicError::FrameTooShort(_) => io::ErrorKind::InvalidInput,
            NicError::ShortWrite { .. } => io::ErrorKind::WriteZero,
            NicError::Io(_) => io::ErrorKind::Other,
        };
        match e {
            NicError::Io(inner) => inner,
            e => io::Error::new(kind, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_kinds() {
        let e: io::Error = NicError::InterfaceNotFound("eth9".into()).into();
        assert_eq!(e.kind(), io::ErrorKind::NotFound);
        assert!(e.to_string().contains("eth9"));

        let e: io::Error = NicError::ShortWrite { sent: 10, expected: 42 }.into();
        assert_eq!(e.kind(), io::ErrorKind::WriteZero);
        assert_eq!(e.to_string(), "short write: sent 10 of 42 bytes");

        let denied = NicError::PermissionDenied(io::Error::from_raw_os_error(libc::EPERM));
        assert!(std::error::Error::source(&denied).is_some());
        let e: io::Error = denied.into();
        assert_eq!(e.kind(), io::ErrorKind::PermissionDenied);
    }
}
