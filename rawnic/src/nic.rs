//! # Raw Transmit Port
//!
//! ## Purpose
//!
//! `RawNic` owns a raw `AF_PACKET` socket tied to one named network interface
//! and puts complete, caller-built Ethernet frames on the wire unchanged.
//!
//! ## How it works
//!
//! `connect` resolves the interface index first, so a wrong interface name is
//! reported as such even without privileges, and then opens
//! `socket(AF_PACKET, SOCK_RAW, IPPROTO_RAW)`. Each `send` builds a
//! `sockaddr_ll` from the interface index and the destination MAC found in
//! the first six bytes of the frame and hands the frame to `sendto`.
//! Failures are reported to the caller; nothing is retried.
//!
//! ## Main components
//!
//! - `RawNic::connect()`: opens the socket for a named interface.
//! - `RawNic::send()`: transmits one frame verbatim.

use crate::error::NicError;
use crate::interface::if_index_by_name;
use std::os::fd::{AsRawFd as _, FromRawFd as _, OwnedFd};

const ETH_ALEN: usize = 6;
const ETH_HLEN: usize = 14;

/// A raw socket bound to a single network interface.
///
/// The socket is closed when the `RawNic` is dropped.
#[derive(Debug)]
pub struct RawNic {
    fd: OwnedFd,
    if_index: u32,
    if_name: String,
}

impl RawNic {
    /// Opens a raw socket for sending frames on the interface `if_name`.
    ///
    /// # Errors
    ///
    /// - `NicError::InterfaceNotFound` if there is no such interface.
    /// - `NicError::PermissionDenied` if the process lacks `CAP_NET_RAW`.
    /// - `NicError::Io` for any other socket failure.
    pub fn connect(if_name: &str) -> Result<Self, NicError> {
        let if_index = if_index_by_name(if_name).inspect_err(|e| {
            log::error!("Failed to resolve interface {if_name}: {e}");
        })?;

        let fd = unsafe {
            let fd = libc::socket(
                libc::AF_PACKET,
                libc::SOCK_RAW | libc::SOCK_CLOEXEC,
                libc::IPPROTO_RAW,
            );
            if fd < 0 {
                let e = NicError::last_os_error();
                log::error!("Failed to open raw socket for {if_name}: {e}");
                return Err(e);
            }
            OwnedFd::from_raw_fd(fd)
        };

        log::debug!("raw socket {} opened on {if_name} (index {if_index})", fd.as_raw_fd());

        Ok(Self {
            fd,
            if_index,
            if_name: if_name.to_string(),
        })
    }

    pub fn if_index(&self) -> u32 {
        self.if_index
    }

    pub fn if_name(&self) -> &str {
        &self.if_name
    }

    /// Transmits `frame` as is and returns the number of bytes sent.
    ///
    /// The link-layer destination is taken from the frame's destination MAC.
    ///
    /// # Errors
    ///
    /// - `NicError::FrameTooShort` if `frame` cannot hold an Ethernet header.
    /// - `NicError::ShortWrite` if the kernel sent fewer bytes than given.
    /// - `NicError::Io` (or `PermissionDenied`) if `sendto` fails.
    pub fn send(&self, frame: &[u8]) -> Result<usize, NicError> {
        if frame.len() < ETH_HLEN {
            return Err(NicError::FrameTooShort(frame.len()));
        }

        let mut addr: libc::sockaddr_ll = unsafe { std::mem::zeroed() };
        addr.sll_family = libc::AF_PACKET as libc::c_ushort;
        addr.sll_ifindex = self.if_index as libc::c_int;
        addr.sll_halen = ETH_ALEN as libc::c_uchar;
        addr.sll_addr[..ETH_ALEN].copy_from_slice(&frame[..ETH_ALEN]);

        let sent = unsafe {
            libc::sendto(
                self.fd.as_raw_fd(),
                frame.as_ptr() as *const libc::c_void,
                frame.len(),
                0,
                &addr as *const _ as *const libc::sockaddr,
                size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            )
        };

        if sent < 0 {
            let e = NicError::last_os_error();
            log::error!("sendto on {} failed: {e}", self.if_name);
            return Err(e);
        }
        let sent = sent as usize;
        if sent < frame.len() {
            log::error!("short write on {}: {sent} of {} bytes", self.if_name, frame.len());
            return Err(NicError::ShortWrite {
                sent,
                expected: frame.len(),
            });
        }
        log::trace!("sent {sent} bytes on {}", self.if_name);
        Ok(sent)
    }
}
