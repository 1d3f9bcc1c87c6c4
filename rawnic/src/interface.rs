//! # Network Interface Lookups
//!
//! ## Purpose
//!
//! Resolves a network interface name to the pieces of information a raw
//! sender needs: the interface index used in link-layer socket addresses and
//! the hardware (MAC) address used as the frame's source MAC.
//!
//! ## How it works
//!
//! The index comes from `if_nametoindex`. The MAC address is read with the
//! `SIOCGIFHWADDR` ioctl on a throwaway datagram socket. Neither call needs
//! elevated privileges.

use crate::error::NicError;
use std::ffi::CString;
use std::io;
use std::os::fd::{AsRawFd as _, FromRawFd as _, OwnedFd};

fn c_name(if_name: &str) -> Result<CString, NicError> {
    if if_name.is_empty() || if_name.len() >= libc::IFNAMSIZ {
        return Err(NicError::InterfaceNotFound(if_name.to_string()));
    }
    CString::new(if_name).map_err(|_| NicError::InterfaceNotFound(if_name.to_string()))
}

/// Returns the index of the network interface called `if_name`.
pub fn if_index_by_name(if_name: &str) -> Result<u32, NicError> {
    let name = c_name(if_name)?;
    let if_index = unsafe { libc::if_nametoindex(name.as_ptr()) };
    if if_index == 0 {
        let e = io::Error::last_os_error();
        return match e.raw_os_error() {
            Some(libc::ENODEV | libc::ENXIO) | None => {
                Err(NicError::InterfaceNotFound(if_name.to_string()))
            }
            _ => Err(NicError::Io(e)),
        };
    }
    log::debug!("interface {if_name} has index {if_index}");
    Ok(if_index)
}

/// Returns the MAC address of the network interface called `if_name`.
///
/// This uses the `SIOCGIFHWADDR` ioctl, so it is only meaningful for
/// interfaces with an Ethernet-like hardware address. The loopback device
/// reports all zeros.
pub fn mac_by_name(if_name: &str) -> Result<[u8; 6], NicError> {
    let name = c_name(if_name)?;
    let fd = unsafe {
        let fd = libc::socket(libc::AF_INET, libc::SOCK_DGRAM | libc::SOCK_CLOEXEC, 0);
        if fd < 0 {
            return Err(NicError::last_os_error());
        }
        OwnedFd::from_raw_fd(fd)
    };

    let mut if_req: libc::ifreq = unsafe { std::mem::zeroed() };
    for (dst, src) in if_req.ifr_name.iter_mut().zip(name.as_bytes()) {
        *dst = *src as libc::c_char;
    }

    if unsafe { libc::ioctl(fd.as_raw_fd(), libc::SIOCGIFHWADDR, &mut if_req) } < 0 {
        let e = io::Error::last_os_error();
        return match e.raw_os_error() {
            Some(libc::ENODEV) => Err(NicError::InterfaceNotFound(if_name.to_string())),
            _ => Err(NicError::Io(e)),
        };
    }

    let mut mac = [0u8; 6];
    let hw = unsafe { if_req.ifr_ifru.ifru_hwaddr.sa_data };
    for (i, v) in hw[..6].iter().enumerate() {
        mac[i] = *v as u8;
    }
    Ok(mac)
}
