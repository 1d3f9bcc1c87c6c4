//! # Ethernet/IPv4/UDP Frame Header Template
//!
//! ## Purpose
//!
//! Builds the 42-byte Ethernet II + IPv4 + UDP header needed to put a UDP
//! datagram directly on the wire through a raw socket. The addressing is
//! configured once; afterwards the template is stamped in front of every
//! outgoing payload.
//!
//! ## How it works
//!
//! `UdpFrameTemplate` keeps a ready-made header image with sensible defaults
//! (broadcast destination MAC, TTL 64, don't fragment, UDP checksum disabled).
//! `write_header` copies it into the caller's buffer and fills in the lengths
//! and the IPv4 checksum for the given payload size.
//!
//! ## Main components
//!
//! - `UdpFrameTemplate`: the reusable header template.
//! - `write_header()`: stamps a header into a caller-supplied buffer.
//! - `header()`: returns a freshly stamped header by value.

use crate::layout::{UDP_FRAME_HDR_LEN, UDP_HDR_LEN};
use crate::template::FrameTemplate;
use std::net::Ipv4Addr;

/// A reusable Ethernet/IPv4/UDP frame header.
///
/// # Example
///
/// ```rust
/// use std::net::Ipv4Addr;
/// use rawframe::{UDP_FRAME_HDR_LEN, UdpFrameTemplate};
///
/// let mut tpl = UdpFrameTemplate::new();
/// tpl.set_mac_addrs([0xC4, 0x00, 0xAD, 0x3A, 0xD3, 0x6B], None);
/// tpl.set_ip_addrs(Ipv4Addr::new(10, 11, 12, 1), Ipv4Addr::new(10, 11, 12, 255));
/// tpl.set_udp_ports(1234, 5678);
///
/// let payload = b"hello";
/// let mut frame = [0u8; UDP_FRAME_HDR_LEN + 5];
/// tpl.write_header(&mut frame, payload.len() as u16);
/// frame[UDP_FRAME_HDR_LEN..].copy_from_slice(payload);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UdpFrameTemplate {
    tpl: FrameTemplate<UDP_FRAME_HDR_LEN>,
}

impl Default for UdpFrameTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl UdpFrameTemplate {
    /// Creates a template with all constant header fields filled in.
    ///
    /// MAC and IP addresses are zero except the destination MAC which is the
    /// broadcast address. Ports are zero.
    pub fn new() -> Self {
        Self {
            tpl: FrameTemplate::new(),
        }
    }

    /// Sets the source and destination MAC addresses.
    ///
    /// If `dst_mac` is `None` the frame goes to the broadcast address
    /// `FF:FF:FF:FF:FF:FF`.
    pub fn set_mac_addrs(&mut self, src_mac: [u8; 6], dst_mac: Option<[u8; 6]>) {
        self.tpl.set_mac_addrs(src_mac, dst_mac);
    }

    /// Sets the source and destination IPv4 addresses.
    pub fn set_ip_addrs(&mut self, src_ip: Ipv4Addr, dst_ip: Ipv4Addr) {
        self.tpl.set_ip_addrs(src_ip, dst_ip);
    }

    /// Sets the source and destination UDP ports.
    pub fn set_udp_ports(&mut self, src_port: u16, dst_port: u16) {
        self.tpl.set_udp_ports(src_port, dst_port);
    }

    /// Writes a complete Ethernet/IPv4/UDP header into `dest[..42]`.
    ///
    /// The IPv4 total length becomes `28 + payload_len`, the UDP length
    /// `8 + payload_len`, and the IPv4 checksum is recomputed. The template
    /// itself is left untouched, so this can be called any number of times.
    ///
    /// The payload is expected right after the header; making room for it is
    /// up to the caller. Lengths are 16-bit and wrap for payloads above
    /// `UDP_MAX_PAYLOAD`.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is shorter than `UDP_FRAME_HDR_LEN` bytes.
    pub fn write_header(&self, dest: &mut [u8], payload_len: u16) {
        let udp_len = payload_len.wrapping_add(UDP_HDR_LEN as u16);
        self.tpl.stamp(dest, udp_len);
    }

    /// Returns a freshly stamped header for a payload of `payload_len` bytes.
    pub fn header(&self, payload_len: u16) -> [u8; UDP_FRAME_HDR_LEN] {
        let mut hdr = [0u8; UDP_FRAME_HDR_LEN];
        self.write_header(&mut hdr, payload_len);
        hdr
    }

    /// Returns the stored template. Lengths and checksum are zero here.
    pub fn as_bytes(&self) -> &[u8; UDP_FRAME_HDR_LEN] {
        self.tpl.as_bytes()
    }
}
