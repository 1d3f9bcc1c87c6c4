//! # Ethernet/IPv4/UDP/RDMX Frame Header Template
//!
//! ## Purpose
//!
//! RDMX frames are UDP frames followed by a 22-byte extension header that
//! tells the receiver where to place the payload. This module builds the
//! resulting 64-byte frame header.
//!
//! ## How it works
//!
//! The Ethernet/IPv4/UDP part is handled exactly like `UdpFrameTemplate`. On
//! top of it the template carries the RDMX magic number and a zeroed reserved
//! area. The destination UDP port defaults to `RDMX_DEFAULT_DST_PORT`, since
//! receivers identify the payload by the RDMX header rather than by port.
//! Stamping additionally stores the 64-bit target address in network order.
//!
//! ## Main components
//!
//! - `RdmxFrameTemplate`: the reusable header template.
//! - `write_header()`: stamps a header with a target address into a buffer.
//! - `header()`: returns a freshly stamped header by value.

use crate::byte_order::{get_be16, put_be16, put_be64};
use crate::layout::{
    RDMX_DEFAULT_DST_PORT, RDMX_FRAME_HDR_LEN, RDMX_HDR_LEN, RDMX_MAGIC, RDMX_MAGIC_OFF,
    RDMX_TARGET_ADDR_OFF, UDP_DST_PORT_OFF, UDP_HDR_LEN,
};
use crate::template::FrameTemplate;
use std::net::Ipv4Addr;

/// A reusable Ethernet/IPv4/UDP/RDMX frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RdmxFrameTemplate {
    tpl: FrameTemplate<RDMX_FRAME_HDR_LEN>,
}

impl Default for RdmxFrameTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl RdmxFrameTemplate {
    /// Creates a template with all constant header fields, the RDMX magic
    /// number and the default RDMX destination port filled in.
    pub fn new() -> Self {
        let mut tpl = FrameTemplate::new();
        tpl.set_udp_ports(0, RDMX_DEFAULT_DST_PORT);
        put_be16(tpl.bytes_mut(), RDMX_MAGIC_OFF, RDMX_MAGIC);
        Self { tpl }
    }

    /// Sets the source and destination MAC addresses.
    ///
    /// If `dst_mac` is `None` the frame goes to the broadcast address.
    pub fn set_mac_addrs(&mut self, src_mac: [u8; 6], dst_mac: Option<[u8; 6]>) {
        self.tpl.set_mac_addrs(src_mac, dst_mac);
    }

    pub fn set_ip_addrs(&mut self, src_ip: Ipv4Addr, dst_ip: Ipv4Addr) {
        self.tpl.set_ip_addrs(src_ip, dst_ip);
    }

    /// Sets the source UDP port. The destination port is reset to
    /// `RDMX_DEFAULT_DST_PORT`.
    pub fn set_udp_ports(&mut self, src_port: u16) {
        self.tpl.set_udp_ports(src_port, RDMX_DEFAULT_DST_PORT);
    }

    /// Sets both UDP ports, for receivers listening on a non-default port.
    pub fn set_udp_ports_with(&mut self, src_port: u16, dst_port: u16) {
        self.tpl.set_udp_ports(src_port, dst_port);
    }

    /// Writes a complete Ethernet/IPv4/UDP/RDMX header into `dest[..64]`.
    ///
    /// The IPv4 total length becomes `50 + payload_len` and the UDP length
    /// `30 + payload_len`; the IPv4 checksum is recomputed and `target_addr`
    /// is stored in network order in the RDMX header. Lengths are 16-bit and
    /// wrap for payloads above `RDMX_MAX_PAYLOAD`.
    ///
    /// # Panics
    ///
    /// Panics if `dest` is shorter than `RDMX_FRAME_HDR_LEN` bytes.
    pub fn write_header(&self, dest: &mut [u8], payload_len: u16, target_addr: u64) {
        let udp_len = payload_len.wrapping_add((UDP_HDR_LEN + RDMX_HDR_LEN) as u16);
        let hdr = self.tpl.stamp(dest, udp_len);
        put_be64(hdr, RDMX_TARGET_ADDR_OFF, target_addr);
    }

    /// Returns a freshly stamped header for a payload of `payload_len` bytes.
    pub fn header(&self, payload_len: u16, target_addr: u64) -> [u8; RDMX_FRAME_HDR_LEN] {
        let mut hdr = [0u8; RDMX_FRAME_HDR_LEN];
        self.write_header(&mut hdr, payload_len, target_addr);
        hdr
    }

    /// Returns the stored template. Lengths, checksum and target address are
    /// zero here.
    pub fn as_bytes(&self) -> &[u8; RDMX_FRAME_HDR_LEN] {
        self.tpl.as_bytes()
    }

    pub fn dst_port(&self) -> u16 {
        get_be16(self.tpl.as_bytes(), UDP_DST_PORT_OFF)
    }
}
