//! # Shared Ethernet/IPv4/UDP Header Template
//!
//! ## Purpose
//!
//! Both the UDP and the RDMX frame headers start with the same 42 bytes of
//! Ethernet, IPv4 and UDP headers. This module holds that common part: the
//! template buffer with its defaults, the addressing setters and the stamping
//! of lengths and IPv4 checksum into a destination buffer.
//!
//! ## How it works
//!
//! `FrameTemplate<N>` owns an `N`-byte array. Construction fills in the
//! constant header fields, setters patch the addressing fields in place, and
//! `stamp` copies the array into the caller's buffer before writing the
//! per-frame fields there. The stored template is never touched by stamping.

use crate::byte_order::{get_be16, put_be16};
use crate::checksum::ipv4_checksum;
use crate::layout::*;
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameTemplate<const N: usize> {
    frame: [u8; N],
}

impl<const N: usize> FrameTemplate<N> {
    pub(crate) fn new() -> Self {
        let mut frame = [0u8; N];

        frame[ETH_DST_MAC_OFF..ETH_DST_MAC_OFF + 6].copy_from_slice(&BROADCAST_MAC);
        put_be16(&mut frame, ETH_TYPE_OFF, ETHERTYPE_IPV4);

        frame[IPV4_VERSION_OFF] = IPV4_VERSION_IHL;
        frame[IPV4_DSF_OFF] = 0;
        put_be16(&mut frame, IPV4_ID_OFF, IPV4_DEFAULT_ID);
        put_be16(&mut frame, IPV4_FLAGS_OFF, IPV4_FLAG_DONT_FRAGMENT);
        frame[IPV4_TTL_OFF] = IPV4_DEFAULT_TTL;
        frame[IPV4_PROTOCOL_OFF] = IPPROTO_UDP;

        // UDP checksum stays disabled
        put_be16(&mut frame, UDP_CHECKSUM_OFF, 0);

        Self { frame }
    }

    pub(crate) fn as_bytes(&self) -> &[u8; N] {
        &self.frame
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8; N] {
        &mut self.frame
    }

    pub(crate) fn set_mac_addrs(&mut self, src: [u8; 6], dst: Option<[u8; 6]>) {
        self.frame[ETH_SRC_MAC_OFF..ETH_SRC_MAC_OFF + 6].copy_from_slice(&src);
        self.frame[ETH_DST_MAC_OFF..ETH_DST_MAC_OFF + 6]
            .copy_from_slice(&dst.unwrap_or(BROADCAST_MAC));
    }

    pub(crate) fn set_ip_addrs(&mut self, src: Ipv4Addr, dst: Ipv4Addr) {
        self.frame[IPV4_SRC_OFF..IPV4_SRC_OFF + 4].copy_from_slice(&src.octets());
        self.frame[IPV4_DST_OFF..IPV4_DST_OFF + 4].copy_from_slice(&dst.octets());
    }

    pub(crate) fn set_udp_ports(&mut self, src_port: u16, dst_port: u16) {
        put_be16(&mut self.frame, UDP_SRC_PORT_OFF, src_port);
        put_be16(&mut self.frame, UDP_DST_PORT_OFF, dst_port);
    }

    /// Copies the template into `dest[..N]` and fills in both length fields
    /// and the IPv4 checksum. `udp_len` covers everything after the IPv4
    /// header. Returns the stamped header part of `dest`.
    ///
    /// Panics if `dest` is shorter than `N` bytes.
    pub(crate) fn stamp<'a>(&self, dest: &'a mut [u8], udp_len: u16) -> &'a mut [u8] {
        let hdr = &mut dest[..N];
        hdr.copy_from_slice(&self.frame);

        put_be16(hdr, IPV4_TOTAL_LEN_OFF, udp_len.wrapping_add(IPV4_HDR_LEN as u16));
        put_be16(hdr, UDP_LEN_OFF, udp_len);

        let mut ip_hdr = [0u8; IPV4_HDR_LEN];
        ip_hdr.copy_from_slice(&hdr[IPV4_OFF..IPV4_OFF + IPV4_HDR_LEN]);
        put_be16(hdr, IPV4_CHECKSUM_OFF, ipv4_checksum(&ip_hdr));
        hdr
    }

    fn ip_at(&self, off: usize) -> Ipv4Addr {
        let f = &self.frame;
        Ipv4Addr::new(f[off], f[off + 1], f[off + 2], f[off + 3])
    }
}

impl<const N: usize> fmt::Debug for FrameTemplate<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameTemplate")
            .field("len", &N)
            .field("dst_mac", &&self.frame[ETH_DST_MAC_OFF..ETH_DST_MAC_OFF + 6])
            .field("src_mac", &&self.frame[ETH_SRC_MAC_OFF..ETH_SRC_MAC_OFF + 6])
            .field("src_ip", &self.ip_at(IPV4_SRC_OFF))
            .field("dst_ip", &self.ip_at(IPV4_DST_OFF))
            .field("src_port", &get_be16(&self.frame, UDP_SRC_PORT_OFF))
            .field("dst_port", &get_be16(&self.frame, UDP_DST_PORT_OFF))
            .finish()
    }
}
