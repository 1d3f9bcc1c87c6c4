//! # Frame Addressing Configuration
//!
//! ## Purpose
//!
//! Collects everything needed to configure the UDP and RDMX frame templates:
//! MAC addresses, IPv4 addresses, UDP ports and the RDMX target address. The
//! defaults reproduce the classic demo setup (a broadcast frame from
//! `10.11.12.1:1234` to `10.11.12.255:5678`).
//!
//! ## Main components
//!
//! - `Addressing`: the configuration value.
//! - `parse_mac()`, `parse_target_addr()`: value parsers used by the CLI.

use rawframe::RDMX_DEFAULT_DST_PORT;
use std::net::Ipv4Addr;
use std::str::FromStr as _;

pub const DEFAULT_INTERFACE: &str = "enp3s0";
pub const DEFAULT_PAYLOAD_LEN: u16 = 256;
pub const DEFAULT_SRC_MAC: [u8; 6] = [0xC4, 0x00, 0xAD, 0x3A, 0xD3, 0x6B];
pub const DEFAULT_TARGET_ADDR: u64 = 0x1234_5678_9ABC_DEF0;

/// Addressing shared by every frame sent in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addressing {
    pub src_mac: [u8; 6],
    /// `None` sends to the broadcast MAC.
    pub dst_mac: Option<[u8; 6]>,
    pub src_ip: Ipv4Addr,
    pub dst_ip: Ipv4Addr,
    pub src_port: u16,
    /// Destination port of plain UDP frames.
    pub dst_port: u16,
    /// Destination port of RDMX frames.
    pub rdmx_port: u16,
    pub target_addr: u64,
}

impl Default for Addressing {
    fn default() -> Self {
        Self {
            src_mac: DEFAULT_SRC_MAC,
            dst_mac: None,
            src_ip: Ipv4Addr::new(10, 11, 12, 1),
            dst_ip: Ipv4Addr::new(10, 11, 12, 255),
            src_port: 1234,
            dst_port: 5678,
            rdmx_port: RDMX_DEFAULT_DST_PORT,
            target_addr: DEFAULT_TARGET_ADDR,
        }
    }
}

/// Parses a MAC address like `c4:00:ad:3a:d3:6b`.
pub fn parse_mac(s: &str) -> Result<[u8; 6], String> {
    eui48::MacAddress::from_str(s)
        .map(|mac| mac.to_array())
        .map_err(|e| format!("invalid MAC address {s:?}: {e}"))
}

/// Parses a 64-bit target address, either decimal or `0x`-prefixed hex.
/// Underscores are allowed as digit separators.
pub fn parse_target_addr(s: &str) -> Result<u64, String> {
    let digits: String = s.trim().chars().filter(|c| *c != '_').collect();
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse(),
    };
    parsed.map_err(|e| format!("invalid target address {s:?}: {e}"))
}
