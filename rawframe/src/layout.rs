//! # Wire Layout of the Frame Headers
//!
//! ## Purpose
//!
//! This module pins down the byte layout shared by the UDP and RDMX frame
//! templates. Headers are kept as plain byte arrays, so every field is
//! addressed by its absolute offset from the start of the Ethernet frame.
//!
//! ## How it works
//!
//! Header sizes are declared once and the combined frame header sizes are
//! derived from them. `static_assertions` checks at compile time that the
//! derived sizes match the 42-byte and 64-byte frame headers put on the wire.
//!
//! ## Main components
//!
//! - Header sizes: `ETH_HDR_LEN`, `IPV4_HDR_LEN`, `UDP_HDR_LEN`, `RDMX_HDR_LEN`.
//! - Frame header sizes: `UDP_FRAME_HDR_LEN`, `RDMX_FRAME_HDR_LEN`.
//! - Field offsets inside the frame (`*_OFF`) and default field values.

use static_assertions::const_assert_eq;

pub const ETH_HDR_LEN: usize = 14;
pub const IPV4_HDR_LEN: usize = 20;
pub const UDP_HDR_LEN: usize = 8;
/// magic (2) + target address (8) + reserved (12)
pub const RDMX_HDR_LEN: usize = 22;

/// Ethernet + IPv4 + UDP
pub const UDP_FRAME_HDR_LEN: usize = ETH_HDR_LEN + IPV4_HDR_LEN + UDP_HDR_LEN;
/// Ethernet + IPv4 + UDP + RDMX
pub const RDMX_FRAME_HDR_LEN: usize = UDP_FRAME_HDR_LEN + RDMX_HDR_LEN;

const_assert_eq!(UDP_FRAME_HDR_LEN, 42);
const_assert_eq!(RDMX_FRAME_HDR_LEN, 64);

/// Largest payload whose IPv4 total length still fits into 16 bits.
pub const UDP_MAX_PAYLOAD: u16 = (u16::MAX as usize - IPV4_HDR_LEN - UDP_HDR_LEN) as u16;
/// Same as `UDP_MAX_PAYLOAD`, minus the RDMX extension header.
pub const RDMX_MAX_PAYLOAD: u16 = UDP_MAX_PAYLOAD - RDMX_HDR_LEN as u16;

const_assert_eq!(UDP_MAX_PAYLOAD, 65507);
const_assert_eq!(RDMX_MAX_PAYLOAD, 65485);

// Ethernet
pub const ETH_DST_MAC_OFF: usize = 0;
pub const ETH_SRC_MAC_OFF: usize = 6;
pub const ETH_TYPE_OFF: usize = 12;

// IPv4
pub const IPV4_OFF: usize = ETH_HDR_LEN;
pub const IPV4_VERSION_OFF: usize = IPV4_OFF;
pub const IPV4_DSF_OFF: usize = IPV4_OFF + 1;
pub const IPV4_TOTAL_LEN_OFF: usize = IPV4_OFF + 2;
pub const IPV4_ID_OFF: usize = IPV4_OFF + 4;
pub const IPV4_FLAGS_OFF: usize = IPV4_OFF + 6;
pub const IPV4_TTL_OFF: usize = IPV4_OFF + 8;
pub const IPV4_PROTOCOL_OFF: usize = IPV4_OFF + 9;
pub const IPV4_CHECKSUM_OFF: usize = IPV4_OFF + 10;
pub const IPV4_SRC_OFF: usize = IPV4_OFF + 12;
pub const IPV4_DST_OFF: usize = IPV4_OFF + 16;

// UDP
pub const UDP_OFF: usize = IPV4_OFF + IPV4_HDR_LEN;
pub const UDP_SRC_PORT_OFF: usize = UDP_OFF;
pub const UDP_DST_PORT_OFF: usize = UDP_OFF + 2;
pub const UDP_LEN_OFF: usize = UDP_OFF + 4;
pub const UDP_CHECKSUM_OFF: usize = UDP_OFF + 6;

// RDMX
pub const RDMX_OFF: usize = UDP_OFF + UDP_HDR_LEN;
pub const RDMX_MAGIC_OFF: usize = RDMX_OFF;
pub const RDMX_TARGET_ADDR_OFF: usize = RDMX_OFF + 2;
pub const RDMX_RESERVED_OFF: usize = RDMX_OFF + 10;
pub const RDMX_RESERVED_LEN: usize = 12;

const_assert_eq!(IPV4_CHECKSUM_OFF, 24);
const_assert_eq!(UDP_LEN_OFF, 38);
const_assert_eq!(RDMX_TARGET_ADDR_OFF, 44);
const_assert_eq!(RDMX_RESERVED_OFF + RDMX_RESERVED_LEN, RDMX_FRAME_HDR_LEN);

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const IPV4_VERSION_IHL: u8 = 0x45;
pub const IPV4_DEFAULT_ID: u16 = 0xDEAD;
pub const IPV4_FLAG_DONT_FRAGMENT: u16 = 0x4000;
pub const IPV4_DEFAULT_TTL: u8 = 64;
pub const IPPROTO_UDP: u8 = 0x11;

/// Identifies the RDMX extension header following UDP.
pub const RDMX_MAGIC: u16 = 0x0122;
/// UDP destination port used by RDMX frames unless overridden.
pub const RDMX_DEFAULT_DST_PORT: u16 = 11111;

pub const BROADCAST_MAC: [u8; 6] = [0xFF; 6];
