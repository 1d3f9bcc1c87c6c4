//! # Internet Checksum
//!
//! ## Purpose
//!
//! Computes the IPv4 header checksum that every stamped frame carries, and a
//! general ones'-complement sum used to verify finished headers.
//!
//! ## How it works
//!
//! The header is read as big-endian 16-bit words which are added into a
//! 32-bit accumulator. Carries out of the low 16 bits are folded back in and
//! the ones' complement of the result is the checksum. For the IPv4 header the
//! checksum word itself (word 5) is skipped by position, so the stored value
//! never influences the result.
//!
//! ## Main components
//!
//! - `ipv4_checksum()`: checksum of a 20-byte IPv4 header.
//! - `internet_checksum()`: RFC 1071 checksum over an arbitrary byte slice.

use crate::byte_order::ntoh16;
use crate::layout::IPV4_HDR_LEN;

/// Index of the checksum field when the IPv4 header is seen as 16-bit words.
const IPV4_CHECKSUM_WORD: usize = 5;

/// Computes the checksum of a 20-byte IPv4 header.
///
/// The current content of the checksum field is ignored. The returned value
/// is in host order and has to be stored in network order.
pub fn ipv4_checksum(header: &[u8; IPV4_HDR_LEN]) -> u16 {
    let mut sum: u32 = 0;
    for (i, word) in header.chunks_exact(2).enumerate() {
        if i != IPV4_CHECKSUM_WORD {
            sum += ntoh16(u16::from_ne_bytes([word[0], word[1]])) as u32;
        }
    }
    while (sum >> 16) > 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// Computes the RFC 1071 Internet checksum of `data`.
///
/// An odd trailing byte is padded with zero. Running this over a header that
/// already carries its correct checksum yields zero.
pub fn internet_checksum(data: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    let mut words = data.chunks_exact(2);
    for word in &mut words {
        sum += u16::from_be_bytes([word[0], word[1]]) as u32;
    }
    if let [last] = words.remainder() {
        sum += (*last as u32) << 8;
    }
    while (sum >> 16) > 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}
