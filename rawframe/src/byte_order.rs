//! # Host/Network Byte Order Conversions
//!
//! ## Purpose
//!
//! Every multi-byte field of the frame headers lives in network (big-endian)
//! order. This module converts 16, 32 and 64-bit values between host and
//! network order and provides small accessors that read and write such fields
//! inside a byte buffer.
//!
//! ## How it works
//!
//! Host endianness is resolved at compile time with `cfg!(target_endian)`.
//! On big-endian hosts the conversions are the identity. On little-endian
//! hosts the 64-bit conversion splits the value into 32-bit halves, swaps the
//! bytes of each half and exchanges the halves (`swap64`).
//!
//! ## Main components
//!
//! - `hton16`, `hton32`, `hton64` and their inverses `ntoh16`, `ntoh32`, `ntoh64`.
//! - `swap64`: the 64-bit byte swap used on little-endian hosts.
//! - `put_be16`, `put_be64`, `get_be16`, `get_be64`: field accessors.

const BIG_ENDIAN_HOST: bool = cfg!(target_endian = "big");

#[inline]
pub const fn hton16(v: u16) -> u16 {
    if BIG_ENDIAN_HOST { v } else { v.swap_bytes() }
}

#[inline]
pub const fn hton32(v: u32) -> u32 {
    if BIG_ENDIAN_HOST { v } else { v.swap_bytes() }
}

/// Converts a 64-bit value from host to network order.
#[inline]
pub const fn hton64(v: u64) -> u64 {
    if BIG_ENDIAN_HOST { v } else { swap64(v) }
}

#[inline]
pub const fn ntoh16(v: u16) -> u16 {
    hton16(v)
}

#[inline]
pub const fn ntoh32(v: u32) -> u32 {
    hton32(v)
}

#[inline]
pub const fn ntoh64(v: u64) -> u64 {
    hton64(v)
}

/// Reverses the byte order of a 64-bit value.
///
/// The low half, byte-swapped, becomes the high half and vice versa.
#[inline]
pub const fn swap64(v: u64) -> u64 {
    let lo = (v & 0xFFFF_FFFF) as u32;
    let hi = (v >> 32) as u32;
    ((lo.swap_bytes() as u64) << 32) | hi.swap_bytes() as u64
}

/// Stores `v` at `buf[off..off + 2]` in network order.
#[inline]
pub fn put_be16(buf: &mut [u8], off: usize, v: u16) {
    buf[off..off + 2].copy_from_slice(&hton16(v).to_ne_bytes());
}

/// Stores `v` at `buf[off..off + 8]` in network order.
#[inline]
pub fn put_be64(buf: &mut [u8], off: usize, v: u64) {
    buf[off..off + 8].copy_from_slice(&hton64(v).to_ne_bytes());
}

/// Reads a network-order 16-bit field at `buf[off..off + 2]`.
#[inline]
pub fn get_be16(buf: &[u8], off: usize) -> u16 {
    ntoh16(u16::from_ne_bytes([buf[off], buf[off + 1]]))
}

/// Reads a network-order 64-bit field at `buf[off..off + 8]`.
#[inline]
pub fn get_be64(buf: &[u8], off: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[off..off + 8]);
    ntoh64(u64::from_ne_bytes(bytes))
}
