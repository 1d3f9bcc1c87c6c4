//!
//! # Raw Frame Header Library
//!
//! This crate builds the link-layer headers needed to transmit UDP datagrams
//! through a raw socket without going through the host's IP stack. It provides
//! reusable header templates for plain Ethernet/IPv4/UDP frames and for frames
//! carrying the RDMX addressing extension, the IPv4 header checksum, and the
//! byte-order helpers used to lay out network-order fields.
//!
//! A template is configured once with addresses and ports and then stamped in
//! front of every outgoing payload; stamping fills in the per-frame lengths,
//! checksum and, for RDMX, the target address.
//!

pub mod byte_order;
pub mod checksum;
pub mod layout;
pub mod rdmx;
mod template;
pub mod udp;

pub use checksum::{internet_checksum, ipv4_checksum};
pub use layout::{
    BROADCAST_MAC, RDMX_DEFAULT_DST_PORT, RDMX_FRAME_HDR_LEN, RDMX_MAGIC, RDMX_MAX_PAYLOAD,
    UDP_FRAME_HDR_LEN, UDP_MAX_PAYLOAD,
};
pub use rdmx::RdmxFrameTemplate;
pub use udp::UdpFrameTemplate;

mod tests;
