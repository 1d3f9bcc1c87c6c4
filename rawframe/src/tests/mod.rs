#![cfg(test)]

mod rdmx_frame;

use std::net::Ipv4Addr;
use std::str::FromStr as _;

pub(crate) const SRC_IP: Ipv4Addr = Ipv4Addr::new(10, 11, 12, 1);
pub(crate) const DST_IP: Ipv4Addr = Ipv4Addr::new(10, 11, 12, 255);

pub(crate) fn src_mac() -> [u8; 6] {
    eui48::MacAddress::from_str("c4:00:ad:3a:d3:6b")
        .expect("valid MAC address")
        .to_array()
}
