#![cfg(test)]

use super::{DST_IP, SRC_IP, src_mac};
use crate::byte_order::{get_be16, get_be64};
use crate::layout::*;
use crate::{RdmxFrameTemplate, UdpFrameTemplate, internet_checksum};
use etherparse::{SlicedPacket, TransportSlice};

const TARGET_ADDRESS: u64 = 0x1234_5678_9ABC_DEF0;

fn demo_template() -> RdmxFrameTemplate {
    let mut tpl = RdmxFrameTemplate::new();
    tpl.set_mac_addrs(src_mac(), None);
    tpl.set_ip_addrs(SRC_IP, DST_IP);
    tpl.set_udp_ports(1234);
    tpl
}

#[test]
fn test_template_defaults() {
    let tpl = RdmxFrameTemplate::new();
    let bytes = tpl.as_bytes();
    assert_eq!(bytes.len(), 64);
    assert_eq!(bytes[0..6], [0xFF; 6]);
    assert_eq!(bytes[42..44], [0x01, 0x22]);
    assert_eq!(bytes[44..52], [0u8; 8]);
    assert_eq!(bytes[52..64], [0u8; 12]);
    assert_eq!(tpl.dst_port(), RDMX_DEFAULT_DST_PORT);
    assert_eq!(get_be16(bytes, UDP_DST_PORT_OFF), 11111);
}

#[test]
fn test_shares_udp_prefix() {
    let mut udp = UdpFrameTemplate::new();
    udp.set_mac_addrs(src_mac(), None);
    udp.set_ip_addrs(SRC_IP, DST_IP);
    udp.set_udp_ports(1234, RDMX_DEFAULT_DST_PORT);
    let rdmx = demo_template();
    assert_eq!(rdmx.as_bytes()[..UDP_FRAME_HDR_LEN], udp.as_bytes()[..]);
}

#[test]
fn test_demo_scenario() {
    let tpl = demo_template();
    let hdr = tpl.header(256, TARGET_ADDRESS);
    assert_eq!(
        hdr[44..52],
        [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]
    );
    assert_eq!(get_be64(&hdr, RDMX_TARGET_ADDR_OFF), TARGET_ADDRESS);
    assert_eq!(get_be16(&hdr, IPV4_TOTAL_LEN_OFF), 306);
    assert_eq!(get_be16(&hdr, UDP_LEN_OFF), 286);
    assert_eq!(internet_checksum(&hdr[IPV4_OFF..IPV4_OFF + IPV4_HDR_LEN]), 0);
    assert_eq!(hdr[42..44], [0x01, 0x22]);
    assert_eq!(hdr[52..64], [0u8; 12]);
    assert_eq!(hdr[34..36], [0x04, 0xD2]);
}

#[test]
fn test_write_header_is_idempotent() {
    let tpl = demo_template();
    let before = *tpl.as_bytes();
    let mut a = [0u8; 64];
    let mut b = [0xA5u8; 64 + 4];
    tpl.write_header(&mut a, 4, TARGET_ADDRESS);
    tpl.write_header(&mut b, 4, TARGET_ADDRESS);
    assert_eq!(a[..], b[..64]);
    assert_eq!(b[64..], [0xA5; 4]);
    assert_eq!(*tpl.as_bytes(), before);

    // the target address is per call, not remembered
    let other = tpl.header(4, 1);
    assert_eq!(get_be64(&other, RDMX_TARGET_ADDR_OFF), 1);
    assert_eq!(other[..RDMX_TARGET_ADDR_OFF], a[..RDMX_TARGET_ADDR_OFF]);
}

#[test]
fn test_lengths_for_all_payload_sizes() {
    let tpl = demo_template();
    let mut hdr = [0u8; RDMX_FRAME_HDR_LEN];
    for len in 0..=RDMX_MAX_PAYLOAD {
        tpl.write_header(&mut hdr, len, u64::from(len));
        assert_eq!(get_be16(&hdr, UDP_LEN_OFF) as usize, 30 + len as usize);
        assert_eq!(get_be16(&hdr, IPV4_TOTAL_LEN_OFF) as usize, 50 + len as usize);
        assert_eq!(internet_checksum(&hdr[IPV4_OFF..IPV4_OFF + IPV4_HDR_LEN]), 0);
    }
}

#[test]
fn test_custom_destination_port() {
    let mut tpl = demo_template();
    tpl.set_udp_ports_with(1234, 4791);
    assert_eq!(tpl.dst_port(), 4791);
    tpl.set_udp_ports(1234);
    assert_eq!(tpl.dst_port(), RDMX_DEFAULT_DST_PORT);
}

#[test]
fn test_parsed_by_etherparse() {
    let tpl = demo_template();
    let data = [7u8; 32];
    let mut buf = [0u8; 64 + 32];
    tpl.write_header(&mut buf, data.len() as u16, TARGET_ADDRESS);
    buf[64..].copy_from_slice(&data);
    let packet = match SlicedPacket::from_ethernet(&buf) {
        Ok(packet) => packet,
        Err(e) => panic!("Failed to parse packet: {}", e),
    };
    match packet.transport {
        Some(TransportSlice::Udp(udp)) => {
            assert_eq!(udp.destination_port(), RDMX_DEFAULT_DST_PORT);
            assert_eq!(udp.length() as usize, 8 + RDMX_HDR_LEN + data.len());
            let payload = udp.payload();
            assert_eq!(payload.len(), RDMX_HDR_LEN + data.len());
            assert_eq!(payload[0..2], RDMX_MAGIC.to_be_bytes());
            assert_eq!(payload[2..10], TARGET_ADDRESS.to_be_bytes());
            assert_eq!(payload[RDMX_HDR_LEN..], data);
        }
        _ => panic!("Not udp packet"),
    }
}

#[test]
fn test_oversized_payload_wraps_lengths() {
    let tpl = demo_template();
    let hdr = tpl.header(u16::MAX, TARGET_ADDRESS);
    // 65535 + 30 and 65535 + 50 taken modulo 2^16
    assert_eq!(get_be16(&hdr, UDP_LEN_OFF), 29);
    assert_eq!(get_be16(&hdr, IPV4_TOTAL_LEN_OFF), 49);
    assert_eq!(get_be64(&hdr, RDMX_TARGET_ADDR_OFF), TARGET_ADDRESS);
    assert_eq!(internet_checksum(&hdr[IPV4_OFF..IPV4_OFF + IPV4_HDR_LEN]), 0);

    // above the RDMX maximum but still a valid UDP payload size
    let hdr = tpl.header(65500, 1);
    assert_eq!(get_be16(&hdr, UDP_LEN_OFF), 65530);
    assert_eq!(get_be16(&hdr, IPV4_TOTAL_LEN_OFF), 14);
    assert_eq!(internet_checksum(&hdr[IPV4_OFF..IPV4_OFF + IPV4_HDR_LEN]), 0);
}
