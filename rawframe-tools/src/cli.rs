//! # Command Line
//!
//! ## Purpose
//!
//! Parses the `frame-sender` arguments: the interface, which frames to send,
//! the addressing overrides and the send schedule.
//!
//! ## How it works
//!
//! Defaults reproduce the demo setup from `config`. `--payload-len` is
//! limited to `RDMX_MAX_PAYLOAD` so both frame kinds carry a valid length.
//! `Args::addressing()` turns the parsed values into an `Addressing`, looking
//! up the interface MAC only when `--src-mac auto` is given.
//!
//! ## Main components
//!
//! - `Args`: the clap parser.
//! - `Mode`: UDP, RDMX or both.
//! - `SrcMac`: fixed or interface source MAC.

use crate::config::{
    Addressing, DEFAULT_INTERFACE, DEFAULT_PAYLOAD_LEN, DEFAULT_TARGET_ADDR, parse_mac,
    parse_target_addr,
};
use clap::{Parser, ValueEnum};
use rawframe::{RDMX_DEFAULT_DST_PORT, RDMX_MAX_PAYLOAD};
use std::net::Ipv4Addr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Ethernet/IPv4/UDP frames only
    Udp,
    /// Ethernet/IPv4/UDP/RDMX frames only
    Rdmx,
    /// one UDP frame followed by one RDMX frame
    Both,
}

/// Where the source MAC comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SrcMac {
    /// read from the interface
    Auto,
    Fixed([u8; 6]),
}

fn parse_src_mac(s: &str) -> Result<SrcMac, String> {
    if s.eq_ignore_ascii_case("auto") {
        Ok(SrcMac::Auto)
    } else {
        parse_mac(s).map(SrcMac::Fixed)
    }
}

#[derive(Parser, Debug)]
#[command(about = "Build raw Ethernet/IPv4/UDP(/RDMX) frames and send them on an interface")]
pub struct Args {
    /// network interface to send on
    #[clap(short, long, default_value = DEFAULT_INTERFACE)]
    pub interface: String,

    /// which frames to send
    #[clap(short, long, value_enum, default_value_t = Mode::Both)]
    pub mode: Mode,

    /// source MAC, or "auto" to use the interface's own address
    #[clap(long, default_value = "c4:00:ad:3a:d3:6b", value_parser = parse_src_mac)]
    pub src_mac: SrcMac,

    /// destination MAC, broadcast if omitted
    #[clap(long, value_parser = parse_mac)]
    pub dst_mac: Option<[u8; 6]>,

    /// source IPv4 address
    #[clap(long, default_value = "10.11.12.1")]
    pub src_ip: Ipv4Addr,

    /// destination IPv4 address
    #[clap(long, default_value = "10.11.12.255")]
    pub dst_ip: Ipv4Addr,

    /// source UDP port
    #[clap(long, default_value_t = 1234)]
    pub src_port: u16,

    /// destination UDP port of plain UDP frames
    #[clap(long, default_value_t = 5678)]
    pub dst_port: u16,

    /// destination UDP port of RDMX frames
    #[clap(long, default_value_t = RDMX_DEFAULT_DST_PORT)]
    pub rdmx_port: u16,

    /// RDMX target address, decimal or 0x-prefixed hex
    #[clap(short, long, default_value_t = DEFAULT_TARGET_ADDR, value_parser = parse_target_addr)]
    pub target_addr: u64,

    /// payload length in bytes
    #[clap(short, long, default_value_t = DEFAULT_PAYLOAD_LEN,
        value_parser = clap::value_parser!(u16).range(0..=RDMX_MAX_PAYLOAD as i64))]
    pub payload_len: u16,

    /// number of times to send each frame
    #[clap(short, long, default_value_t = 1)]
    pub count: u32,

    /// delay between rounds like 1s or 100ms
    #[clap(short, long, value_parser = humantime::parse_duration)]
    pub delay: Option<std::time::Duration>,

    /// print frames as hex instead of sending them
    #[clap(long)]
    pub dry_run: bool,
}

impl Args {
    /// Builds the frame addressing, using `resolve_mac` when the source MAC
    /// is taken from the interface.
    pub fn addressing<E>(
        &self,
        resolve_mac: impl FnOnce(&str) -> Result<[u8; 6], E>,
    ) -> Result<Addressing, E> {
        let src_mac = match self.src_mac {
            SrcMac::Fixed(mac) => mac,
            SrcMac::Auto => resolve_mac(&self.interface)?,
        };
        Ok(Addressing {
            src_mac,
            dst_mac: self.dst_mac,
            src_ip: self.src_ip,
            dst_ip: self.dst_ip,
            src_port: self.src_port,
            dst_port: self.dst_port,
            rdmx_port: self.rdmx_port,
            target_addr: self.target_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_lookup(_: &str) -> Result<[u8; 6], String> {
        Err("lookup not expected".to_string())
    }

    #[test]
    fn test_defaults_match_demo() {
        let args = Args::try_parse_from(["frame-sender"]).unwrap();
        assert_eq!(args.interface, "enp3s0");
        assert_eq!(args.mode, Mode::Both);
        assert_eq!(args.payload_len, 256);
        assert_eq!(args.count, 1);
        assert!(args.delay.is_none());
        assert!(!args.dry_run);
        assert_eq!(args.addressing(no_lookup).unwrap(), Addressing::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "frame-sender",
            "-i",
            "eth1",
            "--mode",
            "rdmx",
            "--dst-mac",
            "66:77:88:99:aa:bb",
            "--dst-ip",
            "192.168.1.2",
            "--target-addr",
            "0x1000",
            "--payload-len",
            "64",
            "--delay",
            "100ms",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.interface, "eth1");
        assert_eq!(args.mode, Mode::Rdmx);
        assert_eq!(args.delay, Some(std::time::Duration::from_millis(100)));
        assert!(args.dry_run);
        let a = args.addressing(no_lookup).unwrap();
        assert_eq!(a.dst_mac, Some([0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb]));
        assert_eq!(a.dst_ip, Ipv4Addr::new(192, 168, 1, 2));
        assert_eq!(a.target_addr, 0x1000);
    }

    #[test]
    fn test_auto_src_mac() {
        let args = Args::try_parse_from(["frame-sender", "-i", "lo", "--src-mac", "auto"]).unwrap();
        let a = args
            .addressing(|name| {
                assert_eq!(name, "lo");
                Ok::<_, String>([2, 0, 0, 0, 0, 1])
            })
            .unwrap();
        assert_eq!(a.src_mac, [2, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Args::try_parse_from(["frame-sender", "--payload-len", "70000"]).is_err());
        assert!(Args::try_parse_from(["frame-sender", "--payload-len", "65500"]).is_err());
        assert!(Args::try_parse_from(["frame-sender", "--dst-mac", "zz"]).is_err());
        assert!(Args::try_parse_from(["frame-sender", "--mode", "tcp"]).is_err());
        assert!(Args::try_parse_from(["frame-sender", "--delay", "soon"]).is_err());
    }
}
