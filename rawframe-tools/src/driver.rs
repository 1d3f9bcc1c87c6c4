//! # Frame Sending Driver
//!
//! ## Purpose
//!
//! Glues the frame templates to a transmit sink. It configures a UDP and an
//! RDMX template once from an `Addressing`, then for every frame stamps the
//! header into a frame buffer, appends the placeholder payload and hands the
//! result to a `Transmit` implementation.
//!
//! ## How it works
//!
//! `FrameSender` owns both templates and a reusable frame buffer. The buffer
//! is resized to `header + payload` for each frame; the header is written in
//! place with `write_header` and the payload right behind it.
//!
//! ## Main components
//!
//! - `FrameSender::new()`: configures the templates.
//! - `send_udp()`, `send_rdmx()`: build and transmit one frame each.

use crate::config::Addressing;
use crate::dump::hex_dump;
use crate::payload::make_payload;
use rawframe::{RDMX_FRAME_HDR_LEN, RdmxFrameTemplate, UDP_FRAME_HDR_LEN, UdpFrameTemplate};
use rawnic::{NicError, Transmit};

#[derive(Debug)]
pub struct FrameSender {
    udp: UdpFrameTemplate,
    rdmx: RdmxFrameTemplate,
    frame: Vec<u8>,
}

impl FrameSender {
    pub fn new(addressing: &Addressing) -> Self {
        let mut udp = UdpFrameTemplate::new();
        udp.set_mac_addrs(addressing.src_mac, addressing.dst_mac);
        udp.set_ip_addrs(addressing.src_ip, addressing.dst_ip);
        udp.set_udp_ports(addressing.src_port, addressing.dst_port);

        let mut rdmx = RdmxFrameTemplate::new();
        rdmx.set_mac_addrs(addressing.src_mac, addressing.dst_mac);
        rdmx.set_ip_addrs(addressing.src_ip, addressing.dst_ip);
        rdmx.set_udp_ports_with(addressing.src_port, addressing.rdmx_port);

        log::debug!("udp template: {udp:?}");
        log::debug!("rdmx template: {rdmx:?}");

        Self {
            udp,
            rdmx,
            frame: Vec::with_capacity(RDMX_FRAME_HDR_LEN + 1500),
        }
    }

    /// Builds an Ethernet/IPv4/UDP frame with `payload_len` bytes of
    /// placeholder payload and transmits it. Returns the frame length.
    pub fn send_udp<T: Transmit>(&mut self, tx: &mut T, payload_len: u16) -> Result<usize, NicError> {
        let len = self.reset_frame(UDP_FRAME_HDR_LEN, payload_len);
        self.udp.write_header(&mut self.frame, payload_len);
        self.transmit(tx, UDP_FRAME_HDR_LEN)?;
        Ok(len)
    }

    /// Builds an Ethernet/IPv4/UDP/RDMX frame addressed at `target_addr` and
    /// transmits it. Returns the frame length.
    pub fn send_rdmx<T: Transmit>(
        &mut self,
        tx: &mut T,
        payload_len: u16,
        target_addr: u64,
    ) -> Result<usize, NicError> {
        let len = self.reset_frame(RDMX_FRAME_HDR_LEN, payload_len);
        self.rdmx.write_header(&mut self.frame, payload_len, target_addr);
        self.transmit(tx, RDMX_FRAME_HDR_LEN)?;
        Ok(len)
    }

    fn reset_frame(&mut self, hdr_len: usize, payload_len: u16) -> usize {
        let len = hdr_len + payload_len as usize;
        self.frame.clear();
        self.frame.resize(len, 0);
        len
    }

    fn transmit<T: Transmit>(&mut self, tx: &mut T, hdr_len: usize) -> Result<(), NicError> {
        make_payload(&mut self.frame[hdr_len..]);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("frame of {} bytes:\n{}", self.frame.len(), hex_dump(&self.frame));
        }
        tx.transmit(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<u8>>,
    }

    impl Transmit for Recorder {
        fn transmit(&mut self, frame: &[u8]) -> Result<(), NicError> {
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }

    struct Failing;

    impl Transmit for Failing {
        fn transmit(&mut self, frame: &[u8]) -> Result<(), NicError> {
            Err(NicError::ShortWrite {
                sent: 0,
                expected: frame.len(),
            })
        }
    }

    #[test]
    fn test_udp_frame() {
        let mut sender = FrameSender::new(&Addressing::default());
        let mut rec = Recorder::default();
        assert_eq!(sender.send_udp(&mut rec, 256).unwrap(), 42 + 256);
        let frame = &rec.frames[0];
        assert_eq!(frame.len(), 298);
        assert_eq!(frame[16..18], [0x01, 0x1C]);
        assert_eq!(frame[38..40], [0x01, 0x08]);
        assert_eq!(frame[42], 0);
        assert_eq!(frame[42 + 255], 255);
    }

    #[test]
    fn test_rdmx_frame() {
        let addressing = Addressing::default();
        let mut sender = FrameSender::new(&addressing);
        let mut rec = Recorder::default();
        let len = sender.send_rdmx(&mut rec, 256, addressing.target_addr).unwrap();
        assert_eq!(len, 64 + 256);
        let frame = &rec.frames[0];
        assert_eq!(frame[16..18], 306u16.to_be_bytes());
        assert_eq!(frame[36..38], 11111u16.to_be_bytes());
        assert_eq!(frame[44..52], addressing.target_addr.to_be_bytes());
        assert_eq!(frame[64], 0);
        assert_eq!(frame[64 + 10], 10);
    }

    #[test]
    fn test_buffer_is_reused_between_frames() {
        let mut sender = FrameSender::new(&Addressing::default());
        let mut rec = Recorder::default();
        sender.send_rdmx(&mut rec, 100, 1).unwrap();
        sender.send_udp(&mut rec, 10).unwrap();
        sender.send_udp(&mut rec, 10).unwrap();
        assert_eq!(rec.frames[1].len(), 52);
        assert_eq!(rec.frames[1], rec.frames[2]);
    }

    #[test]
    fn test_transmit_error_is_returned() {
        let mut sender = FrameSender::new(&Addressing::default());
        match sender.send_udp(&mut Failing, 8) {
            Err(NicError::ShortWrite { sent: 0, expected: 50 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
