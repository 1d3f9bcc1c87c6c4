//! # Hex Dump
//!
//! Renders frames as hex for dry runs and trace logs: 16 bytes per line with
//! an extra gap after every 8 bytes.

use rawnic::{NicError, Transmit};
use std::fmt::Write as _;
use std::io::{self, Write as _};

/// Formats `data` as a hex dump.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3 + data.len() / 8 + 1);
    for (n, b) in data.iter().enumerate() {
        let _ = write!(out, "{b:02X} ");
        if (n + 1) % 16 == 0 {
            out.push('\n');
        } else if (n + 1) % 8 == 0 {
            out.push_str("  ");
        }
    }
    if data.len() % 16 != 0 {
        out.push('\n');
    }
    out
}

/// A `Transmit` sink that writes every frame as a hex dump instead of
/// sending it.
pub struct DumpSink<W: io::Write> {
    out: W,
    frames: usize,
}

impl<W: io::Write> DumpSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: io::Write> Transmit for DumpSink<W> {
    fn transmit(&mut self, frame: &[u8]) -> Result<(), NicError> {
        self.frames += 1;
        writeln!(self.out, "frame #{} ({} bytes):", self.frames, frame.len())?;
        self.out.write_all(hex_dump(frame).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
