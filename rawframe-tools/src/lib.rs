//!
//! # Raw Frame Tools
//!
//! Driver code behind the `frame-sender` binary: command line parsing, the
//! frame addressing configuration, the placeholder payload, hex dumps and the
//! glue that stamps frame headers and hands the frames to a raw socket.
//!

pub mod cli;
pub mod config;
pub mod driver;
pub mod dump;
pub mod payload;
pub mod privileges;

pub use cli::{Args, Mode};
pub use config::Addressing;
pub use driver::FrameSender;
pub use dump::{DumpSink, hex_dump};
pub use payload::make_payload;
pub use privileges::check_capabilities;
