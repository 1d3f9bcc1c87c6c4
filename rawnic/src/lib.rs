// Public modules and re-exports
pub mod error;
pub mod interface;
pub mod nic;
pub mod send;

pub use error::NicError;
pub use interface::{if_index_by_name, mac_by_name};
pub use nic::RawNic;
pub use send::Transmit;
