#![no_std]

#[cfg(test)]
extern crate std;

pub mod checksum;
mod command;
mod frame;

pub use checksum::err_if_checksum_mismatched;
pub use command::CommandCode;
pub use frame::{CommandFrame, FrameError, FRAME_SIZE};
