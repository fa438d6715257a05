use thiserror::Error;

use crate::checksum;
use crate::command::CommandCode;

pub const FRAME_SIZE: usize = 10;

const START_BYTE: u8 = 0x7E;
const VERSION: u8 = 0xFF;
const BODY_LENGTH: u8 = 0x06;
const NO_FEEDBACK: u8 = 0x00;
const END_BYTE: u8 = 0xEF;

/// Errors returned when validating a captured command frame.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum FrameError {
    #[error("command frame must be always ten bytes. Actually {actual} bytes")]
    WrongLength { actual: usize },
    #[error("command frame must start with 0x7E. Observed = {observed:#04X}")]
    BadStartByte { observed: u8 },
    #[error("command frame must end with 0xEF. Observed = {observed:#04X}")]
    BadEndByte { observed: u8 },
    #[error("expected version byte 0xFF but obtained {observed:#04X}")]
    BadVersion { observed: u8 },
    #[error("expected length byte 0x06 but obtained {observed:#04X}")]
    BadLength { observed: u8 },
    #[error("unknown command opcode {value:#04X}")]
    UnknownCommand { value: u8 },
    #[error("checksum mismatch: computed {expected:#06X} but frame carries {actual:#06X}")]
    ChecksumMismatch { expected: u16, actual: u16 },
}

/// One command as sent on the wire.
///
/// Layout: `7E FF 06 <command> 00 <param_high> <param_low> <ck_high> <ck_low> EF`.
/// The checksum always matches the body, so a frame cannot be built or
/// changed into an inconsistent state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct CommandFrame {
    command: CommandCode,
    bytes: [u8; FRAME_SIZE],
}

impl CommandFrame {
    /// Encodes `command` with the two parameter bytes.
    ///
    /// ```
    /// use dfplayer_frame::{CommandCode, CommandFrame};
    ///
    /// let frame = CommandFrame::new(CommandCode::SetVolume, 0x00, 0x14);
    /// assert_eq!(
    ///     &[0x7E, 0xFF, 0x06, 0x06, 0x00, 0x00, 0x14, 0xFE, 0xE1, 0xEF],
    ///     frame.as_bytes()
    /// );
    /// ```
    #[must_use]
    pub fn new(command: CommandCode, param_high: u8, param_low: u8) -> Self {
        let mut bytes = [
            START_BYTE,
            VERSION,
            BODY_LENGTH,
            command.as_raw(),
            NO_FEEDBACK,
            param_high,
            param_low,
            0x00,
            0x00,
            END_BYTE,
        ];
        let [high, low] = checksum::compute(&bytes[checksum::BODY_RANGE]).to_be_bytes();
        bytes[7] = high;
        bytes[8] = low;
        CommandFrame { command, bytes }
    }

    /// Encodes `command` with a 16-bit parameter split big-endian.
    ///
    /// ```
    /// use dfplayer_frame::{CommandCode, CommandFrame};
    ///
    /// let frame = CommandFrame::with_param(CommandCode::Play, 256);
    /// assert_eq!(1, frame.param_high());
    /// assert_eq!(0, frame.param_low());
    /// ```
    #[must_use]
    pub fn with_param(command: CommandCode, param: u16) -> Self {
        let [high, low] = param.to_be_bytes();
        Self::new(command, high, low)
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.bytes
    }

    pub fn command(&self) -> CommandCode {
        self.command
    }

    pub fn param_high(&self) -> u8 {
        self.bytes[5]
    }

    pub fn param_low(&self) -> u8 {
        self.bytes[6]
    }

    pub fn param(&self) -> u16 {
        u16::from_be_bytes([self.bytes[5], self.bytes[6]])
    }

    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes([self.bytes[7], self.bytes[8]])
    }
}

impl AsRef<[u8]> for CommandFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for CommandFrame {
    type Error = FrameError;

    /// Validates a captured frame, for example one sniffed from the TX line.
    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; FRAME_SIZE] = data
            .try_into()
            .map_err(|_| FrameError::WrongLength { actual: data.len() })?;
        if bytes[0] != START_BYTE {
            return Err(FrameError::BadStartByte { observed: bytes[0] });
        }
        if bytes[9] != END_BYTE {
            return Err(FrameError::BadEndByte { observed: bytes[9] });
        }
        if bytes[1] != VERSION {
            return Err(FrameError::BadVersion { observed: bytes[1] });
        }
        if bytes[2] != BODY_LENGTH {
            return Err(FrameError::BadLength { observed: bytes[2] });
        }
        let command = CommandCode::try_from(bytes[3])?;
        checksum::err_if_checksum_mismatched(&bytes)?;
        Ok(CommandFrame { command, bytes })
    }
}
