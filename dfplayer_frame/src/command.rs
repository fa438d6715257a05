use core::fmt;

use crate::frame::FrameError;

/// Opcodes understood by the module.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CommandCode {
    /// Skip to the next track.
    Next,
    /// Skip to the previous track.
    Prev,
    /// Play a track by its index in the root of the storage.
    Play,
    /// Set the output volume. Parameter low byte carries the level.
    SetVolume,
    /// Reset the module.
    Reset,
    /// Pause playback. The module toggles back to playing on a repeat.
    Pause,
    /// Play a track inside a numbered folder.
    PlayFromFolder,
    /// Stop playback.
    Stop,
    /// Ask the module for its playback status.
    QueryStatus,
}

impl CommandCode {
    /// Returns the opcode byte placed at offset 3 of a frame.
    ///
    /// ```
    /// use dfplayer_frame::CommandCode;
    ///
    /// assert_eq!(0x06, CommandCode::SetVolume.as_raw());
    /// assert_eq!(0x0F, CommandCode::PlayFromFolder.as_raw());
    /// ```
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Next => 0x01,
            Self::Prev => 0x02,
            Self::Play => 0x03,
            Self::SetVolume => 0x06,
            Self::Reset => 0x0C,
            Self::Pause => 0x0E,
            Self::PlayFromFolder => 0x0F,
            Self::Stop => 0x16,
            Self::QueryStatus => 0x42,
        }
    }
}

impl From<CommandCode> for u8 {
    fn from(command: CommandCode) -> Self {
        command.as_raw()
    }
}

impl TryFrom<u8> for CommandCode {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::Next),
            0x02 => Ok(Self::Prev),
            0x03 => Ok(Self::Play),
            0x06 => Ok(Self::SetVolume),
            0x0C => Ok(Self::Reset),
            0x0E => Ok(Self::Pause),
            0x0F => Ok(Self::PlayFromFolder),
            0x16 => Ok(Self::Stop),
            0x42 => Ok(Self::QueryStatus),
            _ => Err(FrameError::UnknownCommand { value }),
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04X}", self.as_raw())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::format;

    use super::*;

    #[rstest]
    #[case(CommandCode::Next)]
    #[case(CommandCode::Prev)]
    #[case(CommandCode::Play)]
    #[case(CommandCode::SetVolume)]
    #[case(CommandCode::Reset)]
    #[case(CommandCode::Pause)]
    #[case(CommandCode::PlayFromFolder)]
    #[case(CommandCode::Stop)]
    #[case(CommandCode::QueryStatus)]
    fn test_raw_value_maps_back(#[case] command: CommandCode) {
        assert_eq!(Ok(command), CommandCode::try_from(command.as_raw()));
    }

    #[test]
    fn test_unknown_opcode() {
        assert_eq!(
            Err(FrameError::UnknownCommand { value: 0x04 }),
            CommandCode::try_from(0x04)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("0x16", format!("{}", CommandCode::Stop));
    }
}
