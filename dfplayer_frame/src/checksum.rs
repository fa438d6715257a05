use crate::frame::{FrameError, FRAME_SIZE};

/// Bytes 1 to 6 of a frame: version, length, command, feedback and the two parameter bytes.
pub const BODY_RANGE: core::ops::Range<usize> = 1..7;

/// Two's-complement negation of the body sum, truncated to 16 bits.
pub fn compute(body: &[u8]) -> u16 {
    let sum = body
        .iter()
        .fold(0u16, |acc, &e| acc.wrapping_add(e as u16));
    0u16.wrapping_sub(sum)
}

fn transmitted(frame: &[u8]) -> u16 {
    u16::from_be_bytes([frame[7], frame[8]])
}

pub fn err_if_checksum_mismatched(frame: &[u8]) -> Result<(), FrameError> {
    if frame.len() != FRAME_SIZE {
        return Err(FrameError::WrongLength {
            actual: frame.len(),
        });
    }
    let expected = compute(&frame[BODY_RANGE]);
    let actual = transmitted(frame);
    if expected != actual {
        return Err(FrameError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_compute() {
        // 0xFF + 0x06 + 0x06 + 0x00 + 0x00 + 0x14 = 0x011F
        assert_eq!(0xFEE1, compute(&[0xFF, 0x06, 0x06, 0x00, 0x00, 0x14]));
        assert_eq!(0x0000, compute(&[]));
    }

    #[test]
    fn test_compute_wraps() {
        // 0xFF * 6 = 0x05FA
        assert_eq!(0xFA06, compute(&[0xFF; 6]));
    }

    #[test]
    fn test_err_if_checksum_mismatched() {
        let frame = [0x7E, 0xFF, 0x06, 0x16, 0x00, 0x00, 0x00, 0xFE, 0xE5, 0xEF];
        assert_eq!(Ok(()), err_if_checksum_mismatched(&frame));

        let frame = [0x7E, 0xFF, 0x06, 0x16, 0x00, 0x00, 0x00, 0xFE, 0xE6, 0xEF];
        assert_eq!(
            Err(FrameError::ChecksumMismatch {
                expected: 0xFEE5,
                actual: 0xFEE6
            }),
            err_if_checksum_mismatched(&frame)
        );

        assert_eq!(
            Err(FrameError::WrongLength { actual: 3 }),
            err_if_checksum_mismatched(&[0x7E, 0xFF, 0x06])
        );
    }
}
