use serialport::{DataBits, Parity, SerialPort, StopBits};
use std::io::Write;

use dfplayer_frame::CommandFrame;

use crate::debug;
use crate::error::DriverError;
use crate::timer::{self, Delay};

/// Fixed line rate of the module.
pub const BAUD_RATE: u32 = 9600;
pub const TIMEOUT_MS: u64 = 100;

/// Opens `port_name` at 9600 baud, 8N1.
///
/// # Arguments
///
/// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
pub fn open(port_name: &str) -> Result<Box<dyn SerialPort>, DriverError> {
    let port = serialport::new(port_name, BAUD_RATE)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .timeout(std::time::Duration::from_millis(TIMEOUT_MS))
        .open()
        .map_err(|source| DriverError::OpenPort {
            port_name: port_name.to_string(),
            source,
        })?;
    tracing::info!(port_name, baud_rate = BAUD_RATE, "opened serial port");
    Ok(port)
}

fn send_data<W: Write + ?Sized>(port: &mut W, data: &[u8]) {
    match port.write_all(data) {
        Ok(()) => tracing::trace!(bytes = %debug::to_string(data), "wrote frame"),
        Err(e) => tracing::warn!(error = %e, bytes = %debug::to_string(data), "failed to write frame"),
    }
}

/// Writes `frame` and then blocks for the settling delay.
///
/// Write errors are logged and otherwise ignored. The module gives no
/// acknowledgment, so there is nothing to retry against.
pub fn send_frame<W, D>(port: &mut W, delay: &mut D, frame: &CommandFrame)
where
    W: Write + ?Sized,
    D: Delay + ?Sized,
{
    send_data(port, frame.as_bytes());
    delay.delay_ms(timer::SETTLE_DELAY_MS);
}
