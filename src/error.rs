use thiserror::Error;

/// Errors returned by the driver outside the fire-and-forget command path.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to open \"{port_name}\"")]
    OpenPort {
        port_name: String,
        source: serialport::Error,
    },
}
