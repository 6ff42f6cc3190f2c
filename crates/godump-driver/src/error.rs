use godump_decoder::DecodeError;
use godump_wire::WireError;

/// Errors from a driver pass: either the decode failed, or writing the
/// rendering to the output sink did.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// I/O failure on the output side.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<WireError> for DriverError {
    fn from(e: WireError) -> Self {
        Self::Decode(e.into())
    }
}
