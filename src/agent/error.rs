//! Error types for agent session operations

use crate::network::error::Error as NetworkError;
use core::fmt;

/// Everything that can end a Start or Stop exchange early.
///
/// None of these are retried. The fire-and-forget entry points log them and
/// return; the `try_*` entry points hand them back to the caller.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A buffer or the request document could not be allocated, or the
    /// response declared no usable content length.
    AllocationFailure,
    /// Opening, writing, reading or timing out on the exchange.
    Transport(NetworkError),
    /// The server answered with something other than `200`.
    HttpStatus(u16),
    /// The response body was not a JSON object.
    ParseError,
    /// Stop was requested without an active agent.
    Precondition,
    /// An output buffer is shorter than the encoding needs.
    BufferTooSmall,
    /// A required build-time configuration value is missing or malformed.
    Config(&'static str),
}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Transport(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AllocationFailure => f.write_str("allocation failure"),
            Error::Transport(err) => write!(f, "transport error: {}", err),
            Error::HttpStatus(code) => write!(f, "unexpected HTTP status {}", code),
            Error::ParseError => f.write_str("response is not a JSON object"),
            Error::Precondition => f.write_str("no active agent"),
            Error::BufferTooSmall => f.write_str("output buffer too small"),
            Error::Config(name) => write!(f, "missing or invalid configuration value {}", name),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::AllocationFailure => defmt::write!(f, "AllocationFailure"),
            Error::Transport(err) => defmt::write!(f, "Transport({})", err),
            Error::HttpStatus(code) => defmt::write!(f, "HttpStatus({})", code),
            Error::ParseError => defmt::write!(f, "ParseError"),
            Error::Precondition => defmt::write!(f, "Precondition"),
            Error::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
            Error::Config(name) => defmt::write!(f, "Config({=str})", *name),
        }
    }
}
