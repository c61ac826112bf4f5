//! A network abstraction layer for embedded systems
//!
//! This module provides the transport traits the agent session layer is built on,
//! together with the HTTP/1.1 client that drives a single request/response exchange
//! over any connection type implementing them.
//!

#![allow(missing_docs)]
#![deny(unsafe_code)]

use core::time::Duration;

/// Common error types for network operations
pub mod error;

/// Application layer protocols
pub mod application;

/// Platform connectors
pub mod client;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Connection, Read, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous connector (client)
///
/// `remote` is an origin of the form `scheme://host:port`. Connectors for `https`
/// origins are responsible for the TLS handshake and certificate validation.
/// Reads and writes on the returned connection should fail once `timeout`
/// elapses without progress.
pub trait Connect {
    /// Associated connection type
    type Connection: Connection;
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection
    fn connect(&mut self, remote: &str, timeout: Duration)
    -> Result<Self::Connection, Self::Error>;
}
