//! HTTP/1.1 protocol implementation for embedded systems.
//!
//! This module provides a lightweight HTTP client designed for `no_std`
//! environments. A request is performed as one blocking exchange: the client
//! connects, writes the request, and then reports the response to an
//! [`EventHandler`] as it arrives:
//!
//! - [`Event::Data`] for every slice of body read from the connection
//! - [`Event::Finish`] once the declared body length has been read or the peer closed
//! - [`Event::Error`] when reading or writing fails
//! - [`Event::Disconnected`] after the connection is gone, on every path
//!
//! The handler sees the parsed [`ResponseInfo`] with each event so it can size its
//! storage from `Content-Length` and skip chunked bodies.
//!
//! ```rust,no_run
//! use libconvo::network::application::http::{
//!     Client, Event, EventHandler, Method, Request, ResponseInfo, Transport,
//! };
//! use libconvo::network::error::Error;
//! # use core::time::Duration;
//! # use libconvo::network::prelude::*;
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = Error;
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = Error;
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = Error;
//! #     fn close(self) -> Result<(), Error> { Ok(()) }
//! # }
//! # struct MockConnector;
//! # impl Connect for MockConnector {
//! #     type Connection = MockConnection;
//! #     type Error = Error;
//! #     fn connect(&mut self, _remote: &str, _timeout: Duration) -> Result<MockConnection, Error> { Ok(MockConnection) }
//! # }
//! struct BodyLength(usize);
//!
//! impl EventHandler for BodyLength {
//!     type Error = ();
//!     fn on_event(&mut self, event: Event<'_>, _info: &ResponseInfo) -> Result<(), ()> {
//!         if let Event::Data(data) = event {
//!             self.0 += data.len();
//!         }
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let mut client = Client::new(MockConnector);
//! let request = Request {
//!     method: Method::Get,
//!     url: "http://example.com/api/status",
//!     headers: heapless::Vec::new(),
//!     body: None,
//!     timeout: Duration::from_secs(10),
//! };
//!
//! let mut length = BodyLength(0);
//! let status = client.perform(&request, &mut length)?;
//! # let _ = status;
//! # Ok(())
//! # }
//! ```

/// HTTP client implementation and supporting types.
///
/// Contains the main [`Client`](client::Client) struct and all related types
/// for performing HTTP exchanges and handling response events.
pub mod client;

/// Minimal URL parsing for request targets.
pub mod url;

pub use client::{
    Client, Event, EventHandler, Header, Method, Request, ResponseInfo, Transport,
};
pub use url::{Scheme, Url};
