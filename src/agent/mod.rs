//! # Conversational Agent Sessions
//!
//! This module starts and stops a remote conversational AI agent over HTTP. A
//! device keeps at most one agent running at a time; its id lives in a
//! [`SessionState`] owned by the [`SessionController`].
//!
//! ## Flow
//!
//! 1. **Start** formats `<base>/<app_id>/join`, builds the Basic credentials and
//!    the JSON join document, and performs one blocking POST.
//! 2. The transport streams the response into an [`Accumulator`], which parses
//!    the finished body and picks up `agent_id`.
//! 3. **Stop** POSTs to `<base>/<app_id>/agents/<agent_id>/leave` and clears the
//!    id once the server answers `200`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use libconvo::agent::{AgentConfig, SessionController};
//! use libconvo::network::application::http::Client;
//! # use core::time::Duration;
//! # use libconvo::network::error::Error;
//! # use libconvo::network::{Close, Connect, Connection, Read, Write};
//! # struct TlsConnection;
//! # impl Connection for TlsConnection {}
//! # impl Read for TlsConnection {
//! #     type Error = Error;
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Error> { Ok(0) }
//! # }
//! # impl Write for TlsConnection {
//! #     type Error = Error;
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Error> { Ok(()) }
//! # }
//! # impl Close for TlsConnection {
//! #     type Error = Error;
//! #     fn close(self) -> Result<(), Error> { Ok(()) }
//! # }
//! # struct TlsConnector;
//! # impl Connect for TlsConnector {
//! #     type Connection = TlsConnection;
//! #     type Error = Error;
//! #     fn connect(&mut self, _remote: &str, _timeout: Duration) -> Result<TlsConnection, Error> { Ok(TlsConnection) }
//! # }
//!
//! let config = AgentConfig::from_build_env().expect("device configuration");
//! let mut controller = SessionController::new(Client::new(TlsConnector), config, "my-app-id");
//!
//! controller.start();
//! if controller.is_active() {
//!     // ... converse ...
//!     controller.stop();
//! }
//! ```

#![allow(missing_docs)]
#![deny(unsafe_code)]

pub mod accumulator;
pub mod base64;
pub mod buffer;
pub mod config;
pub mod controller;
pub mod error;
pub mod request;
pub mod response;
pub mod session;

pub use accumulator::{Accumulator, State};
pub use buffer::{Append, ResponseBuffer};
pub use config::{AgentConfig, ApiConfig, AsrConfig, LlmConfig, ProtocolSettings, TtsConfig};
pub use controller::SessionController;
pub use error::Error;
pub use request::{JoinRequest, build_join_body};
pub use session::SessionState;
