//! # libconvo - Conversational Agent Sessions for IoT Devices
//!
//! A Rust library that lets an embedded device start and stop a remote
//! conversational AI agent over HTTP. It is designed for memory-constrained
//! systems: the crate is `no_std` and only needs an allocator for the response
//! body of a join or leave call.
//!
//! ## Features
//!
//! ### Agent Sessions
//! - **Session Controller**: Start and Stop exchanges with Basic authentication
//! - **Request Builder**: Deterministic JSON join document from a configuration record
//! - **Response Accumulator**: Event-driven body collection into a fixed or heap buffer
//! - **Base64**: Credential encoding with exact padding
//!
//! ### Network
//! - **HTTP Client**: Blocking HTTP/1.1 exchanges over any [`Connect`](network::Connect)
//!   implementation, streaming the response to an event handler
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libconvo = "0.1.0"
//! ```
//!
//! ### Starting and Stopping an Agent
//!
//! ```rust,no_run
//! use libconvo::agent::SessionController;
//! use libconvo::agent::config::AgentConfig;
//! use libconvo::network::application::http::Client;
//! # use core::time::Duration;
//! # use libconvo::network::error::Error;
//! # use libconvo::network::{Close, Connect, Connection, Read, Write};
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
//!
//! let config = AgentConfig::from_build_env().expect("device configuration");
//! let mut controller = SessionController::new(Client::new(MockConnector), config, "app-id");
//!
//! // controller.start();
//! // controller.stop();
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers with a heap (ESP32, ARM Cortex-M with an allocator, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the plain-TCP connector (default: disabled)
//! - `defmt`: Enable defmt formatting of error types for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

/// Conversational agent session management.
///
/// Builds the join document, authorizes and performs the Start and Stop
/// exchanges, and keeps the id of the running agent.
pub mod agent;

/// Network abstraction layer providing the HTTP client and connection traits.
///
/// The agent layer performs its exchanges through these traits, so any
/// transport (TLS socket, modem AT stack, host TCP) can be plugged in.
pub mod network;
