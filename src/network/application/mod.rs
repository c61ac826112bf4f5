//! # Application Layer Network Protocols
//!
//! This module contains the application layer (OSI Layer 7) protocol used by the
//! agent session layer. The implementation works with the core network traits and
//! keeps a consistent API for embedded systems.
//!
//! ## Available Protocols
//!
//! - **[`http`]**: HTTP/1.1 client that streams a response to an event handler
//!
//! ## Design Principles
//!
//! - **Connection Agnostic**: Work with any connector implementing [`Connect`](crate::network::Connect)
//! - **No-std Compatible**: Request and header handling use fixed-size buffers
//! - **Resource Conscious**: The response body is never buffered by the client itself;
//!   the handler decides how much of it to keep
//! - **Error Handling**: Every failure is reported as a [`network::error::Error`](crate::network::error::Error)

/// HTTP client implementation.
///
/// Provides a blocking HTTP/1.1 client suitable for embedded systems that
/// delivers the response body as a sequence of events.
pub mod http;
