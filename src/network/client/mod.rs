//! Platform connectors implementing [`Connect`](crate::network::Connect).
//!
//! Embedded targets supply their own connector (usually wrapping the vendor TLS
//! stack). Hosts with the `std` feature get a plain-TCP connector for `http`
//! origins, which is enough for local test servers and proxies.

#[cfg(feature = "std")]
pub mod tcp;

#[cfg(feature = "std")]
pub use tcp::{TcpConnection, TcpConnector};
