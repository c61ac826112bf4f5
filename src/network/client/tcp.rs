//! Plain TCP connector backed by `std::net::TcpStream`.

use crate::network::application::http::url::{Scheme, Url};
use crate::network::error::Error;
use crate::network::{Close, Connect, Connection, Read, Write};
use core::time::Duration;
use std::io::{ErrorKind, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream};

/// A connection over a blocking TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl Read for TcpConnection {
    type Error = Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream.read(buf).map_err(|e| match e.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => Error::Timeout,
            _ => Error::ReadError,
        })
    }
}

impl Write for TcpConnection {
    type Error = Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|e| match e.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => Error::Timeout,
            _ => Error::WriteError,
        })
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;
    fn close(self) -> Result<(), Self::Error> {
        // The peer may already have closed its side.
        let _ = self.stream.shutdown(Shutdown::Both);
        Ok(())
    }
}

impl Connection for TcpConnection {}

/// Connector for `http://` origins.
///
/// `https://` origins are refused with [`Error::InvalidAddress`]; TLS belongs to
/// the platform connector.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(
        &mut self,
        remote: &str,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error> {
        let url = Url::parse(remote)?;
        if url.scheme != Scheme::Http {
            return Err(Error::InvalidAddress);
        }
        let stream =
            TcpStream::connect((url.host, url.port)).map_err(|_| Error::ConnectionRefused)?;
        stream
            .set_read_timeout(Some(timeout))
            .map_err(|_| Error::NotOpen)?;
        stream
            .set_write_timeout(Some(timeout))
            .map_err(|_| Error::NotOpen)?;
        Ok(TcpConnection { stream })
    }
}
