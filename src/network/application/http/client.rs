use super::url::Url;
use crate::network::error::Error;
use crate::network::{Close, Connect, Read, Write};
use core::fmt::Write as _;
use core::time::Duration;
use heapless::{String, Vec};

pub const MAX_HEADERS: usize = 16;
const MAX_HEADER_NAME_LEN: usize = 64;
const MAX_HEADER_VALUE_LEN: usize = 256;
const MAX_REQUEST_HEAD_LEN: usize = 1024;
const MAX_RESPONSE_HEAD_LEN: usize = 1024;
const READ_CHUNK_LEN: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Header {
    pub name: String<MAX_HEADER_NAME_LEN>,
    pub value: String<MAX_HEADER_VALUE_LEN>,
}

impl Header {
    pub fn new(name: &str, value: &str) -> Result<Self, Error> {
        Ok(Self {
            name: String::try_from(name).map_err(|_| Error::ProtocolError)?,
            value: String::try_from(value).map_err(|_| Error::ProtocolError)?,
        })
    }
}

#[derive(Debug)]
pub struct Request<'a> {
    pub method: Method,
    /// Absolute `http://` or `https://` URL.
    pub url: &'a str,
    pub headers: Vec<Header, MAX_HEADERS>,
    pub body: Option<&'a [u8]>,
    /// Handed to the connector; applies to connect, each write and each read.
    pub timeout: Duration,
}

/// What is known about the response when an event is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseInfo {
    /// Zero until the status line has been read.
    pub status_code: u16,
    /// Value of the `Content-Length` header, if present and well formed.
    pub content_length: Option<usize>,
    /// `Transfer-Encoding: chunked` was announced.
    pub chunked: bool,
}

/// Events delivered to an [`EventHandler`] during one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Connecting, writing or reading failed.
    Error,
    /// A slice of the response body, exactly as read from the connection.
    Data(&'a [u8]),
    /// The whole body has been read.
    Finish,
    /// The connection has been closed.
    Disconnected,
}

/// Receives response events while [`Transport::perform`] runs.
pub trait EventHandler {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Handle one event. An error returned for [`Event::Data`] stops reading the
    /// body: no [`Event::Finish`] follows, but the status code is still returned.
    /// Errors for the other events are only logged.
    fn on_event(&mut self, event: Event<'_>, info: &ResponseInfo) -> Result<(), Self::Error>;
}

/// A blocking request/response exchange.
pub trait Transport {
    /// Perform `request`, deliver the response to `handler` and return the status code.
    ///
    /// All handler events have been delivered by the time this returns.
    fn perform<H: EventHandler>(
        &mut self,
        request: &Request<'_>,
        handler: &mut H,
    ) -> Result<u16, Error>;
}

#[derive(Debug)]
pub struct Client<N: Connect> {
    connector: N,
}

impl<N: Connect> Client<N> {
    pub fn new(connector: N) -> Self {
        Self { connector }
    }

    pub fn connector(&self) -> &N {
        &self.connector
    }

    pub fn connector_mut(&mut self) -> &mut N {
        &mut self.connector
    }
}

impl<N> Transport for Client<N>
where
    N: Connect<Error = Error>,
    N::Connection: Read<Error = Error> + Write<Error = Error>,
{
    fn perform<H: EventHandler>(
        &mut self,
        request: &Request<'_>,
        handler: &mut H,
    ) -> Result<u16, Error> {
        let mut info = ResponseInfo::default();
        let url = Url::parse(request.url)?;
        let origin = url.origin()?;

        let mut connection = match self.connector.connect(&origin, request.timeout) {
            Ok(connection) => connection,
            Err(err) => {
                tracing::error!("connect to {} failed: {}", origin.as_str(), err);
                notify(handler, Event::Error, &info);
                return Err(err);
            }
        };

        let result = exchange(&mut connection, &url, request, handler, &mut info);
        match result {
            Ok(()) => notify(handler, Event::Finish, &info),
            // The handler already knows why it aborted.
            Err(Error::Aborted) => {}
            Err(err) => {
                tracing::error!("HTTP exchange with {} failed: {}", origin.as_str(), err);
                notify(handler, Event::Error, &info);
            }
        }

        if let Err(err) = connection.close() {
            tracing::debug!("close failed: {:?}", err);
        }
        notify(handler, Event::Disconnected, &info);

        match result {
            // The status line was read before any body was delivered.
            Ok(()) | Err(Error::Aborted) => Ok(info.status_code),
            Err(err) => Err(err),
        }
    }
}

fn notify<H: EventHandler>(handler: &mut H, event: Event<'_>, info: &ResponseInfo) {
    if let Err(err) = handler.on_event(event, info) {
        tracing::debug!("handler rejected {:?}: {:?}", event, err);
    }
}

fn exchange<C, H>(
    connection: &mut C,
    url: &Url<'_>,
    request: &Request<'_>,
    handler: &mut H,
    info: &mut ResponseInfo,
) -> Result<(), Error>
where
    C: Read<Error = Error> + Write<Error = Error>,
    H: EventHandler,
{
    // --- Send Request ---
    let head = build_request_head(url, request)?;
    write_all(connection, &head)?;
    if let Some(body) = request.body {
        write_all(connection, body)?;
    }
    connection.flush()?;

    // --- Receive Response Head ---
    let mut head_buf = [0u8; MAX_RESPONSE_HEAD_LEN];
    let mut total_read = 0;
    let head_end = loop {
        if let Some(pos) = find_slice(&head_buf[..total_read], b"\r\n\r\n") {
            break pos;
        }
        if total_read == head_buf.len() {
            // Headers larger than our window.
            return Err(Error::ProtocolError);
        }
        match connection.read(&mut head_buf[total_read..])? {
            0 => return Err(Error::ConnectionClosed),
            n => total_read += n,
        }
    };
    parse_response_head(&head_buf[..head_end], info)?;

    // --- Receive Body ---
    let mut received = 0;
    let leftover = &head_buf[head_end + 4..total_read];
    if !leftover.is_empty() {
        deliver(handler, leftover, info)?;
        received += leftover.len();
    }

    let mut chunk = [0u8; READ_CHUNK_LEN];
    loop {
        if info.content_length.is_some_and(|len| received >= len) {
            break;
        }
        match connection.read(&mut chunk)? {
            // Peer closed: the body ends here when no length was declared.
            0 => break,
            n => {
                deliver(handler, &chunk[..n], info)?;
                received += n;
            }
        }
    }

    Ok(())
}

fn deliver<H: EventHandler>(
    handler: &mut H,
    data: &[u8],
    info: &ResponseInfo,
) -> Result<(), Error> {
    handler.on_event(Event::Data(data), info).map_err(|err| {
        tracing::warn!("response handler stopped the body: {:?}", err);
        Error::Aborted
    })
}

fn build_request_head(
    url: &Url<'_>,
    request: &Request<'_>,
) -> Result<Vec<u8, MAX_REQUEST_HEAD_LEN>, Error> {
    let mut head: String<MAX_REQUEST_HEAD_LEN> = String::new();

    // Request line
    write!(head, "{} {} HTTP/1.1\r\n", request.method.as_str(), url.path)
        .map_err(|_| Error::WriteError)?;
    write!(head, "Host: {}\r\n", url.host_header()?.as_str()).map_err(|_| Error::WriteError)?;

    // Headers
    for header in &request.headers {
        write!(head, "{}: {}\r\n", header.name.as_str(), header.value.as_str())
            .map_err(|_| Error::WriteError)?;
    }

    match (request.body, request.method) {
        (Some(body), _) => {
            write!(head, "Content-Length: {}\r\n", body.len()).map_err(|_| Error::WriteError)?
        }
        (None, Method::Post) => head
            .push_str("Content-Length: 0\r\n")
            .map_err(|_| Error::WriteError)?,
        (None, Method::Get) => {}
    }

    head.push_str("Connection: close\r\n\r\n")
        .map_err(|_| Error::WriteError)?;

    Ok(head.into_bytes())
}

fn parse_response_head(head: &[u8], info: &mut ResponseInfo) -> Result<(), Error> {
    let header_str = core::str::from_utf8(head).map_err(|_| Error::ProtocolError)?;
    let mut lines = header_str.split("\r\n");

    // Parse status line
    let status_line = lines.next().ok_or(Error::ProtocolError)?;
    let mut status_parts = status_line.splitn(3, ' ');
    let version = status_parts.next().ok_or(Error::ProtocolError)?;
    if !version.starts_with("HTTP/") {
        return Err(Error::ProtocolError);
    }
    let status_code_str = status_parts.next().ok_or(Error::ProtocolError)?;
    info.status_code = status_code_str
        .parse::<u16>()
        .map_err(|_| Error::ProtocolError)?;

    // Parse headers
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let (name, value) = line.split_once(':').ok_or(Error::ProtocolError)?;
        let name = name.trim();
        let value = value.trim();

        if name.eq_ignore_ascii_case("Content-Length") {
            info.content_length = value.parse::<usize>().ok();
        } else if name.eq_ignore_ascii_case("Transfer-Encoding") {
            info.chunked = value
                .split(',')
                .any(|coding| coding.trim().eq_ignore_ascii_case("chunked"));
        }
    }

    Ok(())
}

fn write_all<C: Write<Error = Error>>(connection: &mut C, mut data: &[u8]) -> Result<(), Error> {
    while !data.is_empty() {
        match connection.write(data)? {
            0 => return Err(Error::WriteError),
            n => data = &data[n..],
        }
    }
    Ok(())
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
