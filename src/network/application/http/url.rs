use crate::network::error::Error;
use core::fmt::Write;
use heapless::String;

/// Maximum length of an origin string handed to a connector.
pub const MAX_ORIGIN_LEN: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

/// A borrowed view of an absolute `http`/`https` URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Url<'a> {
    pub scheme: Scheme,
    pub host: &'a str,
    pub port: u16,
    /// Path and query, always starting with `/`.
    pub path: &'a str,
}

impl<'a> Url<'a> {
    pub fn parse(input: &'a str) -> Result<Self, Error> {
        let (scheme, rest) = if let Some(rest) = input.strip_prefix("https://") {
            (Scheme::Https, rest)
        } else if let Some(rest) = input.strip_prefix("http://") {
            (Scheme::Http, rest)
        } else {
            return Err(Error::InvalidAddress);
        };

        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/"),
        };

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => (
                host,
                port.parse::<u16>().map_err(|_| Error::InvalidAddress)?,
            ),
            None => (authority, scheme.default_port()),
        };

        if host.is_empty() {
            return Err(Error::InvalidAddress);
        }

        Ok(Self {
            scheme,
            host,
            port,
            path,
        })
    }

    /// `scheme://host:port`, the form connectors receive.
    pub fn origin(&self) -> Result<String<MAX_ORIGIN_LEN>, Error> {
        let mut origin = String::new();
        write!(origin, "{}://{}:{}", self.scheme.as_str(), self.host, self.port)
            .map_err(|_| Error::InvalidAddress)?;
        Ok(origin)
    }

    /// Value for the `Host` header; the port is omitted when it is the scheme default.
    pub fn host_header(&self) -> Result<String<MAX_ORIGIN_LEN>, Error> {
        let mut host = String::new();
        if self.port == self.scheme.default_port() {
            host.push_str(self.host).map_err(|_| Error::InvalidAddress)?;
        } else {
            write!(host, "{}:{}", self.host, self.port).map_err(|_| Error::InvalidAddress)?;
        }
        Ok(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_with_default_port() {
        let url =
            Url::parse("https://api.agora.io/api/conversational-ai-agent/v2/projects/app/join")
                .unwrap();
        assert_eq!(url.scheme, Scheme::Https);
        assert_eq!(url.host, "api.agora.io");
        assert_eq!(url.port, 443);
        assert_eq!(url.path, "/api/conversational-ai-agent/v2/projects/app/join");
        assert_eq!(url.origin().unwrap().as_str(), "https://api.agora.io:443");
        assert_eq!(url.host_header().unwrap().as_str(), "api.agora.io");
    }

    #[test]
    fn parses_explicit_port_and_bare_host() {
        let url = Url::parse("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme, Scheme::Http);
        assert_eq!(url.port, 8080);
        assert_eq!(url.path, "/");
        assert_eq!(url.host_header().unwrap().as_str(), "127.0.0.1:8080");
    }

    #[test]
    fn rejects_unknown_scheme_and_bad_port() {
        assert_eq!(Url::parse("ftp://host/file"), Err(Error::InvalidAddress));
        assert_eq!(Url::parse("http://host:99999/"), Err(Error::InvalidAddress));
        assert_eq!(Url::parse("http:///path"), Err(Error::InvalidAddress));
    }
}
