//! Mock transports and connections for agent and HTTP client testing

#![allow(dead_code)]

use core::time::Duration;
use libconvo::network::application::http::{
    Event, EventHandler, Method, Request, ResponseInfo, Transport,
};
use libconvo::network::error::Error;
use libconvo::network::prelude::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A request as seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A scripted reply for one exchange
#[derive(Debug, Clone)]
pub enum Reply {
    /// Deliver `body` in `chunk`-sized data events and answer with `status`
    Response {
        status: u16,
        body: Vec<u8>,
        chunk: usize,
        chunked: bool,
    },
    /// Fail the exchange after the request was written
    Fail(Error),
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Reply::Response {
            status,
            body: body.as_bytes().to_vec(),
            chunk: 7,
            chunked: false,
        }
    }
}

/// Transport that replays scripted replies and records every request
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: VecDeque<Reply>,
    pub requests: Vec<RecordedRequest>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, reply: Reply) -> Self {
        self.replies.push_back(reply);
        self
    }

    pub fn push_reply(&mut self, reply: Reply) {
        self.replies.push_back(reply);
    }
}

impl Transport for MockTransport {
    fn perform<H: EventHandler>(
        &mut self,
        request: &Request<'_>,
        handler: &mut H,
    ) -> Result<u16, Error> {
        self.requests.push(RecordedRequest {
            method: request.method,
            url: request.url.to_string(),
            headers: request
                .headers
                .iter()
                .map(|h| (h.name.as_str().to_string(), h.value.as_str().to_string()))
                .collect(),
            body: request.body.map(|b| b.to_vec()),
            timeout: request.timeout,
        });

        let reply = self
            .replies
            .pop_front()
            .expect("MockTransport has no scripted reply");

        match reply {
            Reply::Fail(err) => {
                let info = ResponseInfo::default();
                let _ = handler.on_event(Event::Error, &info);
                let _ = handler.on_event(Event::Disconnected, &info);
                Err(err)
            }
            Reply::Response {
                status,
                body,
                chunk,
                chunked,
            } => {
                let info = ResponseInfo {
                    status_code: status,
                    content_length: if chunked { None } else { Some(body.len()) },
                    chunked,
                };
                for piece in body.chunks(chunk.max(1)) {
                    if handler.on_event(Event::Data(piece), &info).is_err() {
                        let _ = handler.on_event(Event::Disconnected, &info);
                        return Ok(status);
                    }
                }
                let _ = handler.on_event(Event::Finish, &info);
                let _ = handler.on_event(Event::Disconnected, &info);
                Ok(status)
            }
        }
    }
}

/// Connection that serves a canned byte stream and records what is written
#[derive(Debug)]
pub struct ScriptedConnection {
    response: Vec<u8>,
    read_pos: usize,
    read_size: usize,
    fail_read_at: Option<usize>,
    written: Rc<RefCell<Vec<u8>>>,
    closed: Rc<RefCell<bool>>,
}

impl Read for ScriptedConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if let Some(limit) = self.fail_read_at {
            if self.read_pos >= limit {
                return Err(Error::Timeout);
            }
        }
        let remaining = self.response.len() - self.read_pos;
        let to_read = buf.len().min(remaining).min(self.read_size);
        buf[..to_read].copy_from_slice(&self.response[self.read_pos..self.read_pos + to_read]);
        self.read_pos += to_read;
        Ok(to_read)
    }
}

impl Write for ScriptedConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.written.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for ScriptedConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        *self.closed.borrow_mut() = true;
        Ok(())
    }
}

impl Connection for ScriptedConnection {}

/// Connector handing out one [`ScriptedConnection`] per call
#[derive(Debug, Default)]
pub struct ScriptedConnector {
    responses: VecDeque<Vec<u8>>,
    pub read_size: usize,
    pub fail_read_at: Option<usize>,
    pub refuse: bool,
    pub remotes: Vec<(String, Duration)>,
    pub written: Rc<RefCell<Vec<u8>>>,
    pub closed: Rc<RefCell<bool>>,
}

impl ScriptedConnector {
    pub fn new(response: &[u8]) -> Self {
        let mut connector = Self {
            read_size: 64,
            ..Self::default()
        };
        connector.responses.push_back(response.to_vec());
        connector
    }

    pub fn written_text(&self) -> String {
        String::from_utf8(self.written.borrow().clone()).unwrap()
    }
}

impl Connect for ScriptedConnector {
    type Connection = ScriptedConnection;
    type Error = Error;

    fn connect(
        &mut self,
        remote: &str,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error> {
        self.remotes.push((remote.to_string(), timeout));
        if self.refuse {
            return Err(Error::ConnectionRefused);
        }
        Ok(ScriptedConnection {
            response: self.responses.pop_front().unwrap_or_default(),
            read_pos: 0,
            read_size: self.read_size,
            fail_read_at: self.fail_read_at,
            written: self.written.clone(),
            closed: self.closed.clone(),
        })
    }
}

/// Owned copy of an [`Event`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    Error,
    Data(Vec<u8>),
    Finish,
    Disconnected,
}

/// Handler that records every event it receives
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Recorded>,
    pub infos: Vec<ResponseInfo>,
    pub reject_data: bool,
}

impl Recorder {
    pub fn body(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Recorded::Data(d) => Some(d.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .map(|e| match e {
                Recorded::Error => "error",
                Recorded::Data(_) => "data",
                Recorded::Finish => "finish",
                Recorded::Disconnected => "disconnected",
            })
            .collect()
    }
}

impl EventHandler for Recorder {
    type Error = ();

    fn on_event(&mut self, event: Event<'_>, info: &ResponseInfo) -> Result<(), ()> {
        self.infos.push(*info);
        match event {
            Event::Error => self.events.push(Recorded::Error),
            Event::Data(data) => {
                if self.reject_data {
                    return Err(());
                }
                self.events.push(Recorded::Data(data.to_vec()));
            }
            Event::Finish => self.events.push(Recorded::Finish),
            Event::Disconnected => self.events.push(Recorded::Disconnected),
        }
        Ok(())
    }
}
