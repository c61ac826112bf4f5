//! Start/stop orchestration for the conversational agent.

use super::accumulator::Accumulator;
use super::base64::basic_auth_header;
use super::config::AgentConfig;
use super::error::Error;
use super::request::build_join_body;
use super::session::SessionState;
use crate::network::application::http::client::MAX_HEADERS;
use crate::network::application::http::{Header, Method, Request, Transport};
use core::fmt::Write;
use heapless::{String, Vec};

/// Capacity of a formatted join or leave URL.
pub const MAX_URL_LEN: usize = 512;

const HTTP_OK: u16 = 200;

/// Owns the transport, the configuration and the session state, and runs one
/// exchange at a time.
///
/// A response body is parsed into a staged copy of the state that is committed
/// once the exchange completes, so a transport failure never leaves a
/// half-applied session behind.
#[derive(Debug)]
pub struct SessionController<'a, T: Transport> {
    transport: T,
    config: AgentConfig<'a>,
    session: SessionState,
}

impl<'a, T: Transport> SessionController<'a, T> {
    pub fn new(transport: T, config: AgentConfig<'a>, app_id: &str) -> Self {
        Self::with_session(transport, config, SessionState::new(app_id))
    }

    pub fn with_session(transport: T, config: AgentConfig<'a>, session: SessionState) -> Self {
        Self {
            transport,
            config,
            session,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn agent_id(&self) -> &str {
        self.session.agent_id()
    }

    pub fn config(&self) -> &AgentConfig<'a> {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_parts(self) -> (T, SessionState) {
        (self.transport, self.session)
    }

    /// Start the agent, logging the outcome.
    pub fn start(&mut self) {
        if let Err(err) = self.try_start() {
            tracing::error!("AI agent start failed: {}", err);
        }
    }

    /// Stop the agent, logging the outcome.
    pub fn stop(&mut self) {
        if let Err(err) = self.try_stop() {
            tracing::error!("AI agent stop failed: {}", err);
        }
    }

    /// POST the join document and record the returned agent id.
    pub fn try_start(&mut self) -> Result<(), Error> {
        tracing::info!("Starting AI agent");

        let mut url: String<MAX_URL_LEN> = String::new();
        write!(
            url,
            "{}/{}/join",
            self.config.api.base_url,
            self.session.app_id()
        )
        .map_err(|_| Error::AllocationFailure)?;

        let body = build_join_body(&self.config).inspect_err(|_| {
            tracing::error!("failed to build join request");
        })?;

        let mut headers = Vec::new();
        push_header(&mut headers, "Content-Type", "application/json")?;
        self.push_authorization(&mut headers)?;

        let request = Request {
            method: Method::Post,
            url: url.as_str(),
            headers,
            body: Some(&body[..]),
            timeout: self.config.protocol.exchange_timeout,
        };

        self.exchange(&request)?;
        tracing::info!("AI agent started successfully");
        Ok(())
    }

    /// POST to the leave URL of the active agent and clear it on success.
    ///
    /// Without an active agent nothing is sent and [`Error::Precondition`] is
    /// returned.
    pub fn try_stop(&mut self) -> Result<(), Error> {
        if !self.session.is_active() {
            tracing::warn!("no agent_id, nothing to stop");
            return Err(Error::Precondition);
        }

        tracing::info!("Stopping AI agent {}", self.session.agent_id());

        let mut url: String<MAX_URL_LEN> = String::new();
        write!(
            url,
            "{}/{}/agents/{}/leave",
            self.config.api.base_url,
            self.session.app_id(),
            self.session.agent_id()
        )
        .map_err(|_| Error::AllocationFailure)?;

        let mut headers = Vec::new();
        self.push_authorization(&mut headers)?;

        let request = Request {
            method: Method::Post,
            url: url.as_str(),
            headers,
            body: None,
            timeout: self.config.protocol.exchange_timeout,
        };

        self.exchange(&request)?;
        self.session.clear_agent_id();
        tracing::info!("AI agent stopped successfully");
        Ok(())
    }

    fn push_authorization(&self, headers: &mut Vec<Header, MAX_HEADERS>) -> Result<(), Error> {
        let auth = basic_auth_header(self.config.api.key, self.config.api.secret)?;
        push_header(headers, "Authorization", &auth)
    }

    /// Run one exchange against a staged copy of the session.
    ///
    /// The copy is committed whenever the exchange completes, whatever the
    /// status; a transport error drops it and leaves the session untouched.
    /// A body that could not be stored or parsed is logged and does not change
    /// the outcome, which is decided by the status code alone.
    fn exchange(&mut self, request: &Request<'_>) -> Result<(), Error> {
        let mut staged = self.session.clone();
        let (status, failure) = {
            let mut accumulator = Accumulator::dynamic(&mut staged);
            let status = self.transport.perform(request, &mut accumulator);
            (status, accumulator.failure())
        };

        let status = status.map_err(|err| {
            tracing::error!("HTTP request to {} failed: {}", request.url, err);
            Error::Transport(err)
        })?;
        if let Some(err) = failure {
            tracing::warn!("response body from {} dropped: {}", request.url, err);
        }
        self.session = staged;

        if status != HTTP_OK {
            tracing::warn!("{} returned HTTP status {}", request.url, status);
            return Err(Error::HttpStatus(status));
        }
        Ok(())
    }
}

fn push_header(
    headers: &mut Vec<Header, MAX_HEADERS>,
    name: &str,
    value: &str,
) -> Result<(), Error> {
    let header = Header::new(name, value).map_err(|_| Error::AllocationFailure)?;
    headers.push(header).map_err(|_| Error::AllocationFailure)
}
