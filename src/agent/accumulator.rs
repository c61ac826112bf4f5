//! Response accumulation for a single exchange.
//!
//! The [`Accumulator`] is the [`EventHandler`] handed to the transport. It
//! collects the body into a [`ResponseBuffer`] and, once the transport reports
//! the end of the body, parses it into the session state.
//!
//! ```text
//!            Data               Finish
//!   Idle ──────────▶ Receiving ──────────▶ Complete
//!     │                  │
//!     │ Error            │ Error / allocation failure
//!     ▼                  ▼
//!   Failed ◀─────────────┘
//!
//!   Disconnected (any state) ──▶ Idle, heap region released
//! ```
//!
//! Once disconnected the accumulator takes no more data, so one exchange never
//! allocates twice.
//!
//! Chunked responses are not accumulated: their data events leave the buffer
//! untouched, so a chunked body never reaches the parser.

use super::buffer::ResponseBuffer;
use super::error::Error;
use super::response;
use super::session::SessionState;
use crate::network::application::http::{Event, EventHandler, ResponseInfo};

/// Accumulator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Receiving,
    Complete,
    Failed,
}

/// Collects one response body and applies it to a [`SessionState`].
#[derive(Debug)]
pub struct Accumulator<'a> {
    state: State,
    buffer: ResponseBuffer<'a>,
    session: &'a mut SessionState,
    releases: usize,
    failure: Option<Error>,
    disconnected: bool,
}

impl<'a> Accumulator<'a> {
    /// Accumulate into a heap region sized from `Content-Length`.
    pub fn dynamic(session: &'a mut SessionState) -> Self {
        Self::with_buffer(ResponseBuffer::dynamic(), session)
    }

    /// Accumulate into `region`, truncating anything that does not fit.
    pub fn fixed(region: &'a mut [u8], session: &'a mut SessionState) -> Self {
        Self::with_buffer(ResponseBuffer::fixed(region), session)
    }

    pub fn with_buffer(buffer: ResponseBuffer<'a>, session: &'a mut SessionState) -> Self {
        Self {
            state: State::Idle,
            buffer,
            session,
            releases: 0,
            failure: None,
            disconnected: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn buffer(&self) -> &ResponseBuffer<'a> {
        &self.buffer
    }

    pub fn session(&self) -> &SessionState {
        &*self.session
    }

    /// The error that made a data or finish event fail, if any.
    pub fn failure(&self) -> Option<Error> {
        self.failure
    }

    /// How many heap regions this accumulator has freed.
    pub fn releases(&self) -> usize {
        self.releases
    }

    /// Drive the state machine with one transport event.
    ///
    /// Returns [`Error::AllocationFailure`] when the body cannot be stored and
    /// [`Error::ParseError`] when a finished body is not a JSON object.
    pub fn handle(&mut self, event: Event<'_>, info: &ResponseInfo) -> Result<(), Error> {
        match event {
            Event::Error => {
                tracing::error!("transport reported an error, dropping response");
                self.state = State::Failed;
                Ok(())
            }
            Event::Data(chunk) => self.on_data(chunk, info),
            Event::Finish => self.on_finish(),
            Event::Disconnected => {
                self.release();
                self.state = State::Idle;
                self.disconnected = true;
                Ok(())
            }
        }
    }

    fn on_data(&mut self, chunk: &[u8], info: &ResponseInfo) -> Result<(), Error> {
        if self.disconnected
            || matches!(self.state, State::Failed | State::Complete)
            || info.chunked
        {
            return Ok(());
        }

        if self.buffer.needs_allocation() {
            let declared = info.content_length.unwrap_or(0);
            if let Err(err) = self.buffer.allocate(declared) {
                tracing::error!(
                    "cannot allocate response buffer for {} declared bytes",
                    declared
                );
                self.state = State::Failed;
                self.failure = Some(err);
                return Err(err);
            }
        }

        let append = self.buffer.append(chunk)?;
        if append.truncated > 0 {
            tracing::debug!(
                "response body truncated: {} of {} bytes kept",
                append.copied,
                chunk.len()
            );
        }
        self.state = State::Receiving;
        Ok(())
    }

    fn on_finish(&mut self) -> Result<(), Error> {
        if self.state == State::Failed {
            self.release();
            return Ok(());
        }
        self.state = State::Complete;

        let result = if self.buffer.written() > 0 {
            response::apply(self.buffer.as_bytes(), self.session)
        } else {
            Ok(())
        };
        self.release();
        if let Err(err) = result {
            self.failure = Some(err);
        }
        result
    }

    fn release(&mut self) {
        if self.buffer.release() {
            self.releases += 1;
            tracing::debug!("response buffer released");
        }
    }
}

impl EventHandler for Accumulator<'_> {
    type Error = Error;

    fn on_event(&mut self, event: Event<'_>, info: &ResponseInfo) -> Result<(), Error> {
        self.handle(event, info)
    }
}
