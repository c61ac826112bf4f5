//! Session state shared by the controller and the response parser.

use heapless::String;

/// Capacity of the application id.
pub const MAX_APP_ID_LEN: usize = 64;
/// Capacity of the agent id; longer ids are truncated.
pub const MAX_AGENT_ID_LEN: usize = 64;

/// The single active agent session.
///
/// `agent_id` is empty while no agent is running. It is only written by the
/// response parser after a join and cleared after a successful leave.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    app_id: String<MAX_APP_ID_LEN>,
    agent_id: String<MAX_AGENT_ID_LEN>,
}

impl SessionState {
    /// Start with no active agent. An app id longer than
    /// [`MAX_APP_ID_LEN`] is truncated.
    pub fn new(app_id: &str) -> Self {
        Self {
            app_id: truncated(app_id),
            agent_id: String::new(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn is_active(&self) -> bool {
        !self.agent_id.is_empty()
    }

    /// Replace the agent id.
    pub fn set_agent_id(&mut self, agent_id: &str) {
        self.agent_id = truncated(agent_id);
    }

    pub fn clear_agent_id(&mut self) {
        self.agent_id.clear();
    }
}

/// Copy at most `N` bytes of `value`, cutting on a character boundary.
fn truncated<const N: usize>(value: &str) -> String<N> {
    let mut end = value.len().min(N);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::new();
    // Fits by construction.
    let _ = out.push_str(&value[..end]);
    out
}
