//! Join/leave response parsing.

use super::error::Error;
use super::session::SessionState;
use serde_json::Value;

/// Fields of interest found in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgentResponse<'a> {
    pub agent_id: Option<&'a str>,
    pub status: Option<&'a str>,
}

/// Apply a response body to `session`.
///
/// The body must be a JSON object. A string `agent_id` replaces the session's
/// agent id; a string `status` is only logged. Missing fields, or fields of
/// another type, are ignored. On [`Error::ParseError`] the session is untouched.
pub fn apply(body: &[u8], session: &mut SessionState) -> Result<(), Error> {
    let root: Value = serde_json::from_slice(body).map_err(|err| {
        tracing::error!("JSON parse error: {}", err);
        Error::ParseError
    })?;
    let response = inspect(&root)?;

    if let Some(agent_id) = response.agent_id {
        session.set_agent_id(agent_id);
        tracing::info!("Agent ID: {}", session.agent_id());
    }
    if let Some(status) = response.status {
        tracing::info!("Status: {}", status);
    }
    Ok(())
}

fn inspect(root: &Value) -> Result<AgentResponse<'_>, Error> {
    let object = root.as_object().ok_or_else(|| {
        tracing::error!("response is not a JSON object");
        Error::ParseError
    })?;
    Ok(AgentResponse {
        agent_id: object.get("agent_id").and_then(Value::as_str),
        status: object.get("status").and_then(Value::as_str),
    })
}
