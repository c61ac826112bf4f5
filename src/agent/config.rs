//! Agent configuration record.
//!
//! All values are fixed for the life of the process. On the device they come from
//! the firmware build configuration, see [`AgentConfig::from_build_env`].

use super::error::Error;
use core::time::Duration;

/// Conversational AI REST endpoint and its Basic credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig<'a> {
    /// Base URL, e.g. `https://api.agora.io/api/conversational-ai-agent/v2/projects`.
    pub base_url: &'a str,
    /// Customer key.
    pub key: &'a str,
    /// Customer secret.
    pub secret: &'a str,
}

/// Language model settings forwarded to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmConfig<'a> {
    pub url: &'a str,
    pub api_key: &'a str,
    pub model: &'a str,
    pub system_message: &'a str,
    pub greeting: &'a str,
    /// Spoken while the model is unavailable.
    pub failure_message: &'a str,
}

/// Speech synthesis settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtsConfig<'a> {
    pub vendor: &'a str,
    pub key: &'a str,
    pub region: &'a str,
    pub voice_name: &'a str,
}

/// Speech recognition settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsrConfig<'a> {
    pub language: &'a str,
}

/// Protocol constants that do not vary between deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolSettings {
    /// Seconds the agent stays in an empty channel.
    pub idle_timeout: u32,
    /// Conversation turns the model keeps.
    pub max_history: u32,
    pub output_audio_codec: &'static str,
    pub enable_aivad: bool,
    /// Applies to each Start and Stop exchange.
    pub exchange_timeout: Duration,
}

impl Default for ProtocolSettings {
    fn default() -> Self {
        Self {
            idle_timeout: 120,
            max_history: 32,
            output_audio_codec: "PCMU",
            enable_aivad: true,
            exchange_timeout: Duration::from_secs(10),
        }
    }
}

/// Everything needed to build and authorize the join and leave requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig<'a> {
    pub api: ApiConfig<'a>,
    /// Unique agent name within the project.
    pub name: &'a str,
    pub channel: &'a str,
    /// RTC token for the channel.
    pub token: &'a str,
    /// RTC uid the agent joins with.
    pub agent_rtc_uid: &'a str,
    /// RTC uid of the device the agent listens to.
    pub user_id: u32,
    pub llm: LlmConfig<'a>,
    pub tts: TtsConfig<'a>,
    pub asr: AsrConfig<'a>,
    pub protocol: ProtocolSettings,
}

/// Failure message used when the build does not override it.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Please hold on a second.";
/// RTC uid used by the agent when the build does not override it.
pub const DEFAULT_AGENT_RTC_UID: &str = "1001";

macro_rules! required {
    ($name:literal) => {
        match option_env!($name) {
            Some(value) => value,
            None => return Err(Error::Config($name)),
        }
    };
}

macro_rules! optional {
    ($name:literal, $default:expr) => {
        match option_env!($name) {
            Some(value) => value,
            None => $default,
        }
    };
}

impl AgentConfig<'static> {
    /// Read the configuration baked in at compile time.
    ///
    /// Variables are named after the device build configuration
    /// (`AGORA_API_KEY`, `LLM_MODEL`, `TTS_VOICE_NAME`, ...). A missing required
    /// variable is reported as [`Error::Config`] with its name.
    pub fn from_build_env() -> Result<Self, Error> {
        let user_id = required!("AI_AGENT_USER_ID");
        let user_id = user_id
            .parse::<u32>()
            .map_err(|_| Error::Config("AI_AGENT_USER_ID"))?;

        Ok(Self {
            api: ApiConfig {
                base_url: required!("AGORA_AI_AGENT_API_URL"),
                key: required!("AGORA_API_KEY"),
                secret: required!("AGORA_API_SECRET"),
            },
            name: required!("AI_AGENT_NAME"),
            channel: required!("AI_AGENT_CHANNEL_NAME"),
            token: optional!("AI_AGENT_TOKEN", ""),
            agent_rtc_uid: optional!("AI_AGENT_RTC_UID", DEFAULT_AGENT_RTC_UID),
            user_id,
            llm: LlmConfig {
                url: required!("LLM_API_URL"),
                api_key: required!("LLM_API_KEY"),
                model: required!("LLM_MODEL"),
                system_message: required!("LLM_SYSTEM_MESSAGE"),
                greeting: required!("LLM_GREETING"),
                failure_message: optional!("LLM_FAILURE_MESSAGE", DEFAULT_FAILURE_MESSAGE),
            },
            tts: TtsConfig {
                vendor: required!("TTS_VENDOR"),
                key: required!("TTS_API_KEY"),
                region: required!("TTS_REGION"),
                voice_name: required!("TTS_VOICE_NAME"),
            },
            asr: AsrConfig {
                language: required!("ASR_LANGUAGE"),
            },
            protocol: ProtocolSettings::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_defaults_match_device_constants() {
        let settings = ProtocolSettings::default();
        assert_eq!(settings.idle_timeout, 120);
        assert_eq!(settings.max_history, 32);
        assert_eq!(settings.output_audio_codec, "PCMU");
        assert!(settings.enable_aivad);
        assert_eq!(settings.exchange_timeout, Duration::from_secs(10));
    }

    #[test]
    fn build_env_reports_first_missing_value() {
        // The test build carries no device configuration.
        if option_env!("AI_AGENT_USER_ID").is_none() {
            assert_eq!(AgentConfig::from_build_env(), Err(Error::Config("AI_AGENT_USER_ID")));
        }
    }
}
