//! Join request document.
//!
//! The document is described as plain `Serialize` structs borrowing from the
//! [`AgentConfig`]; serialization follows declaration order, so the same
//! configuration always produces the same bytes.

use super::config::AgentConfig;
use super::error::Error;
use core::fmt::Write;
use heapless::{String, Vec};
use serde::{Serialize, Serializer};

/// Size budget for the serialized join document.
pub const MAX_REQUEST_LEN: usize = 4096;

/// A serialized join document.
pub type JoinBody = Vec<u8, MAX_REQUEST_LEN>;

#[derive(Debug, Serialize)]
pub struct JoinRequest<'a> {
    pub name: &'a str,
    pub properties: Properties<'a>,
}

#[derive(Debug, Serialize)]
pub struct Properties<'a> {
    pub channel: &'a str,
    pub token: &'a str,
    pub agent_rtc_uid: &'a str,
    pub remote_rtc_uids: [RtcUid; 1],
    pub parameters: Parameters<'a>,
    pub idle_timeout: u32,
    pub advanced_features: AdvancedFeatures,
    pub llm: Llm<'a>,
    pub tts: Tts<'a>,
    pub asr: Asr<'a>,
}

/// A numeric RTC uid, sent as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtcUid(String<10>);

impl From<u32> for RtcUid {
    fn from(uid: u32) -> Self {
        let mut text = String::new();
        // u32::MAX has ten digits.
        let _ = write!(text, "{}", uid);
        Self(text)
    }
}

impl Serialize for RtcUid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct Parameters<'a> {
    pub output_audio_codec: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AdvancedFeatures {
    pub enable_aivad: bool,
}

#[derive(Debug, Serialize)]
pub struct Llm<'a> {
    pub url: &'a str,
    pub api_key: &'a str,
    pub system_messages: [Message<'a>; 1],
    pub max_history: u32,
    pub greeting_message: &'a str,
    pub failure_message: &'a str,
    pub params: LlmParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct Message<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LlmParams<'a> {
    pub model: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Tts<'a> {
    pub vendor: &'a str,
    pub params: TtsParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct TtsParams<'a> {
    pub key: &'a str,
    pub region: &'a str,
    pub voice_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Asr<'a> {
    pub language: &'a str,
}

impl<'a> JoinRequest<'a> {
    /// Map the configuration record onto the join document.
    pub fn from_config(config: &AgentConfig<'a>) -> Self {
        let protocol = &config.protocol;
        Self {
            name: config.name,
            properties: Properties {
                channel: config.channel,
                token: config.token,
                agent_rtc_uid: config.agent_rtc_uid,
                remote_rtc_uids: [RtcUid::from(config.user_id)],
                parameters: Parameters {
                    output_audio_codec: protocol.output_audio_codec,
                },
                idle_timeout: protocol.idle_timeout,
                advanced_features: AdvancedFeatures {
                    enable_aivad: protocol.enable_aivad,
                },
                llm: Llm {
                    url: config.llm.url,
                    api_key: config.llm.api_key,
                    system_messages: [Message {
                        role: "system",
                        content: config.llm.system_message,
                    }],
                    max_history: protocol.max_history,
                    greeting_message: config.llm.greeting,
                    failure_message: config.llm.failure_message,
                    params: LlmParams {
                        model: config.llm.model,
                    },
                },
                tts: Tts {
                    vendor: config.tts.vendor,
                    params: TtsParams {
                        key: config.tts.key,
                        region: config.tts.region,
                        voice_name: config.tts.voice_name,
                    },
                },
                asr: Asr {
                    language: config.asr.language,
                },
            },
        }
    }

    /// Serialize into the fixed request budget.
    ///
    /// A document that does not fit is reported as [`Error::AllocationFailure`].
    pub fn to_body(&self) -> Result<JoinBody, Error> {
        serde_json_core::to_vec(self).map_err(|_| Error::AllocationFailure)
    }
}

/// Build the serialized join document for `config`.
pub fn build_join_body(config: &AgentConfig<'_>) -> Result<JoinBody, Error> {
    JoinRequest::from_config(config).to_body()
}
