//! HTTP DTOs for the skill endpoint.
//!
//! These mirror the voice platform's JSON envelopes and keep the wire format
//! out of the domain types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::DispatchOutcome;
use crate::domain::skill::{
    AudioDirective, IntentRequest, PlayBehavior, RequestKind, SessionAttributes,
    SessionEndedError, SkillRequest, SkillResponse, DEFAULT_LOCALE,
};

/// Response envelope version the platform expects.
const RESPONSE_VERSION: &str = "1.0";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Inbound request envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    /// Absent on audio player events.
    #[serde(default)]
    pub session: Option<SessionDto>,
    pub request: RequestDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default, rename = "new")]
    pub is_new: bool,
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentDto>,
    /// Present on session-ended requests.
    #[serde(default)]
    pub reason: Option<String>,
    /// Present on session-ended requests with reason `ERROR`.
    #[serde(default)]
    pub error: Option<SessionEndedErrorDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionEndedErrorDto {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentDto {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Envelopes that decode as JSON but cannot be turned into a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("IntentRequest without an intent")]
    MissingIntent,
}

impl TryFrom<RequestEnvelope> for SkillRequest {
    type Error = EnvelopeError;

    fn try_from(envelope: RequestEnvelope) -> Result<Self, Self::Error> {
        let RequestDto {
            request_type,
            request_id,
            locale,
            intent,
            reason,
            error,
        } = envelope.request;

        let kind = match request_type.as_str() {
            "LaunchRequest" => RequestKind::Launch,
            "IntentRequest" => {
                let intent = intent.ok_or(EnvelopeError::MissingIntent)?;
                let slots = intent
                    .slots
                    .into_iter()
                    .filter_map(|(name, slot)| slot.value.map(|value| (name, value)))
                    .collect();
                RequestKind::Intent(IntentRequest {
                    name: intent.name,
                    slots,
                })
            }
            "SessionEndedRequest" => RequestKind::SessionEnded {
                reason,
                error: error.map(|e| SessionEndedError {
                    error_type: e.error_type,
                    message: e.message,
                }),
            },
            _ => RequestKind::Other { request_type },
        };

        let (session_id, session_attributes) = match envelope.session {
            Some(session) => (session.session_id, session.attributes.unwrap_or_default()),
            None => (None, SessionAttributes::new()),
        };

        let mut request =
            SkillRequest::new(kind, locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()))
                .with_request_id(request_id.unwrap_or_default())
                .with_session_attributes(session_attributes);
        request.session_id = session_id;
        Ok(request)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Outbound response envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    #[serde(skip_serializing_if = "SessionAttributes::is_empty")]
    pub session_attributes: SessionAttributes,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<DirectiveDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: &'static str,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: String) -> Self {
        Self {
            speech_type: "PlainText",
            text,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum DirectiveDto {
    #[serde(rename = "AudioPlayer.Play", rename_all = "camelCase")]
    Play {
        play_behavior: PlayBehavior,
        audio_item: AudioItem,
    },
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
}

#[derive(Debug, Clone, Serialize)]
pub struct AudioItem {
    pub stream: AudioStream,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioStream {
    pub url: String,
    pub token: String,
    pub offset_in_milliseconds: u64,
}

impl From<AudioDirective> for DirectiveDto {
    fn from(directive: AudioDirective) -> Self {
        match directive {
            AudioDirective::Play {
                behavior,
                url,
                token,
                offset_ms,
            } => DirectiveDto::Play {
                play_behavior: behavior,
                audio_item: AudioItem {
                    stream: AudioStream {
                        url,
                        token,
                        offset_in_milliseconds: offset_ms,
                    },
                },
            },
            AudioDirective::Stop => DirectiveDto::Stop,
        }
    }
}

impl From<SkillResponse> for ResponseBody {
    fn from(response: SkillResponse) -> Self {
        let should_end_session = response.keeps_session_open().then_some(false);
        Self {
            output_speech: response.speech.map(OutputSpeech::plain_text),
            reprompt: response.reprompt.map(|text| Reprompt {
                output_speech: OutputSpeech::plain_text(text),
            }),
            directives: response.directive.into_iter().map(Into::into).collect(),
            should_end_session,
        }
    }
}

impl From<DispatchOutcome> for ResponseEnvelope {
    fn from(outcome: DispatchOutcome) -> Self {
        Self {
            version: RESPONSE_VERSION,
            session_attributes: outcome.session_attributes,
            response: outcome.response.into(),
        }
    }
}

/// Health probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<SkillRequest, EnvelopeError> {
        let envelope: RequestEnvelope = serde_json::from_value(value).unwrap();
        SkillRequest::try_from(envelope)
    }

    #[test]
    fn intent_request_decodes_slots_and_attributes() {
        let request = decode(json!({
            "version": "1.0",
            "session": {
                "sessionId": "amzn1.echo-api.session.1",
                "new": false,
                "attributes": { "currentIndex": 0 }
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "req-1",
                "locale": "es-ES",
                "intent": {
                    "name": "PlayMusicIntent",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "query": { "name": "query", "value": "Wonderwall" },
                        "unused": { "name": "unused" }
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(request.request_id, "req-1");
        assert_eq!(request.locale, "es-ES");
        assert_eq!(request.intent_name(), Some("PlayMusicIntent"));
        assert_eq!(request.slot("query"), Some("Wonderwall"));
        assert_eq!(request.slot("unused"), None);
        assert_eq!(request.session_attributes["currentIndex"], json!(0));
    }

    #[test]
    fn launch_without_session_or_locale() {
        let request = decode(json!({
            "request": { "type": "LaunchRequest", "requestId": "req-2" }
        }))
        .unwrap();

        assert_eq!(request.kind, RequestKind::Launch);
        assert_eq!(request.locale, DEFAULT_LOCALE);
        assert!(request.session_attributes.is_empty());
    }

    #[test]
    fn null_attributes_are_empty() {
        let request = decode(json!({
            "session": { "new": true, "attributes": null },
            "request": { "type": "LaunchRequest", "locale": "en-US" }
        }))
        .unwrap();
        assert!(request.session_attributes.is_empty());
    }

    #[test]
    fn session_ended_keeps_reason() {
        let request = decode(json!({
            "request": {
                "type": "SessionEndedRequest",
                "locale": "en-US",
                "reason": "USER_INITIATED"
            }
        }))
        .unwrap();

        assert_eq!(
            request.kind,
            RequestKind::SessionEnded {
                reason: Some("USER_INITIATED".to_string()),
                error: None,
            }
        );
    }

    #[test]
    fn session_ended_carries_error_and_session_id() {
        let request = decode(json!({
            "version": "1.0",
            "session": { "sessionId": "amzn1.echo-api.session.9", "new": false },
            "request": {
                "type": "SessionEndedRequest",
                "locale": "en-US",
                "reason": "ERROR",
                "error": {
                    "type": "INVALID_RESPONSE",
                    "message": "Response exceeded the allowed size"
                }
            }
        }))
        .unwrap();

        assert_eq!(request.session_id.as_deref(), Some("amzn1.echo-api.session.9"));
        assert_eq!(
            request.kind,
            RequestKind::SessionEnded {
                reason: Some("ERROR".to_string()),
                error: Some(SessionEndedError {
                    error_type: "INVALID_RESPONSE".to_string(),
                    message: "Response exceeded the allowed size".to_string(),
                }),
            }
        );
    }

    #[test]
    fn unknown_type_becomes_other() {
        let request = decode(json!({
            "request": { "type": "AudioPlayer.PlaybackStarted", "locale": "en-US" }
        }))
        .unwrap();
        assert_eq!(request.type_name(), "AudioPlayer.PlaybackStarted");
    }

    #[test]
    fn intent_request_without_intent_is_rejected() {
        let result = decode(json!({
            "request": { "type": "IntentRequest", "locale": "en-US" }
        }));
        assert_eq!(result, Err(EnvelopeError::MissingIntent));
    }

    #[test]
    fn play_response_serializes_platform_shape() {
        let body: ResponseBody = SkillResponse {
            speech: Some("Playing Wonderwall by Oasis".to_string()),
            reprompt: None,
            directive: Some(AudioDirective::play_from_start("u1", "v1")),
        }
        .into();

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "outputSpeech": { "type": "PlainText", "text": "Playing Wonderwall by Oasis" },
                "directives": [{
                    "type": "AudioPlayer.Play",
                    "playBehavior": "REPLACE_ALL",
                    "audioItem": {
                        "stream": { "url": "u1", "token": "v1", "offsetInMilliseconds": 0 }
                    }
                }]
            })
        );
    }

    #[test]
    fn reprompt_keeps_session_open() {
        let body: ResponseBody = SkillResponse {
            speech: Some("Which playlist?".to_string()),
            reprompt: Some("Which playlist?".to_string()),
            directive: None,
        }
        .into();

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["reprompt"]["outputSpeech"]["text"], json!("Which playlist?"));
        assert_eq!(value["shouldEndSession"], json!(false));
    }

    #[test]
    fn stop_directive_serializes_type_only() {
        let body: ResponseBody = SkillResponse {
            directive: Some(AudioDirective::Stop),
            ..Default::default()
        }
        .into();

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "directives": [{ "type": "AudioPlayer.Stop" }] })
        );
    }

    #[test]
    fn empty_attributes_are_omitted() {
        let envelope = ResponseEnvelope {
            version: RESPONSE_VERSION,
            session_attributes: SessionAttributes::new(),
            response: ResponseBody::default(),
        };
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "version": "1.0", "response": {} })
        );
    }
}
