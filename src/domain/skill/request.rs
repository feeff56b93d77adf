//! Inbound skill requests.

use std::collections::HashMap;

use serde::Serialize;

use super::messages::Language;

/// Session-scoped attributes as the platform round-trips them.
pub type SessionAttributes = serde_json::Map<String, serde_json::Value>;

/// Locale assumed when the platform omits one.
pub const DEFAULT_LOCALE: &str = "en-US";

/// The kind of request the platform sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RequestKind {
    /// The user opened the skill without an intent.
    Launch,
    /// The user spoke an intent.
    Intent(IntentRequest),
    /// The platform closed the session.
    SessionEnded {
        reason: Option<String>,
        error: Option<SessionEndedError>,
    },
    /// Any other request type (playback events, etc.). Never routed.
    Other { request_type: String },
}

/// Error the platform attaches when it ends a session with reason `ERROR`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionEndedError {
    pub error_type: String,
    pub message: String,
}

/// An intent and its filled slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentRequest {
    pub name: String,
    pub slots: HashMap<String, String>,
}

impl IntentRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }
}

/// A single request envelope, decoded from the platform wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillRequest {
    pub request_id: String,
    /// Absent on requests sent outside a session.
    pub session_id: Option<String>,
    pub kind: RequestKind,
    pub locale: String,
    pub session_attributes: SessionAttributes,
}

impl SkillRequest {
    /// Creates a request of the given kind with no session attributes.
    pub fn new(kind: RequestKind, locale: impl Into<String>) -> Self {
        Self {
            request_id: String::new(),
            session_id: None,
            kind,
            locale: locale.into(),
            session_attributes: SessionAttributes::new(),
        }
    }

    pub fn launch(locale: impl Into<String>) -> Self {
        Self::new(RequestKind::Launch, locale)
    }

    pub fn intent(name: impl Into<String>, locale: impl Into<String>) -> Self {
        Self::new(RequestKind::Intent(IntentRequest::new(name)), locale)
    }

    pub fn session_ended(reason: Option<String>, locale: impl Into<String>) -> Self {
        Self::new(RequestKind::SessionEnded { reason, error: None }, locale)
    }

    /// Sets the platform request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Adds a slot value. Has no effect on non-intent requests.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let RequestKind::Intent(intent) = &mut self.kind {
            intent.slots.insert(name.into(), value.into());
        }
        self
    }

    /// Replaces the session attributes.
    pub fn with_session_attributes(mut self, attributes: SessionAttributes) -> Self {
        self.session_attributes = attributes;
        self
    }

    /// Intent name, when this is an intent request.
    pub fn intent_name(&self) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent(intent) => Some(intent.name.as_str()),
            _ => None,
        }
    }

    /// Value of a slot. Unfilled and empty slots are both absent.
    pub fn slot(&self, name: &str) -> Option<&str> {
        match &self.kind {
            RequestKind::Intent(intent) => intent
                .slots
                .get(name)
                .map(String::as_str)
                .filter(|value| !value.is_empty()),
            _ => None,
        }
    }

    /// Language every user-facing string for this request is rendered in.
    pub fn language(&self) -> Language {
        Language::from_locale(&self.locale)
    }

    /// Platform name of the request type, for logs.
    pub fn type_name(&self) -> &str {
        match &self.kind {
            RequestKind::Launch => "LaunchRequest",
            RequestKind::Intent(_) => "IntentRequest",
            RequestKind::SessionEnded { .. } => "SessionEndedRequest",
            RequestKind::Other { request_type } => request_type,
        }
    }
}
