//! Outbound skill responses and the builder handlers use to assemble them.

use serde::Serialize;

/// How a play directive treats whatever is already queued on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    /// Stop current playback and discard the queue.
    ReplaceAll,
}

/// Instruction for the device's audio player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AudioDirective {
    Play {
        behavior: PlayBehavior,
        url: String,
        token: String,
        offset_ms: u64,
    },
    Stop,
}

impl AudioDirective {
    /// Play `url` from the start, replacing anything queued.
    pub fn play_from_start(url: impl Into<String>, token: impl Into<String>) -> Self {
        AudioDirective::Play {
            behavior: PlayBehavior::ReplaceAll,
            url: url.into(),
            token: token.into(),
            offset_ms: 0,
        }
    }
}

/// The assembled response for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillResponse {
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub directive: Option<AudioDirective>,
}

impl SkillResponse {
    /// A turn with a reprompt waits for the user to answer.
    pub fn keeps_session_open(&self) -> bool {
        self.reprompt.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.speech.is_none() && self.reprompt.is_none() && self.directive.is_none()
    }
}

/// Accumulates speech, reprompt and a directive into a [`SkillResponse`].
///
/// A later directive replaces an earlier one; the platform accepts only one
/// audio player instruction per turn.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    response: SkillResponse,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text spoken this turn.
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.response.speech = Some(text.into());
        self
    }

    /// Sets the text re-spoken if the user does not answer, keeping the turn open.
    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.response.reprompt = Some(text.into());
        self
    }

    /// Speaks `text` and reprompts with the same text.
    pub fn ask(self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.speak(text.clone()).reprompt(text)
    }

    pub fn play(mut self, directive: AudioDirective) -> Self {
        self.response.directive = Some(directive);
        self
    }

    pub fn stop(mut self) -> Self {
        self.response.directive = Some(AudioDirective::Stop);
        self
    }

    pub fn build(self) -> SkillResponse {
        self.response
    }
}
