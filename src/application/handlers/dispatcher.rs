//! SkillDispatcher - Routes each request to exactly one handler.
//!
//! Handlers declare the [`Route`]s they accept. The dispatcher scans them in
//! registration order and runs the first match. When nothing matches, or the
//! chosen handler fails, the [`ErrorHandler`] answers instead.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Instrument;

use crate::domain::skill::{
    Language, RequestKind, SessionAttributes, SessionState, SkillError, SkillRequest,
    SkillResponse,
};
use crate::ports::MusicCatalog;

use super::conversation::{
    CancelAndStopHandler, FallbackHandler, HelpHandler, LaunchHandler, SessionEndedHandler,
};
use super::error_handler::ErrorHandler;
use super::music::{PlayMusicHandler, PlayPlaylistHandler, SearchMusicHandler};
use super::playback::{PauseHandler, ResumeHandler};

/// A request shape a handler accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Launch,
    Intent(&'static str),
    SessionEnded,
}

impl Route {
    /// Pure match on request kind and intent name.
    pub fn accepts(&self, request: &SkillRequest) -> bool {
        match (self, &request.kind) {
            (Route::Launch, RequestKind::Launch) => true,
            (Route::Intent(name), RequestKind::Intent(intent)) => intent.name == *name,
            (Route::SessionEnded, RequestKind::SessionEnded { .. }) => true,
            _ => false,
        }
    }
}

/// Per-request state handed to the executing handler.
///
/// Holds a working copy of the session attributes; the copy becomes the
/// response's attributes only if the handler succeeds.
#[derive(Debug, Clone)]
pub struct HandlerInput {
    request: SkillRequest,
    session_attributes: SessionAttributes,
}

impl HandlerInput {
    pub fn new(request: SkillRequest) -> Self {
        let session_attributes = request.session_attributes.clone();
        Self {
            request,
            session_attributes,
        }
    }

    pub fn request(&self) -> &SkillRequest {
        &self.request
    }

    pub fn language(&self) -> Language {
        self.request.language()
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.request.slot(name)
    }

    pub fn session_attributes(&self) -> &SessionAttributes {
        &self.session_attributes
    }

    /// Stores `state` in the session attributes sent back with the response.
    pub fn save_session_state(&mut self, state: &SessionState) -> Result<(), SkillError> {
        state.write_to(&mut self.session_attributes)
    }

    fn into_session_attributes(self) -> SessionAttributes {
        self.session_attributes
    }
}

/// A handler for one or more request shapes.
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// Handler name, for logs.
    fn name(&self) -> &'static str;

    /// Request shapes this handler accepts.
    fn routes(&self) -> &'static [Route];

    /// Whether this handler accepts `request`. Must not perform I/O.
    fn can_handle(&self, request: &SkillRequest) -> bool {
        self.routes().iter().any(|route| route.accepts(request))
    }

    /// Produces the response. Only the selected handler runs.
    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError>;
}

/// Result of dispatching one request.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub response: SkillResponse,
    /// Session attributes to return to the platform.
    pub session_attributes: SessionAttributes,
    /// Name of the handler that produced the response.
    pub handled_by: &'static str,
}

/// Ordered handler registry.
pub struct SkillDispatcher {
    handlers: Vec<Arc<dyn IntentHandler>>,
    error_handler: ErrorHandler,
}

impl SkillDispatcher {
    /// Creates an empty registry. Every request goes to the error handler
    /// until handlers are registered.
    pub fn new(error_handler: ErrorHandler) -> Self {
        Self {
            handlers: Vec::new(),
            error_handler,
        }
    }

    /// The skill's full handler set, in priority order.
    pub fn standard(catalog: Arc<dyn MusicCatalog>) -> Self {
        Self::new(ErrorHandler)
            .with_handler(LaunchHandler)
            .with_handler(PlayMusicHandler::new(catalog.clone()))
            .with_handler(SearchMusicHandler::new(catalog.clone()))
            .with_handler(PlayPlaylistHandler::new(catalog))
            .with_handler(PauseHandler)
            .with_handler(ResumeHandler)
            .with_handler(HelpHandler)
            .with_handler(CancelAndStopHandler)
            .with_handler(FallbackHandler)
            .with_handler(SessionEndedHandler)
    }

    /// Appends a handler after all previously registered ones.
    pub fn with_handler(mut self, handler: impl IntentHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Registered handler names, in evaluation order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    /// First registered handler accepting `request`.
    pub fn find_handler(&self, request: &SkillRequest) -> Option<&Arc<dyn IntentHandler>> {
        self.handlers
            .iter()
            .find(|handler| handler.can_handle(request))
    }

    /// Runs exactly one handler (or the error handler) for `request`.
    pub async fn dispatch(&self, request: SkillRequest) -> DispatchOutcome {
        let span = tracing::info_span!(
            "skill_dispatch",
            request_id = %request.request_id,
            request_type = request.type_name(),
            intent = request.intent_name().unwrap_or("-"),
        );

        self.dispatch_inner(request).instrument(span).await
    }

    async fn dispatch_inner(&self, request: SkillRequest) -> DispatchOutcome {
        let Some(handler) = self.find_handler(&request) else {
            let error = SkillError::no_handler(request.type_name(), request.intent_name());
            return self.recover(request, error);
        };

        tracing::debug!(handler = handler.name(), "Handler selected");

        let mut input = HandlerInput::new(request);
        match handler.handle(&mut input).await {
            Ok(response) => DispatchOutcome {
                response,
                session_attributes: input.into_session_attributes(),
                handled_by: handler.name(),
            },
            Err(error) => self.recover(input.request, error),
        }
    }

    /// Error handler path. Session attributes are returned unchanged.
    fn recover(&self, request: SkillRequest, error: SkillError) -> DispatchOutcome {
        let response = self.error_handler.handle(&request, &error);
        DispatchOutcome {
            response,
            session_attributes: request.session_attributes,
            handled_by: ErrorHandler::NAME,
        }
    }
}
