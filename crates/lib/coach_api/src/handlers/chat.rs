//! Chat handler: profile-aware proxy to the chat-completion provider.
//!
//! `POST /api/chat`:
//! 1. Validates `message` and `section`
//! 2. Resolves the mock profile for the section
//! 3. Renders the section's system prompt
//! 4. Calls the provider once
//! 5. Returns the first choice's text

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use coach_core::provider::CompletionRequest;
use coach_core::settings::ChatSettings;
use coach_core::{profile, prompt};
use tracing::{debug, error, warn};

use crate::AppState;
use crate::error::{
    AppError, AppResult, MISSING_FIELDS, MISSING_OR_INVALID_SECTION, NO_MESSAGE, NO_RESPONSE,
};
use crate::models::{ChatRequest, ChatResponse};

/// Returns `(message, section)` when the request is acceptable.
fn validate<'a>(req: &'a ChatRequest, settings: &ChatSettings) -> AppResult<(&'a str, &'a str)> {
    let message = req.message.as_deref().filter(|m| !m.is_empty());
    let section = req.section.as_deref().filter(|s| !s.is_empty());
    match (message, section) {
        (Some(m), Some(s)) if settings.accepts_section(s) => Ok((m, s)),
        _ if settings.strict_sections => Err(AppError::Validation(MISSING_OR_INVALID_SECTION)),
        _ => Err(AppError::Validation(MISSING_FIELDS)),
    }
}

fn empty_response_message(settings: &ChatSettings) -> &'static str {
    if settings.error_details {
        NO_MESSAGE
    } else {
        NO_RESPONSE
    }
}

/// `POST /api/chat`: answer a message in the context of a section profile.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let settings = &state.settings;

    // An unreadable body is treated like one with no fields.
    let req = body.map(|Json(r)| r).unwrap_or_else(|rejection| {
        debug!(%rejection, "chat body rejected");
        ChatRequest::default()
    });

    let (message, section) = validate(&req, settings)?;
    debug!(section, variant = %settings.variant, "chat request");

    let user_profile = profile::resolve(settings.profile_source, section);
    let system_prompt = prompt::render(settings.profile_source, section, user_profile);
    let completion_req =
        CompletionRequest::new(&settings.model, system_prompt, message, settings.max_tokens);

    let completion = state
        .provider
        .complete(&completion_req)
        .await
        .map_err(|e| {
            error!(error = %e, model = %settings.model, "chat provider call failed");
            AppError::upstream_call(&e, settings.error_details)
        })?;

    let content = completion.content().ok_or_else(|| {
        warn!(model = %settings.model, ?completion, "chat provider returned no content");
        AppError::UpstreamEmpty(empty_response_message(settings))
    })?;

    Ok(Json(ChatResponse {
        response: content.to_string(),
    }))
}
