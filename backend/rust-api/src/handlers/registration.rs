use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use crate::error::ApiError;
use crate::handlers::events::{detail_for, load_event, wants_json};
use crate::models::{EventId, RegistrationForm};
use crate::pages;
use crate::services::outbox;
use crate::AppState;

/// POST /event/:id/register/ - validate, store, send confirmation, redirect.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<EventId>,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, ApiError> {
    let event = load_event(&state, event_id).await?;

    let taken = state.repo.is_registered(event_id, form.email.trim()).await;
    let stored = match form.validate(event_id, |_| taken) {
        Ok(registration) => state.repo.add_registration(registration).await,
        Err(errors) => Err(ApiError::Validation(errors)),
    };

    let registration = match stored {
        Ok(registration) => registration,
        Err(ApiError::Validation(errors)) if !wants_json(&headers) => {
            let detail = detail_for(&state, &event).await;
            let page = pages::event_detail_page(&detail, Some(&form), Some(&errors));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page)).into_response());
        }
        Err(e) => return Err(e),
    };

    tracing::info!(event_id, email = %registration.email, "Registration stored");
    state
        .outbox
        .deliver(outbox::confirmation_email(&state.config, &event, &registration));

    Ok(Redirect::to("/confirmation/").into_response())
}

/// GET /confirmation/
pub async fn confirmation() -> Html<String> {
    Html(pages::confirmation_page())
}
