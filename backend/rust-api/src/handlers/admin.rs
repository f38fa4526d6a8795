use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use crate::error::ApiError;
use crate::models::admin::search_text;
use crate::models::{AdminEvent, AdminEventQuery, AdminRegistration, AdminRegistrationQuery, NewEventRequest};
use crate::AppState;

/// GET /admin/events - every event with its registration count.
pub async fn list_events(
    Query(params): Query<AdminEventQuery>,
    State(state): State<AppState>,
) -> Json<Vec<AdminEvent>> {
    Json(state.repo.all_events(search_text(&params.search)).await)
}

/// POST /admin/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<NewEventRequest>,
) -> Result<(StatusCode, Json<AdminEvent>), ApiError> {
    let new_event = payload.validate().map_err(ApiError::Validation)?;
    let record = state.repo.insert_event(new_event).await;
    tracing::info!(event_id = record.id, title = %record.title, "Event created");
    Ok((StatusCode::CREATED, Json(AdminEvent::new(&record, 0))))
}

/// GET /admin/registrations?event=<id>&search=<text>
pub async fn list_registrations(
    Query(params): Query<AdminRegistrationQuery>,
    State(state): State<AppState>,
) -> Json<Vec<AdminRegistration>> {
    Json(
        state
            .repo
            .registrations(params.event, search_text(&params.search))
            .await,
    )
}
