use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use crate::error::ApiError;
use crate::models::{EventDetail, EventId, EventListQuery, EventListResponse, EventRecord};
use crate::pages;
use crate::AppState;

/// Programmatic requests carry `X-Requested-With: XMLHttpRequest` and get JSON.
pub fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "XMLHttpRequest")
        .unwrap_or(false)
}

/// GET / - event list, filtered by `filter` (upcoming|past) and `search` (title).
pub async fn event_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<EventListQuery>,
) -> Response {
    let filter = params.time_filter();
    let search = params.search_text();
    let events = state.repo.list(filter, search, Utc::now()).await;
    tracing::debug!(filter = filter.as_str(), search, count = events.len(), "event list");

    if wants_json(&headers) {
        return Json(EventListResponse { events }).into_response();
    }
    Html(pages::event_list_page(filter, search, &events)).into_response()
}

pub(crate) async fn load_event(state: &AppState, event_id: EventId) -> Result<EventRecord, ApiError> {
    state.repo.get(event_id).await.ok_or_else(|| {
        tracing::info!("No event found with id: {}", event_id);
        ApiError::NotFound(format!("event {}", event_id))
    })
}

pub(crate) async fn detail_for(state: &AppState, event: &EventRecord) -> EventDetail {
    let count = state.repo.registration_count(event.id).await;
    EventDetail::new(event, count, Utc::now())
}

/// GET /event/:id/
pub async fn event_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<EventId>,
) -> Result<Response, ApiError> {
    let event = load_event(&state, event_id).await?;
    let detail = detail_for(&state, &event).await;
    if wants_json(&headers) {
        return Ok(Json(detail).into_response());
    }
    Ok(Html(pages::event_detail_page(&detail, None, None)).into_response())
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(pages::not_found_page()))
}
