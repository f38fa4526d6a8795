//! HttpEventSource against a real events-api instance on a local port.

mod common;

use chrono::{Duration, Utc};
use common::{RecordingTable, RecordingToggles};
use event_list_core::{
    ClientConfig, DateFormatter, DateStyle, EventListController, EventListRequest, EventSource,
    FetchError, FilterState, NoticeKind, RefreshOutcome, TableRow, TimeFilter,
};
use events_api::models::{NewEvent, Registration};
use events_api::{build_router, AppState, Config};
use pretty_assertions::assert_eq;

async fn spawn_server(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, build_router(state)).await;
    });
    format!("http://{}/", addr)
}

async fn seeded_state() -> AppState {
    let state = AppState::new(Config {
        seed_demo_events: false,
        ..Config::default()
    });
    let now = Utc::now();
    state
        .repo
        .insert_event(NewEvent::new("Last Summit", now - Duration::days(3)))
        .await;
    let launch = state
        .repo
        .insert_event(NewEvent::new("Launch", now + Duration::days(2)))
        .await;
    state
        .repo
        .insert_event(NewEvent::new("Rust Conference", now + Duration::days(1)))
        .await;
    state
        .repo
        .add_registration(Registration {
            event_id: launch.id,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await
        .expect("register");
    state
}

fn controller(
    page_url: &str,
) -> (
    EventListController<event_list_core::HttpEventSource, RecordingTable, RecordingToggles>,
    RecordingTable,
) {
    let config = ClientConfig::new(page_url);
    let source = event_list_core::HttpEventSource::new(&config).expect("client");
    let table = RecordingTable::default();
    let controller = EventListController::new(
        source,
        table.clone(),
        RecordingToggles::default(),
        config.page_url.clone(),
        DateFormatter::utc(DateStyle::Iso),
    );
    (controller, table)
}

#[tokio::test]
async fn fetches_upcoming_events_in_server_order() {
    let page_url = spawn_server(seeded_state().await).await;
    let (controller, table) = controller(&page_url);

    let outcome = controller.complete(controller.refresh()).await;
    assert_eq!(outcome, RefreshOutcome::Rendered { events: 2 });
    assert_eq!(table.titles(), vec!["Rust Conference", "Launch"]);

    match &table.rows()[1] {
        TableRow::Event(row) => {
            assert_eq!(row.registration_count, "1");
            assert!(row.detail_href.starts_with("/event/"));
            assert_eq!(row.date.len(), "2024-03-01".len());
        }
        other => panic!("unexpected row {other:?}"),
    }
}

#[tokio::test]
async fn past_filter_and_search_are_sent_to_server() {
    let page_url = spawn_server(seeded_state().await).await;
    let (controller, table) = controller(&page_url);

    controller.complete(controller.select_filter(TimeFilter::Past)).await;
    assert_eq!(table.titles(), vec!["Last Summit"]);

    let outcome = controller
        .complete(controller.update_search_text("no such thing"))
        .await;
    assert_eq!(outcome, RefreshOutcome::Rendered { events: 0 });
    assert_eq!(table.rows(), vec![TableRow::Notice(NoticeKind::Empty)]);
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let base = spawn_server(seeded_state().await).await;
    let source = event_list_core::HttpEventSource::new(&ClientConfig::default()).expect("client");
    let request = EventListRequest::new(&format!("{}missing/", base), &FilterState::default());

    let err = source.fetch(&request).await.expect_err("404 expected");
    assert!(matches!(err, FetchError::Status(404)), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let base = spawn_server(seeded_state().await).await;
    let source = event_list_core::HttpEventSource::new(&ClientConfig::default()).expect("client");
    let request = EventListRequest::new(&format!("{}health", base), &FilterState::default());

    let err = source.fetch(&request).await.expect_err("decode error expected");
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_renders_error_row() {
    // Grab a free port, then close it again.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("addr")
    };
    let (controller, table) = controller(&format!("http://{}/", addr));

    let outcome = controller.complete(controller.refresh()).await;
    assert_eq!(outcome, RefreshOutcome::Failed);
    assert_eq!(table.rows(), vec![TableRow::Notice(NoticeKind::Error)]);
}
