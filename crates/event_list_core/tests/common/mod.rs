//! Test doubles: a scripted event source and recording view handles.

#![allow(dead_code)]

use async_trait::async_trait;
use event_list_core::{
    DateFormatter, DateStyle, Event, EventId, EventListController, EventListRequest,
    EventListResponse, EventSource, FetchError, FilterToggles, TableRow, TableView,
    ToggleEmphasis,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

pub const PAGE_URL: &str = "http://127.0.0.1:8000/";

/// One scripted answer: wait `delay`, then return `result` (Err = HTTP status).
pub struct Scripted {
    pub delay: Duration,
    pub result: Result<EventListResponse, u16>,
}

impl Scripted {
    pub fn ok(events: Vec<Event>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(EventListResponse { events }),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(code),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Answers fetches in the order they start, recording every request.
/// An empty script answers with no events.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Rc<RefCell<VecDeque<Scripted>>>,
    requests: Rc<RefCell<Vec<EventListRequest>>>,
}

impl ScriptedSource {
    pub fn push(&self, scripted: Scripted) {
        self.script.borrow_mut().push_back(scripted);
    }

    pub fn requests(&self) -> Vec<EventListRequest> {
        self.requests.borrow().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.query().to_string())
            .collect()
    }
}

#[async_trait(?Send)]
impl EventSource for ScriptedSource {
    async fn fetch(&self, request: &EventListRequest) -> Result<EventListResponse, FetchError> {
        self.requests.borrow_mut().push(request.clone());
        let next = self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Scripted::ok(Vec::new()));
        if !next.delay.is_zero() {
            tokio::time::sleep(next.delay).await;
        }
        next.result.map_err(FetchError::Status)
    }
}

#[derive(Clone, Default)]
pub struct RecordingTable {
    rows: Rc<RefCell<Vec<TableRow>>>,
    renders: Rc<RefCell<usize>>,
}

impl RecordingTable {
    pub fn rows(&self) -> Vec<TableRow> {
        self.rows.borrow().clone()
    }

    pub fn renders(&self) -> usize {
        *self.renders.borrow()
    }

    pub fn titles(&self) -> Vec<String> {
        self.rows
            .borrow()
            .iter()
            .filter_map(|r| match r {
                TableRow::Event(row) => Some(row.title.clone()),
                TableRow::Notice(_) => None,
            })
            .collect()
    }
}

impl TableView for RecordingTable {
    fn replace_rows(&self, rows: Vec<TableRow>) {
        *self.rows.borrow_mut() = rows;
        *self.renders.borrow_mut() += 1;
    }
}

#[derive(Clone, Default)]
pub struct RecordingToggles {
    history: Rc<RefCell<Vec<ToggleEmphasis>>>,
}

impl RecordingToggles {
    pub fn history(&self) -> Vec<ToggleEmphasis> {
        self.history.borrow().clone()
    }
}

impl FilterToggles for RecordingToggles {
    fn set_emphasis(&self, emphasis: ToggleEmphasis) {
        self.history.borrow_mut().push(emphasis);
    }
}

pub type TestController = EventListController<ScriptedSource, RecordingTable, RecordingToggles>;

pub struct Harness {
    pub controller: TestController,
    pub source: ScriptedSource,
    pub table: RecordingTable,
    pub toggles: RecordingToggles,
}

pub fn harness() -> Harness {
    let source = ScriptedSource::default();
    let table = RecordingTable::default();
    let toggles = RecordingToggles::default();
    let controller = EventListController::new(
        source.clone(),
        table.clone(),
        toggles.clone(),
        PAGE_URL,
        DateFormatter::utc(DateStyle::MonthFirst),
    );
    Harness {
        controller,
        source,
        table,
        toggles,
    }
}

pub fn event(id: u64, title: &str, date: &str, registration_count: u32) -> Event {
    Event {
        id: EventId::from(id),
        title: title.to_string(),
        date: date.to_string(),
        registration_count,
    }
}
