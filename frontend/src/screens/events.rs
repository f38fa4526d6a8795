use crate::config;
use crate::theme::{spacing, toggle_style, AppColors};
use crate::view::{SignalTable, SignalToggles};
use crate::widgets::TableCard;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use event_list_core::{
    render_failure, EventListController, HttpEventSource, NoticeKind, PendingRefresh, TableRow,
    TimeFilter, ToggleEmphasis, COLUMN_COUNT, VIEW_LABEL,
};
use std::rc::Rc;

const COLUMN_HEADINGS: [&str; COLUMN_COUNT] = ["Title", "Date", "Registrations", ""];

type PageController = EventListController<HttpEventSource, SignalTable, SignalToggles>;

fn build_controller(table: SignalTable, toggles: SignalToggles) -> Option<Rc<PageController>> {
    let client = config::client_config();
    match HttpEventSource::new(&client) {
        Ok(source) => {
            info!("event list page at {}", client.page_url);
            Some(Rc::new(EventListController::new(
                source,
                table,
                toggles,
                client.page_url,
                config::date_formatter(),
            )))
        }
        Err(e) => {
            error!("could not create http client: {}", e);
            None
        }
    }
}

/// Runs the network half of a refresh in the background. The controller
/// drops the answer itself if a newer request was issued meanwhile.
fn drive(controller: &Rc<PageController>, pending: PendingRefresh) {
    let controller = Rc::clone(controller);
    spawn(async move {
        controller.complete(pending).await;
    });
}

async fn apply_viewer_locale(controller: &PageController) {
    match document::eval(config::LOCALE_SCRIPT).join::<String>().await {
        Ok(locale) => {
            info!("viewer locale {}", locale);
            controller.set_dates(config::date_formatter_for(&locale));
        }
        Err(e) => warn!("could not read viewer locale, keeping en-US dates: {:?}", e),
    }
}

fn filter_handler(
    controller: Option<Rc<PageController>>,
    filter: TimeFilter,
) -> impl FnMut(MouseEvent) + 'static {
    move |_| {
        if let Some(c) = &controller {
            let pending = c.select_filter(filter);
            drive(c, pending);
        }
    }
}

#[component]
pub fn EventsScreen(is_dark: bool) -> Element {
    let mut rows = use_signal(Vec::<TableRow>::new);
    let emphasis = use_signal(|| ToggleEmphasis::for_selected(TimeFilter::default()));
    let mut search = use_signal(String::new);

    let controller = use_hook(|| build_controller(SignalTable::new(rows), SignalToggles::new(emphasis)));

    // Initial load: whatever the default filter is, with empty search text.
    // Generation 1 is taken here; the fetch waits for the browser locale.
    use_hook({
        let controller = controller.clone();
        move || match &controller {
            Some(c) => {
                let pending = c.refresh();
                let c = Rc::clone(c);
                spawn(async move {
                    apply_viewer_locale(&c).await;
                    c.complete(pending).await;
                });
            }
            None => rows.set(render_failure()),
        }
    });

    let on_input = {
        let controller = controller.clone();
        move |ev: FormEvent| {
            let text = ev.value();
            search.set(text.clone());
            if let Some(c) = &controller {
                let pending = c.update_search_text(text);
                drive(c, pending);
            }
        }
    };

    let current = emphasis();
    let page_url = config::page_url().to_string();

    rsx! {
        div { style: "display: flex; gap: {spacing::SM}; align-items: center; flex-wrap: wrap;",
            for filter in TimeFilter::ALL {
                button {
                    key: "{filter}",
                    id: filter.toggle_id(),
                    class: "btn {current.emphasis(filter).css_class()}",
                    style: toggle_style(current.emphasis(filter), is_dark),
                    onclick: filter_handler(controller.clone(), filter),
                    "{filter.label()}"
                }
            }
            input {
                id: "search_input",
                r#type: "text",
                class: "form-control",
                placeholder: "Search events",
                value: "{search}",
                style: "flex: 1; min-width: 180px; padding: {spacing::SM}; border-radius: 8px; border: 1px solid {AppColors::OUTLINE}; background: transparent; color: inherit;",
                oninput: on_input,
            }
        }
        TableCard { is_dark, headings: COLUMN_HEADINGS.to_vec(), body_id: "events-table",
            for (i, row) in rows.read().iter().cloned().enumerate() {
                EventTableRow { key: "{i}", row, page_url: page_url.clone(), is_dark }
            }
        }
    }
}

#[component]
pub fn EventTableRow(row: TableRow, page_url: String, is_dark: bool) -> Element {
    let cell = format!("padding: {}; border-top: 1px solid {};", spacing::SM, AppColors::OUTLINE);
    match &row {
        TableRow::Event(event) => {
            let href = config::detail_url(&page_url, &event.detail_href);
            let link_color = AppColors::primary(is_dark);
            rsx! {
                tr {
                    td { style: "{cell}", "{event.title}" }
                    td { style: "{cell}", "{event.date}" }
                    td { style: "{cell}", "{event.registration_count}" }
                    td { style: "{cell}",
                        a {
                            href,
                            class: "btn btn-sm btn-outline-primary",
                            style: "color: {link_color}; padding: {spacing::XS} {spacing::SM}; border: 1px solid {link_color}; border-radius: 6px; text-decoration: none;",
                            "{VIEW_LABEL}"
                        }
                    }
                }
            }
        }
        TableRow::Notice(kind) => {
            let text = row.notice_text().unwrap_or_default();
            let colspan = row.colspan().to_string();
            let color = match kind {
                NoticeKind::Empty => AppColors::on_surface(is_dark),
                NoticeKind::Error => AppColors::error(is_dark),
            };
            rsx! {
                tr {
                    td { colspan, class: "text-center", style: "{cell} text-align: center; color: {color};", "{text}" }
                }
            }
        }
    }
}
