//! Server-rendered HTML for browsers that navigate directly (no XHR header).
//! The same table layout the client renders: title, date, registrations, link.

use crate::error::FieldErrors;
use crate::models::{EventDetail, EventSummary, RegistrationForm, TimeFilter};
use chrono::{DateTime, Utc};

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn display_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; margin: 24px; }}
table {{ border-collapse: collapse; width: 100%; }}
td, th {{ padding: 8px; border-bottom: 1px solid #ddd; text-align: left; }}
.text-center {{ text-align: center; }}
.error {{ color: #BA1A1A; }}
</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape_html(title),
        body = body
    )
}

fn toggle_class(filter: TimeFilter, toggle: TimeFilter) -> &'static str {
    if filter == toggle {
        "btn btn-primary"
    } else {
        "btn btn-outline-primary"
    }
}

pub fn event_list_page(filter: TimeFilter, search: &str, events: &[EventSummary]) -> String {
    let rows = if events.is_empty() {
        r#"<tr><td colspan="4" class="text-center">No events found</td></tr>"#.to_string()
    } else {
        events
            .iter()
            .map(|e| {
                format!(
                    r#"<tr><td>{}</td><td>{}</td><td>{}</td><td><a href="/event/{}/" class="btn btn-sm btn-outline-primary">View</a></td></tr>"#,
                    escape_html(&e.title),
                    display_date(&e.date),
                    e.registration_count,
                    e.id
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    let body = format!(
        r#"<h1>Events</h1>
<form method="get" action="/">
<button type="submit" name="filter" value="upcoming" id="upcoming_events" class="{upcoming}">Upcoming</button>
<button type="submit" name="filter" value="past" id="past_events" class="{past}">Past</button>
<input type="text" id="search_input" name="search" value="{search}" placeholder="Search events">
</form>
<table>
<thead><tr><th>Title</th><th>Date</th><th>Registrations</th><th></th></tr></thead>
<tbody id="events-table">
{rows}
</tbody>
</table>"#,
        upcoming = toggle_class(filter, TimeFilter::Upcoming),
        past = toggle_class(filter, TimeFilter::Past),
        search = escape_html(search),
        rows = rows
    );
    layout("Events", &body)
}

fn field_errors(errors: Option<&FieldErrors>, field: &str) -> String {
    errors
        .and_then(|e| e.get(field))
        .map(|messages| {
            messages
                .iter()
                .map(|m| format!(r#"<p class="error">{}</p>"#, escape_html(m)))
                .collect::<String>()
        })
        .unwrap_or_default()
}

pub fn event_detail_page(
    event: &EventDetail,
    form: Option<&RegistrationForm>,
    errors: Option<&FieldErrors>,
) -> String {
    let registration = if event.registration_open {
        let name = form.map(|f| f.name.as_str()).unwrap_or("");
        let email = form.map(|f| f.email.as_str()).unwrap_or("");
        format!(
            r#"<h2>Register</h2>
<form method="post" action="/event/{id}/register/">
<label>Name <input type="text" name="name" value="{name}" class="form-control"></label>
{name_errors}
<label>Email <input type="email" name="email" value="{email}" class="form-control"></label>
{email_errors}
<button type="submit" class="btn btn-primary">Register</button>
</form>"#,
            id = event.id,
            name = escape_html(name),
            email = escape_html(email),
            name_errors = field_errors(errors, "name"),
            email_errors = field_errors(errors, "email"),
        )
    } else {
        "<p>This event has already taken place.</p>".to_string()
    };
    let body = format!(
        r#"<p><a href="/">Back to events</a></p>
<h1>{title}</h1>
<p>{date}</p>
<p>{description}</p>
<p>Registrations: {count}</p>
{registration}"#,
        title = escape_html(&event.title),
        date = display_date(&event.date),
        description = escape_html(&event.description),
        count = event.registration_count,
        registration = registration
    );
    layout(&event.title, &body)
}

pub fn confirmation_page() -> String {
    layout(
        "Registration confirmed",
        r#"<h1>You have registered successfully!</h1>
<p>A confirmation email is on its way.</p>
<p><a href="/">Back to events</a></p>"#,
    )
}

pub fn not_found_page() -> String {
    layout(
        "Page not found",
        r#"<h1>Page not found</h1>
<p><a href="/">Back to events</a></p>"#,
    )
}
