//! Turns a response into table rows. Pure; the view decides how rows become DOM.

use crate::models::Event;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};

pub const COLUMN_COUNT: usize = 4;
pub const EMPTY_TEXT: &str = "No events found";
pub const ERROR_TEXT: &str = "Could not load events";
pub const VIEW_LABEL: &str = "View";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRow {
    pub title: String,
    pub date: String,
    pub registration_count: String,
    pub detail_href: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Empty,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableRow {
    Event(EventRow),
    /// Single cell spanning every column.
    Notice(NoticeKind),
}

impl TableRow {
    pub fn notice_text(&self) -> Option<&'static str> {
        match self {
            TableRow::Event(_) => None,
            TableRow::Notice(NoticeKind::Empty) => Some(EMPTY_TEXT),
            TableRow::Notice(NoticeKind::Error) => Some(ERROR_TEXT),
        }
    }

    pub fn colspan(&self) -> usize {
        match self {
            TableRow::Event(_) => 1,
            TableRow::Notice(_) => COLUMN_COUNT,
        }
    }
}

/// Numeric date layouts, as `Date.prototype.toLocaleDateString()` prints
/// them with no options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// `3/1/2024` (en-US)
    #[default]
    MonthFirst,
    /// `01/03/2024` (en-GB, fr, pt)
    DayFirst,
    /// `1/3/2024` (es, it, el, en-IN)
    DayFirstUnpadded,
    /// `1.3.2024` (de, fi, nb, da)
    Dotted,
    /// `01.03.2024` (ru, tr, uk, ro)
    DottedPadded,
    /// `1.03.2024` (pl)
    DottedPaddedMonth,
    /// `1. 3. 2024` (cs, sk)
    SpacedDots,
    /// `1-3-2024` (nl)
    Dashed,
    /// `2024/3/1` (ja, zh)
    YearFirst,
    /// `2024/03/01` (en-ZA)
    YearFirstPadded,
    /// `2024. 3. 1.` (ko)
    YearFirstSpacedDots,
    /// `2024. 03. 01.` (hu)
    YearFirstSpacedDotsPadded,
    /// `2024-03-01` (sv, lt, en-CA, fr-CA)
    Iso,
}

impl DateStyle {
    /// Picks a layout from a BCP 47 tag such as `navigator.language`.
    /// Unknown languages fall back to en-US.
    pub fn for_locale(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        let mut subtags = tag.split('-');
        let lang = subtags.next().unwrap_or_default();
        // Skip script subtags (`zh-Hant-TW`); regions are two letters.
        let region = subtags
            .find(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
            .unwrap_or_default();
        match (lang, region) {
            ("en", "" | "us" | "ph") => DateStyle::MonthFirst,
            ("en", "ca") => DateStyle::Iso,
            ("en", "za") => DateStyle::YearFirstPadded,
            ("en", "in") => DateStyle::DayFirstUnpadded,
            ("en", _) => DateStyle::DayFirst,
            ("fr", "ca") => DateStyle::Iso,
            ("fr", "ch") => DateStyle::DottedPadded,
            ("fr" | "pt", _) => DateStyle::DayFirst,
            ("es", "us") => DateStyle::MonthFirst,
            ("es" | "it" | "el", _) => DateStyle::DayFirstUnpadded,
            ("nl", "be") => DateStyle::DayFirstUnpadded,
            ("nl", _) => DateStyle::Dashed,
            ("de" | "fi" | "nb" | "no" | "nn" | "da" | "he", _) => DateStyle::Dotted,
            ("ru" | "tr" | "uk" | "ro", _) => DateStyle::DottedPadded,
            ("pl", _) => DateStyle::DottedPaddedMonth,
            ("cs" | "sk", _) => DateStyle::SpacedDots,
            ("zh", "hk") => DateStyle::DayFirstUnpadded,
            ("ja" | "zh", _) => DateStyle::YearFirst,
            ("ko", _) => DateStyle::YearFirstSpacedDots,
            ("hu", _) => DateStyle::YearFirstSpacedDotsPadded,
            ("sv" | "lt", _) => DateStyle::Iso,
            _ => DateStyle::MonthFirst,
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            DateStyle::MonthFirst => "%-m/%-d/%Y",
            DateStyle::DayFirst => "%d/%m/%Y",
            DateStyle::DayFirstUnpadded => "%-d/%-m/%Y",
            DateStyle::Dotted => "%-d.%-m.%Y",
            DateStyle::DottedPadded => "%d.%m.%Y",
            DateStyle::DottedPaddedMonth => "%-d.%m.%Y",
            DateStyle::SpacedDots => "%-d. %-m. %Y",
            DateStyle::Dashed => "%-d-%-m-%Y",
            DateStyle::YearFirst => "%Y/%-m/%-d",
            DateStyle::YearFirstPadded => "%Y/%m/%d",
            DateStyle::YearFirstSpacedDots => "%Y. %-m. %-d.",
            DateStyle::YearFirstSpacedDotsPadded => "%Y. %m. %d.",
            DateStyle::Iso => "%Y-%m-%d",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Zone {
    /// The viewer's timezone.
    #[default]
    Local,
    Fixed(FixedOffset),
}

/// Formats server timestamps as the viewer's calendar date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateFormatter {
    style: DateStyle,
    zone: Zone,
}

impl DateFormatter {
    pub fn new(style: DateStyle, zone: Zone) -> Self {
        Self { style, zone }
    }

    pub fn utc(style: DateStyle) -> Self {
        Self::new(style, Zone::Fixed(Utc.fix()))
    }

    pub fn style(&self) -> DateStyle {
        self.style
    }

    /// Unparseable input is shown as received.
    pub fn format(&self, raw: &str) -> String {
        let pattern = self.style.pattern();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return match self.zone {
                Zone::Local => dt.with_timezone(&Local).format(pattern).to_string(),
                Zone::Fixed(offset) => dt.with_timezone(&offset).format(pattern).to_string(),
            };
        }
        // No offset: already wall-clock time in the viewer's zone.
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return naive.format(pattern).to_string();
        }
        // Bare dates are UTC midnight, as in the browser's Date parser.
        if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            let utc = midnight.and_utc();
            return match self.zone {
                Zone::Local => utc.with_timezone(&Local).format(pattern).to_string(),
                Zone::Fixed(offset) => utc.with_timezone(&offset).format(pattern).to_string(),
            };
        }
        raw.to_string()
    }
}

pub fn event_row(event: &Event, dates: &DateFormatter) -> EventRow {
    EventRow {
        title: event.title.clone(),
        date: dates.format(&event.date),
        registration_count: event.registration_count.to_string(),
        detail_href: event.detail_href(),
    }
}

/// Full replacement for the table body: one row per event in server order,
/// or the empty placeholder.
pub fn render_events(events: &[Event], dates: &DateFormatter) -> Vec<TableRow> {
    if events.is_empty() {
        return vec![TableRow::Notice(NoticeKind::Empty)];
    }
    events
        .iter()
        .map(|e| TableRow::Event(event_row(e, dates)))
        .collect()
}

pub fn render_failure() -> Vec<TableRow> {
    vec![TableRow::Notice(NoticeKind::Error)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventId;

    fn event(id: u64, title: &str, date: &str, count: u32) -> Event {
        Event {
            id: EventId::from(id),
            title: title.to_string(),
            date: date.to_string(),
            registration_count: count,
        }
    }

    #[test]
    fn empty_list_renders_single_placeholder() {
        let rows = render_events(&[], &DateFormatter::utc(DateStyle::MonthFirst));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].notice_text(), Some("No events found"));
        assert_eq!(rows[0].colspan(), 4);
    }

    #[test]
    fn launch_event_row() {
        let rows = render_events(
            &[event(7, "Launch", "2024-03-01T10:00:00Z", 12)],
            &DateFormatter::utc(DateStyle::MonthFirst),
        );
        assert_eq!(
            rows,
            vec![TableRow::Event(EventRow {
                title: "Launch".into(),
                date: "3/1/2024".into(),
                registration_count: "12".into(),
                detail_href: "/event/7/".into(),
            })]
        );
    }

    #[test]
    fn title_is_kept_verbatim() {
        let rows = render_events(
            &[event(1, "<b>R&D</b>", "2024-03-01T10:00:00Z", 0)],
            &DateFormatter::default(),
        );
        match &rows[0] {
            TableRow::Event(row) => assert_eq!(row.title, "<b>R&D</b>"),
            other => panic!("unexpected row {other:?}"),
        }
    }

    #[test]
    fn date_styles() {
        let raw = "2024-03-01T10:00:00Z";
        assert_eq!(DateFormatter::utc(DateStyle::DayFirst).format(raw), "01/03/2024");
        assert_eq!(DateFormatter::utc(DateStyle::Dotted).format(raw), "1.3.2024");
        assert_eq!(DateFormatter::utc(DateStyle::DottedPaddedMonth).format(raw), "1.03.2024");
        assert_eq!(DateFormatter::utc(DateStyle::YearFirst).format(raw), "2024/3/1");
        assert_eq!(DateFormatter::utc(DateStyle::Iso).format(raw), "2024-03-01");
    }

    #[test]
    fn offset_shifts_calendar_day() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let fmt = DateFormatter::new(DateStyle::Iso, Zone::Fixed(tokyo));
        assert_eq!(fmt.format("2024-02-29T20:00:00Z"), "2024-03-01");
        assert_eq!(fmt.format("2024-02-29T20:00:00.123456+00:00"), "2024-03-01");
    }

    #[test]
    fn naive_and_bad_inputs() {
        let fmt = DateFormatter::utc(DateStyle::Iso);
        assert_eq!(fmt.format("2024-03-01T23:30:00"), "2024-03-01");
        assert_eq!(fmt.format("2024-03-01"), "2024-03-01");
        assert_eq!(fmt.format("soon"), "soon");
    }

    #[test]
    fn locale_tags() {
        assert_eq!(DateStyle::for_locale("en-US"), DateStyle::MonthFirst);
        assert_eq!(DateStyle::for_locale("en"), DateStyle::MonthFirst);
        assert_eq!(DateStyle::for_locale("en-GB"), DateStyle::DayFirst);
        assert_eq!(DateStyle::for_locale("de-DE"), DateStyle::Dotted);
        assert_eq!(DateStyle::for_locale("ja"), DateStyle::YearFirst);
        assert_eq!(DateStyle::for_locale("zh-Hant-TW"), DateStyle::YearFirst);
        assert_eq!(DateStyle::for_locale("sv_SE"), DateStyle::Iso);
        assert_eq!(DateStyle::for_locale(""), DateStyle::MonthFirst);
        assert_eq!(DateStyle::for_locale("tlh"), DateStyle::MonthFirst);
    }

    #[test]
    fn layouts_match_browser_short_dates() {
        let raw = "2024-03-01T10:00:00Z";
        let cases = [
            ("en-US", "3/1/2024"),
            ("en-CA", "2024-03-01"),
            ("en-GB", "01/03/2024"),
            ("nl-NL", "1-3-2024"),
            ("nl", "1-3-2024"),
            ("ko-KR", "2024. 3. 1."),
            ("de-DE", "1.3.2024"),
            ("ru-RU", "01.03.2024"),
            ("pl-PL", "1.03.2024"),
            ("cs-CZ", "1. 3. 2024"),
            ("es-ES", "1/3/2024"),
            ("fr-FR", "01/03/2024"),
            ("fr-CA", "2024-03-01"),
            ("ja-JP", "2024/3/1"),
            ("hu-HU", "2024. 03. 01."),
            ("en-ZA", "2024/03/01"),
        ];
        for (tag, expected) in cases {
            let fmt = DateFormatter::utc(DateStyle::for_locale(tag));
            assert_eq!(fmt.format(raw), expected, "locale {tag}");
        }
    }
}
