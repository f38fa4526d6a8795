//! Page settings. `dx serve` builds run in the browser, so there is no
//! process environment to read at runtime; the backend URL is baked in with
//! `option_env!` and falls back to the local backend. The date locale is
//! read from the browser once the page is up.

use event_list_core::{ClientConfig, DateFormatter, DateStyle, Zone};
use url::Url;

/// Evaluated in the page; resolves to the viewer's preferred locale tag.
pub const LOCALE_SCRIPT: &str = "return navigator.language || 'en-US';";

/// URL of the event list page. Requests go to this URL with the filter
/// query appended.
pub fn page_url() -> &'static str {
    option_env!("EVENTS_PAGE_URL").unwrap_or(ClientConfig::DEFAULT_PAGE_URL)
}

pub fn client_config() -> ClientConfig {
    ClientConfig::new(page_url())
}

/// Viewer-local dates in en-US layout, used until the browser reports its
/// locale.
pub fn date_formatter() -> DateFormatter {
    DateFormatter::new(DateStyle::default(), Zone::Local)
}

pub fn date_formatter_for(locale: &str) -> DateFormatter {
    DateFormatter::new(DateStyle::for_locale(locale), Zone::Local)
}

/// Resolves a root-relative link such as `/event/7/` against `page_url`.
/// The page may be served by `dx serve` on another port, so the detail page
/// has to point back at the backend. A page URL that does not parse leaves
/// the link relative.
pub fn detail_url(page_url: &str, href: &str) -> String {
    Url::parse(page_url)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}
