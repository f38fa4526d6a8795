use std::time::Duration;

/// Where the event list page lives and how long a fetch may take (native only;
/// the browser applies its own limits).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub page_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_PAGE_URL: &'static str = "http://127.0.0.1:8000/";

    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            page_url: Self::DEFAULT_PAGE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
