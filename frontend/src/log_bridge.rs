//! Forwards `log` records from `event_list_core` into the tracing subscriber
//! that `dioxus::launch` installs, so fetch failures show up in the browser
//! console next to the page's own logs.

use dioxus::logger::tracing;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct TracingBridge;

static BRIDGE: TracingBridge = TracingBridge;

impl Log for TracingBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let message = record.args();
        match record.level() {
            Level::Error => tracing::error!(target: "event_list_core", origin = target, "{}", message),
            Level::Warn => tracing::warn!(target: "event_list_core", origin = target, "{}", message),
            Level::Info => tracing::info!(target: "event_list_core", origin = target, "{}", message),
            Level::Debug => tracing::debug!(target: "event_list_core", origin = target, "{}", message),
            Level::Trace => tracing::trace!(target: "event_list_core", origin = target, "{}", message),
        }
    }

    fn flush(&self) {}
}

/// Installs the bridge. Fails if another `log` backend got there first, in
/// which case records already go somewhere.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(max_level);
    Ok(())
}
