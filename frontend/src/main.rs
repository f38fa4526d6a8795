//! Entry point. The browser build (`dx serve`) and the desktop build launch
//! the page; a plain native run of the web build only explains how to serve
//! it.

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    use events_frontend::{app::App, log_bridge};

    // Core records reach the console through the subscriber `launch` sets up.
    if log_bridge::init(log::LevelFilter::Debug).is_err() {
        dioxus::logger::tracing::warn!("a log backend is already installed");
    }
    dioxus::launch(App);
}

#[cfg(all(not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    eprintln!("events-frontend runs in the browser. Serve it with the Dioxus CLI:");
    eprintln!("    dx serve --package events-frontend");
    eprintln!("or natively with: cargo run -p events-frontend --features desktop");
    eprintln!(
        "Events are loaded from {} (set EVENTS_PAGE_URL at build time to change it).",
        events_frontend::config::page_url()
    );
    std::process::exit(2);
}
