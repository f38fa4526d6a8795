//! Events frontend library: page config, signal-backed views, UI.

pub mod app;
pub mod config;
pub mod log_bridge;
pub mod screens;
pub mod theme;
pub mod view;
pub mod widgets;
