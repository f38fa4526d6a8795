use dioxus::prelude::*;
use crate::screens::EventsScreen;
use crate::theme::{spacing, AppColors};
use crate::widgets::Page;

#[component]
pub fn App() -> Element {
    let mut is_dark = use_signal(|| false);
    let label = if is_dark() { "Light" } else { "Dark" };

    rsx! {
        Page {
            is_dark: is_dark(),
            title: "Events",
            actions: rsx! {
                button {
                    id: "theme_toggle",
                    onclick: move |_| is_dark.toggle(),
                    style: "padding: {spacing::XS} {spacing::SM}; border-radius: 8px; border: 1px solid {AppColors::OUTLINE}; background: transparent; color: {AppColors::OUTLINE}; cursor: pointer;",
                    "{label}"
                }
            },
            EventsScreen { is_dark: is_dark() }
        }
    }
}
