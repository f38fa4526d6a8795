use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Rounded surface holding a table with the given column headings.
/// `children` are the body rows; the body keeps `body_id` for scripting.
#[component]
pub fn TableCard(is_dark: bool, headings: Vec<&'static str>, body_id: &'static str, children: Element) -> Element {
    let surface = AppColors::card(is_dark);
    rsx! {
        section {
            style: "background: {surface}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin-top: {spacing::MD}; overflow-x: auto;",
            table { class: "table", style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        for heading in headings {
                            th { key: "{heading}", style: "text-align: left; padding: {spacing::SM};", "{heading}" }
                        }
                    }
                }
                tbody { id: body_id, {children} }
            }
        }
    }
}
