use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

/// Full-height themed page with a title bar. `actions` sits at the right
/// end of the title bar.
#[component]
pub fn Page(is_dark: bool, title: String, actions: Element, children: Element) -> Element {
    let background = AppColors::surface_gradient(is_dark);
    let text = AppColors::on_surface(is_dark);
    rsx! {
        div {
            style: "min-height: 100vh; color: {text}; background: {background}; font-family: system-ui, sans-serif;",
            main { style: "padding: {spacing::LG}; max-width: 960px; margin: 0 auto;",
                header { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: {spacing::MD};",
                    h1 { style: "margin: 0;", "{title}" }
                    {actions}
                }
                {children}
            }
        }
    }
}
