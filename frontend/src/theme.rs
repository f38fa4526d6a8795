//! Page theme: colors, spacing and the toggle button look.

use event_list_core::Emphasis;

/// Material Design 3 style colors. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#6750A4";
    pub const LIGHT_ON_PRIMARY: &'static str = "#FFFFFF";
    pub const LIGHT_SURFACE: &'static str = "#FFFBFE";
    pub const LIGHT_ON_SURFACE: &'static str = "#1C1B1F";
    pub const LIGHT_ERROR: &'static str = "#BA1A1A";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#D0BCFF";
    pub const DARK_ON_PRIMARY: &'static str = "#381E72";
    pub const DARK_SURFACE: &'static str = "#1C1B1F";
    pub const DARK_ON_SURFACE: &'static str = "#E6E1E5";
    pub const DARK_ERROR: &'static str = "#FFB4AB";

    pub const OUTLINE: &'static str = "#938F99";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn on_primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_PRIMARY
        } else {
            Self::LIGHT_ON_PRIMARY
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn card(is_dark: bool) -> &'static str {
        if is_dark {
            "rgba(73,69,79,0.9)"
        } else {
            "rgba(255,255,255,0.95)"
        }
    }
    pub fn surface_gradient(is_dark: bool) -> &'static str {
        if is_dark {
            "linear-gradient(to bottom, #1C1B1F, #2B2930)"
        } else {
            "linear-gradient(to bottom, #E7E0EC, #FFFBFE)"
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

/// 8dp grid spacing (Material 3).
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
}

/// Inline style for a filter toggle: filled when active, outlined otherwise.
pub fn toggle_style(emphasis: Emphasis, is_dark: bool) -> String {
    let primary = AppColors::primary(is_dark);
    let (background, color) = match emphasis {
        Emphasis::Active => (primary, AppColors::on_primary(is_dark)),
        Emphasis::Inactive => ("transparent", primary),
    };
    format!(
        "padding: {} {}; border-radius: 8px; border: 1px solid {primary}; cursor: pointer; background: {background}; color: {color};",
        spacing::SM,
        spacing::MD,
    )
}
