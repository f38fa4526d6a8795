use event_list_core::{Emphasis, TimeFilter, ToggleEmphasis};
use events_frontend::theme::{toggle_style, AppColors};

#[test]
fn active_toggle_is_filled() {
    let style = toggle_style(Emphasis::Active, false);
    assert!(style.contains(&format!("background: {};", AppColors::LIGHT_PRIMARY)));
    assert!(style.contains(&format!("color: {};", AppColors::LIGHT_ON_PRIMARY)));
}

#[test]
fn inactive_toggle_is_outlined() {
    let style = toggle_style(Emphasis::Inactive, true);
    assert!(style.contains("background: transparent;"));
    assert!(style.contains(&format!("border: 1px solid {};", AppColors::DARK_PRIMARY)));
}

#[test]
fn exactly_one_toggle_is_filled() {
    let emphasis = ToggleEmphasis::for_selected(TimeFilter::Past);
    let filled: Vec<_> = TimeFilter::ALL
        .into_iter()
        .filter(|f| toggle_style(emphasis.emphasis(*f), false).contains("background: #6750A4"))
        .collect();
    assert_eq!(filled, vec![TimeFilter::Past]);
}

#[test]
fn page_and_card_surfaces_follow_theme() {
    assert!(AppColors::surface_gradient(true).contains(AppColors::DARK_SURFACE));
    assert!(AppColors::surface_gradient(false).contains(AppColors::LIGHT_SURFACE));
    assert_ne!(AppColors::card(true), AppColors::card(false));
}
