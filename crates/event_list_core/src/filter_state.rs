//! Client-held filter state and toggle emphasis. Pure values, no I/O.

use crate::models::TimeFilter;

/// Current time filter and search text. Lives for one page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub filter: TimeFilter,
    pub search_text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_filter(&mut self, filter: TimeFilter) {
        self.filter = filter;
    }

    pub fn update_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn toggles(&self) -> ToggleEmphasis {
        ToggleEmphasis::for_selected(self.filter)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Active,
    Inactive,
}

impl Emphasis {
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::Active => "btn-primary",
            Emphasis::Inactive => "btn-outline-primary",
        }
    }
}

/// Visual state of both toggles. Built from the selected filter only,
/// so exactly one toggle is ever active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleEmphasis {
    selected: TimeFilter,
}

impl ToggleEmphasis {
    pub fn for_selected(selected: TimeFilter) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> TimeFilter {
        self.selected
    }

    pub fn emphasis(&self, toggle: TimeFilter) -> Emphasis {
        if toggle == self.selected {
            Emphasis::Active
        } else {
            Emphasis::Inactive
        }
    }

    pub fn upcoming(&self) -> Emphasis {
        self.emphasis(TimeFilter::Upcoming)
    }

    pub fn past(&self) -> Emphasis {
        self.emphasis(TimeFilter::Past)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_upcoming_and_empty_search() {
        let state = FilterState::new();
        assert_eq!(state.filter, TimeFilter::Upcoming);
        assert_eq!(state.search_text, "");
    }

    #[test]
    fn exactly_one_toggle_is_active() {
        for selected in TimeFilter::ALL {
            let t = ToggleEmphasis::for_selected(selected);
            let active = TimeFilter::ALL
                .iter()
                .filter(|f| t.emphasis(**f) == Emphasis::Active)
                .count();
            assert_eq!(active, 1);
            assert_eq!(t.emphasis(selected), Emphasis::Active);
        }
    }

    #[test]
    fn past_selection_swaps_classes() {
        let mut state = FilterState::new();
        state.select_filter(TimeFilter::Past);
        let t = state.toggles();
        assert_eq!(t.past().css_class(), "btn-primary");
        assert_eq!(t.upcoming().css_class(), "btn-outline-primary");
    }
}
