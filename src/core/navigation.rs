use serde::{Deserialize, Serialize};
use crate::core::filters::ALL_CATEGORIES;

/// Top-level navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Store,
    Profile,
}

/// Screen currently on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Finder,
    FacilityDetail(u32),
    ProductDetail(u32),
    Store,
    Profile,
}

/// User interaction that changes what is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Open a facility; the specialty filter starts over at "All"
    SelectFacility(u32),
    SelectProduct(u32),
    /// Leave whichever detail screen is open
    Back,
    /// Bottom navigation; also closes any detail screen
    SwitchTab(Tab),
    SetSpecialtyFilter(String),
}

/// Everything the page needs to decide what to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub tab: Tab,
    pub selected_facility: Option<u32>,
    pub selected_product: Option<u32>,
    pub specialty_filter: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: Tab::Home,
            selected_facility: None,
            selected_product: None,
            specialty_filter: ALL_CATEGORIES.to_string(),
        }
    }
}

impl ViewState {
    /// Pure transition: the next state after `action`
    #[must_use]
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::SelectFacility(id) => Self {
                selected_facility: Some(id),
                specialty_filter: ALL_CATEGORIES.to_string(),
                ..self
            },
            ViewAction::SelectProduct(id) => Self {
                selected_product: Some(id),
                ..self
            },
            ViewAction::Back => Self {
                selected_facility: None,
                selected_product: None,
                ..self
            },
            ViewAction::SwitchTab(tab) => Self {
                tab,
                selected_facility: None,
                selected_product: None,
                ..self
            },
            ViewAction::SetSpecialtyFilter(filter) => Self {
                specialty_filter: filter,
                ..self
            },
        }
    }

    /// Facility detail wins over product detail, which wins over the tab
    pub fn screen(&self) -> Screen {
        if let Some(id) = self.selected_facility {
            return Screen::FacilityDetail(id);
        }
        if let Some(id) = self.selected_product {
            return Screen::ProductDetail(id);
        }
        match self.tab {
            Tab::Home => Screen::Finder,
            Tab::Store => Screen::Store,
            Tab::Profile => Screen::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_finder() {
        let state = ViewState::default();

        assert_eq!(state.screen(), Screen::Finder);
        assert_eq!(state.specialty_filter, "All");
    }

    #[test]
    fn test_selecting_facility_resets_filter() {
        let state = ViewState::default()
            .apply(ViewAction::SelectFacility(1))
            .apply(ViewAction::SetSpecialtyFilter("Cardiology".to_string()))
            .apply(ViewAction::Back)
            .apply(ViewAction::SelectFacility(2));

        assert_eq!(state.screen(), Screen::FacilityDetail(2));
        assert_eq!(state.specialty_filter, "All");
    }

    #[test]
    fn test_back_returns_to_tab() {
        let state = ViewState::default()
            .apply(ViewAction::SwitchTab(Tab::Store))
            .apply(ViewAction::SelectProduct(5));
        assert_eq!(state.screen(), Screen::ProductDetail(5));

        let state = state.apply(ViewAction::Back);
        assert_eq!(state.screen(), Screen::Store);
        assert_eq!(state.selected_product, None);
    }

    #[test]
    fn test_switch_tab_closes_details() {
        let state = ViewState::default()
            .apply(ViewAction::SelectFacility(3))
            .apply(ViewAction::SwitchTab(Tab::Profile));

        assert_eq!(state.screen(), Screen::Profile);
        assert_eq!(state.selected_facility, None);
    }

    #[test]
    fn test_facility_detail_takes_precedence() {
        let state = ViewState::default()
            .apply(ViewAction::SelectProduct(1))
            .apply(ViewAction::SelectFacility(4));

        assert_eq!(state.screen(), Screen::FacilityDetail(4));
    }
}
