use contracts::catalog::{filter_hooks, CategoryFilter};
use contracts::domain::a001_hook::Hook;
use leptos::prelude::*;

/// Page state: the selected category is the only thing that changes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HookDirectoryState {
    pub active_category: CategoryFilter,
}

impl HookDirectoryState {
    /// Replaces the selection; selecting the active value again is a no-op
    pub fn select(&mut self, filter: CategoryFilter) {
        self.active_category = filter;
    }

    pub fn visible_hooks(&self, catalog: &[Hook]) -> Vec<Hook> {
        filter_hooks(catalog, self.active_category)
    }
}

pub fn create_state() -> RwSignal<HookDirectoryState> {
    RwSignal::new(HookDirectoryState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::hooks;
    use contracts::enums::HookCategory;

    #[test]
    fn test_starts_with_all() {
        let state = HookDirectoryState::default();
        assert_eq!(state.active_category, CategoryFilter::All);
        assert_eq!(state.visible_hooks(hooks()), hooks().to_vec());
    }

    #[test]
    fn test_select_testing_then_all() {
        let mut state = HookDirectoryState::default();
        state.select(CategoryFilter::Category(HookCategory::Testing));
        let visible = state.visible_hooks(hooks());
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|h| h.category == HookCategory::Testing));

        state.select(CategoryFilter::All);
        assert_eq!(state.visible_hooks(hooks()).len(), hooks().len());
    }

    #[test]
    fn test_reselecting_active_category_keeps_selection() {
        let mut state = HookDirectoryState::default();
        state.select(CategoryFilter::Category(HookCategory::Workflow));
        state.select(CategoryFilter::Category(HookCategory::Workflow));
        assert_eq!(
            state.active_category,
            CategoryFilter::Category(HookCategory::Workflow)
        );
    }

    #[test]
    fn test_category_without_hooks_shows_nothing() {
        let mut state = HookDirectoryState::default();
        state.select(CategoryFilter::Category(HookCategory::Other));
        assert!(state.visible_hooks(hooks()).is_empty());
    }
}
