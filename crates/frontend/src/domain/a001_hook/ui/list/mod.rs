pub mod state;

use crate::domain::a001_hook::ui::grid::HookGrid;
use crate::layout::{Footer, Header};
use crate::shared::components::category_filter::CategoryFilterBar;
use contracts::catalog::{self, CategoryFilter};
use leptos::prelude::*;
use state::create_state;

/// Page shell: owns the category selection and wires the filter bar to the grid
#[component]
pub fn HookDirectoryPage() -> impl IntoView {
    let state = create_state();
    let all_hooks = catalog::hooks();
    let categories = catalog::categories();

    log::info!(
        "Hook directory mounted: {} hooks, {} categories",
        all_hooks.len(),
        categories.len()
    );

    let active = Signal::derive(move || state.with(|s| s.active_category));
    let visible = Signal::derive(move || state.with(|s| s.visible_hooks(all_hooks)));

    let on_change = Callback::new(move |filter: CategoryFilter| {
        log::debug!("Category filter changed to '{}'", filter.code());
        state.update(|s| s.select(filter));
    });

    view! {
        <div class="app-layout">
            <Header hook_count=all_hooks.len() category_count=categories.len() />
            <main class="app-main">
                <CategoryFilterBar
                    categories=categories.to_vec()
                    active=active
                    on_change=on_change
                />
                <HookGrid hooks=visible loading=false categories=categories.to_vec() />
            </main>
            <Footer />
        </div>
    }
}
