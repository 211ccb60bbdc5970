pub mod card;

use crate::shared::icons::icon;
use card::HookCard;
use contracts::catalog::find_category;
use contracts::domain::a001_hook::Hook;
use contracts::domain::a002_category::CategoryInfo;
use leptos::prelude::*;
use thaw::{Flex, FlexGap, Spinner};

const STAGGER_STEP_MS: u32 = 40;
const STAGGER_MAX_MS: u32 = 400;

/// Render state of the result grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridState {
    Loading,
    Empty,
    Populated(Vec<Hook>),
}

impl GridState {
    /// Loading wins over everything, then an empty list, then the cards
    pub fn resolve(hooks: Vec<Hook>, loading: bool) -> Self {
        if loading {
            GridState::Loading
        } else if hooks.is_empty() {
            GridState::Empty
        } else {
            GridState::Populated(hooks)
        }
    }
}

/// Appear delay for the card at `index`, capped so long lists settle quickly
pub fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
        .min(STAGGER_MAX_MS)
}

/// HookGrid - renders already-filtered hooks as cards.
///
/// The grid never filters or reorders; it only picks between the loading,
/// empty and populated states.
#[component]
pub fn HookGrid(
    /// Hooks to show, in display order
    #[prop(into)]
    hooks: Signal<Vec<Hook>>,

    /// Shows the loading indicator instead of the list (default false)
    #[prop(optional, into)]
    loading: MaybeProp<bool>,

    /// Category descriptors used for card badges
    categories: Vec<CategoryInfo>,
) -> impl IntoView {
    view! {
        <section class="hook-grid-section" aria-live="polite">
            {move || match GridState::resolve(hooks.get(), loading.get().unwrap_or(false)) {
                GridState::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                        <Spinner />
                        <span>"Loading hooks..."</span>
                    </Flex>
                }
                .into_any(),
                GridState::Empty => view! {
                    <div class="hook-grid__empty">
                        {icon("inbox")}
                        <p class="hook-grid__empty-title">"No hooks in this category yet"</p>
                        <p class="hook-grid__empty-hint">
                            "Pick another category or choose All Hooks to browse the whole catalog."
                        </p>
                    </div>
                }
                .into_any(),
                GridState::Populated(items) => view! {
                    <div class="hook-grid">
                        {items
                            .into_iter()
                            .enumerate()
                            .map(|(index, hook)| {
                                let category = find_category(&categories, hook.category).cloned();
                                view! {
                                    <HookCard hook=hook category=category delay_ms=stagger_delay(index) />
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
